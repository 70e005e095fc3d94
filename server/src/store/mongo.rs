//! Document-store gateway backed by MongoDB.
//!
//! Records are mapped field by field through the constants below rather than
//! through a derived codec, so a record of the wrong shape is reported as
//! `StoreError::Decode` at this boundary.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    Client, Collection,
};
use tracing::info;

use super::{StoreError, TodoStore};
use crate::config::DatabaseSettings;
use crate::id::TodoId;
use crate::model::{TodoInput, TodoItem};

const ID_FIELD: &str = "_id";
const NAME_FIELD: &str = "name";
const DONE_FIELD: &str = "done";

#[derive(Clone, Debug)]
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect and ping. Fails if the server cannot be reached.
    pub async fn connect(uri: &str, settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend)?;

        info!(
            database = %settings.database_name,
            collection = %settings.collection_name,
            "connected to document store"
        );

        let collection = client
            .database(&settings.database_name)
            .collection::<Document>(&settings.collection_name);
        Ok(Self { collection })
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(backend)?;
        let docs: Vec<Document> = cursor.try_collect().await.map_err(backend)?;
        docs.iter().map(from_document).collect()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { ID_FIELD: object_id(id) })
            .await
            .map_err(backend)?;
        found.as_ref().map(from_document).transpose()
    }

    async fn insert(&self, input: TodoInput) -> Result<TodoId, StoreError> {
        let result = self
            .collection
            .insert_one(fields_document(&input.name, input.done))
            .await
            .map_err(backend)?;
        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(TodoId::from_bytes(oid.bytes())),
            other => Err(StoreError::Decode(format!(
                "store assigned a non object id: {other}"
            ))),
        }
    }

    async fn replace(&self, item: TodoItem) -> Result<(), StoreError> {
        let oid = object_id(item.id);
        let mut replacement = fields_document(&item.name, item.done);
        replacement.insert(ID_FIELD, oid);
        self.collection
            .replace_one(doc! { ID_FIELD: oid }, replacement)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.collection
            .delete_one(doc! { ID_FIELD: object_id(id) })
            .await
            .map_err(backend)?;
        Ok(())
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn object_id(id: TodoId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

fn fields_document(name: &str, done: bool) -> Document {
    doc! { NAME_FIELD: name, DONE_FIELD: done }
}

/// Missing `name`/`done` read as their zero values; `_id` is required.
fn from_document(doc: &Document) -> Result<TodoItem, StoreError> {
    let id = match doc.get(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => TodoId::from_bytes(oid.bytes()),
        Some(other) => {
            return Err(StoreError::Decode(format!("{ID_FIELD} is not an object id: {other}")));
        }
        None => return Err(StoreError::Decode(format!("missing {ID_FIELD}"))),
    };
    let name = match doc.get(NAME_FIELD) {
        Some(Bson::String(s)) => s.clone(),
        None | Some(Bson::Null) => String::new(),
        Some(other) => {
            return Err(StoreError::Decode(format!("{NAME_FIELD} is not a string: {other}")));
        }
    };
    let done = match doc.get(DONE_FIELD) {
        Some(Bson::Boolean(b)) => *b,
        None | Some(Bson::Null) => false,
        Some(other) => {
            return Err(StoreError::Decode(format!("{DONE_FIELD} is not a bool: {other}")));
        }
    };
    Ok(TodoItem { id, name, done })
}
