//! Persistence gateway for todo items.
//!
//! # Design
//! `TodoStore` is the only seam between the HTTP layer and the document
//! store. It is deliberately thin: it knows nothing about HTTP status codes
//! or existence checks, and `replace`/`delete` of an absent id succeed
//! without effect, as they do against the real document store. Callers that
//! need a 404 check existence first (see `handlers`).

mod memory;
#[cfg(feature = "mongodb")]
mod mongo;

use std::sync::Arc;
#[cfg(feature = "mongodb")]
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::id::TodoId;
use crate::model::{TodoInput, TodoItem};

pub use memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No item exists at the requested id.
    #[error("todo not found")]
    NotFound,

    /// The request deadline elapsed before the store answered.
    #[error("store operation timed out")]
    Timeout,

    /// A stored record did not match the expected shape.
    #[error("malformed record: {0}")]
    Decode(String),

    #[error("store error: {0}")]
    Backend(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every item, in store order.
    async fn find_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError>;

    /// Insert a new item and return the id the store assigned to it.
    async fn insert(&self, input: TodoInput) -> Result<TodoId, StoreError>;

    /// Overwrite the whole record at `item.id`.
    async fn replace(&self, item: TodoItem) -> Result<(), StoreError>;

    async fn delete(&self, id: TodoId) -> Result<(), StoreError>;
}

/// Open the document store named by `settings`.
///
/// There is no fallback: a failed or slow connection is an error, and so is
/// a build without a document-store driver.
#[cfg(feature = "mongodb")]
pub async fn connect(settings: &Settings) -> Result<Arc<dyn TodoStore>, StoreError> {
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    let connect = MongoStore::connect(&settings.mongo_uri, &settings.database);
    let store = tokio::time::timeout(CONNECT_TIMEOUT, connect)
        .await
        .map_err(|_| StoreError::Timeout)??;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "mongodb"))]
pub async fn connect(_settings: &Settings) -> Result<Arc<dyn TodoStore>, StoreError> {
    Err(StoreError::Backend(
        "built without the mongodb feature, no document store available".to_string(),
    ))
}

#[cfg(all(test, not(feature = "mongodb")))]
mod tests {
    use super::*;
    use crate::config::DatabaseSettings;

    #[tokio::test]
    async fn connect_without_driver_refuses_to_start() {
        let settings = Settings::from_env(DatabaseSettings::default(), |_| None).unwrap();
        let err = connect(&settings).await.err().unwrap();
        assert!(matches!(err, StoreError::Backend(ref msg) if msg.contains("mongodb")));
    }
}
