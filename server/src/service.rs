use std::sync::Arc;

use crate::id::TodoId;
use crate::model::{TodoInput, TodoItem};
use crate::store::{StoreError, TodoStore};

/// Todo operations over a `TodoStore`.
///
/// Holds no state of its own: every call goes to the store. `update` and
/// `delete` do not check existence; the router does that first so it can
/// answer 404.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService").finish_non_exhaustive()
    }
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        self.store.find_all().await
    }

    /// `StoreError::NotFound` when nothing is stored at `id`.
    pub async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, StoreError> {
        self.store.find_by_id(id).await?.ok_or(StoreError::NotFound)
    }

    pub async fn create(&self, input: TodoInput) -> Result<TodoItem, StoreError> {
        let id = self.store.insert(input.clone()).await?;
        Ok(TodoItem::new(id, input))
    }

    pub async fn update(&self, id: TodoId, input: TodoInput) -> Result<(), StoreError> {
        self.store.replace(TodoItem::new(id, input)).await
    }

    pub async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.store.delete(id).await
    }
}
