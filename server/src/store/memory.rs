use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::id::TodoId;
use crate::model::{TodoInput, TodoItem};

/// In-process store. Items keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn insert(&self, input: TodoInput) -> Result<TodoId, StoreError> {
        let id = TodoId::generate();
        self.items.write().await.push(TodoItem::new(id, input));
        Ok(id)
    }

    async fn replace(&self, item: TodoItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if let Some(slot) = items.iter_mut().find(|existing| existing.id == item.id) {
            *slot = item;
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }
}
