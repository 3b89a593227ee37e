use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;
use todo_core::{NewTodo, Todo, TodoPatch};

use super::TodoStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    last_id: i64,
}

/// Process-local store. Records and the id counter are lost on restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let inner = self.inner.read().await;
        inner.todos.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, StoreError> {
        input.validate()?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = input.into_todo(inner.last_id);
        inner.todos.insert(todo.id, todo.clone());
        tracing::info!(id = todo.id, "todo created");
        Ok(todo)
    }

    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Todo, StoreError> {
        patch.validate()?;

        let mut inner = self.inner.write().await;
        let todo = inner.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(todo);
        tracing::debug!(id, "todo updated");
        Ok(todo.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.todos.remove(&id).ok_or(StoreError::NotFound(id))?;
        tracing::info!(id, "todo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_one_and_survive_deletes() {
        let store = MemoryStore::new();
        let a = store.create(NewTodo::new("a")).await.unwrap();
        let b = store.create(NewTodo::new("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(2).await.unwrap();
        let c = store.create(NewTodo::new("c")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.create(NewTodo::new("shared")).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = MemoryStore::new();
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(NewTodo::new(format!("t{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn rejected_create_does_not_advance_counter() {
        let store = MemoryStore::new();
        assert!(store.create(NewTodo::new("")).await.is_err());
        let todo = store.create(NewTodo::new("first")).await.unwrap();
        assert_eq!(todo.id, 1);
    }
}
