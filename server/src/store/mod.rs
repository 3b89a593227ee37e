//! Persistence behind the todo API.
//!
//! `TodoStore` is the contract both backends satisfy. Every method is atomic
//! with respect to what readers can observe: a call that fails leaves the
//! store exactly as it was.

mod memory;
mod sqlite;

use std::future::Future;

use todo_core::{NewTodo, Todo, TodoPatch};

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait TodoStore: Clone + Send + Sync + 'static {
    /// All todos in ascending id order.
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Validate `input`, assign the next id and persist with `done = false`.
    /// Ids start at 1 and are never handed out twice, even after a delete.
    fn create(&self, input: NewTodo) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Merge-patch the todo with `id`. Validation runs before the lookup.
    fn update(
        &self,
        id: i64,
        patch: TodoPatch,
    ) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), StoreError>> + Send;
}
