//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskId};
use crate::Result;

/// Repository interface for task CRUD operations
///
/// Implementations keep tasks in insertion order and own id assignment.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Append a new, not yet completed task and return it with its assigned id
    async fn create(&self, name: String) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: TaskId) -> Result<Option<Task>>;

    /// Get all tasks in store order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Replace an existing task in place
    async fn update(&self, task: Task) -> Result<Task>;

    /// Remove a task by ID, returning it if it existed
    async fn delete(&self, id: TaskId) -> Result<Option<Task>>;

    /// Number of tasks in the store
    async fn count(&self) -> Result<usize>;
}
