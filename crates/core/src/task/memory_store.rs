//! In-memory task storage
//!
//! Tasks live for the lifetime of the process in an ordered list.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use super::validation::MIN_ID;
use crate::{Error, Result};

struct TaskList {
    tasks: Vec<Task>,
    /// `None` once every id has been handed out
    next_id: Option<TaskId>,
}

/// Process-local task store
pub struct MemoryTaskStore {
    inner: RwLock<TaskList>,
}

impl MemoryTaskStore {
    /// Create an empty store; the first task gets id 1
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Create a store holding `tasks` in the given order
    ///
    /// New ids continue after the largest id already present.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(MIN_ID), |max| max.checked_add(1).map(|id| id.max(MIN_ID)));

        Self {
            inner: RwLock::new(TaskList { tasks, next_id }),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create(&self, name: String) -> Result<Task> {
        let mut list = self.inner.write().await;

        let id = list
            .next_id
            .ok_or_else(|| Error::internal("task id space exhausted"))?;
        list.next_id = id.checked_add(1);

        let task = Task::new(id, name);
        list.tasks.push(task.clone());
        Ok(task)
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let list = self.inner.read().await;
        Ok(list.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let list = self.inner.read().await;
        Ok(list.tasks.clone())
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut list = self.inner.write().await;
        let slot = list
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| Error::not_found(format!("Task {} not found", task.id)))?;
        *slot = task.clone();
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<Option<Task>> {
        let mut list = self.inner.write().await;
        Ok(list
            .tasks
            .iter()
            .position(|t| t.id == id)
            .map(|index| list.tasks.remove(index)))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().await.tasks.len())
    }
}
