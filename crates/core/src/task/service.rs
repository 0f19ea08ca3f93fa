//! Task operations
//!
//! Every mutation validates its input against the current store contents and
//! then applies the change. Mutations are serialized behind one write gate so
//! a check and the write that depends on it cannot interleave with another
//! writer.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::model::{AddTaskInput, Task, TaskFilter, TaskId, UpdateTaskInput};
use super::repository::TaskRepository;
use super::validation::{
    validate_id, validate_item_found, validate_task_exists, validate_task_exists_except,
    validate_task_name,
};
use crate::{Error, Result};

/// Task operations over an injected repository
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
    write_gate: Mutex<()>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            repo,
            write_gate: Mutex::new(()),
        }
    }

    /// Create a task from a validated, unique name
    pub async fn add(&self, input: AddTaskInput) -> Result<Task> {
        let _guard = self.write_gate.lock().await;

        let name = validate_task_name(input.name.as_deref())?;
        let tasks = self.repo.list().await?;
        validate_task_exists(name, &tasks)?;

        let task = self.repo.create(name.to_string()).await?;
        info!("Created task {} ({:?})", task.id, task.name);
        Ok(task)
    }

    /// Rename a task
    ///
    /// Checks run in a fixed order: id shape, existence, name shape, then
    /// uniqueness. The first failure is the one reported.
    pub async fn update(&self, input: UpdateTaskInput) -> Result<Task> {
        let _guard = self.write_gate.lock().await;

        let id = validate_id(input.id)?;
        let tasks = self.repo.list().await?;
        validate_item_found(id, &tasks)?;
        let name = validate_task_name(input.name.as_deref())?;
        validate_task_exists_except(name, id, &tasks)?;

        let mut task = self.find(id).await?;
        task.name = name.to_string();
        let task = self.repo.update(task).await?;
        info!("Renamed task {} to {:?}", task.id, task.name);
        Ok(task)
    }

    /// Mark a task completed; completing twice is not an error
    pub async fn complete(&self, id: TaskId) -> Result<Task> {
        let _guard = self.write_gate.lock().await;

        let id = validate_id(Some(id))?;
        let tasks = self.repo.list().await?;
        validate_item_found(id, &tasks)?;

        let mut task = self.find(id).await?;
        if task.completed {
            debug!("Task {} already completed", id);
            return Ok(task);
        }
        task.completed = true;
        let task = self.repo.update(task).await?;
        info!("Completed task {}", task.id);
        Ok(task)
    }

    /// Remove a task, returning it
    pub async fn delete(&self, id: TaskId) -> Result<Task> {
        let _guard = self.write_gate.lock().await;

        let id = validate_id(Some(id))?;
        let tasks = self.repo.list().await?;
        validate_item_found(id, &tasks)?;

        let task = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| Error::internal(format!("task {} vanished during delete", id)))?;
        info!("Deleted task {}", task.id);
        Ok(task)
    }

    /// All tasks in store order, optionally narrowed by `filter`
    pub async fn list(&self, filter: Option<&TaskFilter>) -> Result<Vec<Task>> {
        let tasks = self.repo.list().await?;
        Ok(match filter {
            Some(filter) => filter.apply(tasks),
            None => tasks,
        })
    }

    /// Number of tasks currently stored
    pub async fn count(&self) -> Result<usize> {
        self.repo.count().await
    }

    async fn find(&self, id: TaskId) -> Result<Task> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| Error::internal(format!("task {} vanished during update", id)))
    }
}
