//! Initial dataset loaded at startup
//!
//! The store starts from the built-in tasks below or from a JSON file holding
//! an array of `{ "id", "name", "completed" }` objects.

use std::collections::HashSet;
use std::path::Path;

use super::model::Task;
use super::validation::{validate_id, validate_task_exists, validate_task_name};
use crate::{Error, Result};

/// Tasks the store starts with
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Item 1"),
        Task::new(2, "Item 2"),
        Task::new(3, "Item 3"),
    ]
}

/// Read and validate a JSON seed file
pub async fn load_seed_file(path: &Path) -> Result<Vec<Task>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
        Error::internal(format!("Failed to parse seed file {}: {}", path.display(), e))
    })?;

    let tasks = check_seed(tasks)?;
    tracing::info!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Apply the same rules as live mutations to seeded tasks
fn check_seed(tasks: Vec<Task>) -> Result<Vec<Task>> {
    let mut seen_ids = HashSet::new();
    let mut accepted: Vec<Task> = Vec::with_capacity(tasks.len());

    for task in tasks {
        let id = validate_id(Some(task.id))?;
        if !seen_ids.insert(id) {
            return Err(Error::validation(format!("Duplicate id {} in seed data", id)));
        }
        let name = validate_task_name(Some(task.name.as_str()))?.to_string();
        validate_task_exists(&name, &accepted)?;

        accepted.push(Task { name, ..task });
    }

    Ok(accepted)
}
