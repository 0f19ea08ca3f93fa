//! Input and business-rule validation for task operations
//!
//! Validators never touch the store directly; they check a snapshot of it.

use super::model::{Task, TaskId};
use crate::{Error, Result};

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const MIN_ID: TaskId = 1;

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check that a task name is present and 3-100 characters long once trimmed.
///
/// Returns the trimmed name.
pub fn validate_task_name(name: Option<&str>) -> Result<&str> {
    let name = name
        .ok_or_else(|| Error::validation("Name is required"))?
        .trim();

    let len = name.chars().count();
    if len == 0 {
        return Err(Error::validation("Name cannot be blank"));
    }
    if len < NAME_MIN_LEN {
        return Err(Error::validation(format!(
            "Name must be at least {} characters long",
            NAME_MIN_LEN
        )));
    }
    if len > NAME_MAX_LEN {
        return Err(Error::validation(format!(
            "Name must be at most {} characters long",
            NAME_MAX_LEN
        )));
    }

    Ok(name)
}

/// Reject a name that collides, ignoring case and surrounding whitespace,
/// with any existing task.
pub fn validate_task_exists(name: &str, tasks: &[Task]) -> Result<()> {
    ensure_unique(name, tasks.iter())
}

/// Same as [`validate_task_exists`] but ignores the task being renamed.
pub fn validate_task_exists_except(name: &str, id: TaskId, tasks: &[Task]) -> Result<()> {
    ensure_unique(name, tasks.iter().filter(|task| task.id != id))
}

fn ensure_unique<'a>(name: &str, mut tasks: impl Iterator<Item = &'a Task>) -> Result<()> {
    let key = name_key(name);
    if tasks.any(|task| name_key(&task.name) == key) {
        return Err(Error::duplicate("An item with this name already exists"));
    }
    Ok(())
}

/// Check that a task with `id` is in the store.
pub fn validate_item_found(id: TaskId, tasks: &[Task]) -> Result<()> {
    if tasks.iter().any(|task| task.id == id) {
        Ok(())
    } else {
        Err(Error::not_found("Item not found"))
    }
}

/// Check that an id argument is present and at least 1.
pub fn validate_id(id: Option<TaskId>) -> Result<TaskId> {
    let id = id.ok_or_else(|| Error::validation("Id is required"))?;
    if id < MIN_ID {
        return Err(Error::validation(format!(
            "Id must be greater than or equal to {}",
            MIN_ID
        )));
    }
    Ok(id)
}
