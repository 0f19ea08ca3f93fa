//! Task model definitions

use serde::{Deserialize, Serialize};

/// Task identifier, a GraphQL `Int`
pub type TaskId = i32;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Input for creating a task
#[derive(Debug, Clone, Default)]
pub struct AddTaskInput {
    pub name: Option<String>,
}

/// Input for renaming a task
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub id: Option<TaskId>,
    pub name: Option<String>,
}

/// Criteria for narrowing the task list
///
/// An empty or whitespace-only name term is ignored.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub name: Option<String>,
}

impl TaskFilter {
    fn name_term(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
    }

    /// Keep only the tasks matching this filter, preserving order
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        match self.name_term() {
            Some(term) => tasks
                .into_iter()
                .filter(|task| task.name.to_lowercase().contains(&term))
                .collect(),
            None => tasks,
        }
    }
}

#[cfg(test)]
impl Task {
    pub(crate) fn with_completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

#[cfg(test)]
impl AddTaskInput {
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
impl UpdateTaskInput {
    pub(crate) fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
impl TaskFilter {
    pub(crate) fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
