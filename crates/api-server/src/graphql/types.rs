//! GraphQL object and input types

use async_graphql::{InputObject, SimpleObject};

use todo_core::task::{AddTaskInput, Task, TaskFilter, UpdateTaskInput};

/// A to-do item as seen by clients
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub completed: bool,
}

impl From<Task> for Item {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            completed: task.completed,
        }
    }
}

/// Values for `addItem` and `updateItem`
#[derive(Debug, Clone, Default, InputObject)]
pub struct ItemInput {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl From<ItemInput> for AddTaskInput {
    fn from(input: ItemInput) -> Self {
        Self { name: input.name }
    }
}

impl From<ItemInput> for UpdateTaskInput {
    fn from(input: ItemInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
        }
    }
}

/// Narrowing criteria for `todoList`
///
/// `id` is accepted for client compatibility but does not narrow the list.
#[derive(Debug, Clone, Default, InputObject)]
pub struct ItemFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl From<ItemFilter> for TaskFilter {
    fn from(filter: ItemFilter) -> Self {
        Self { name: filter.name }
    }
}
