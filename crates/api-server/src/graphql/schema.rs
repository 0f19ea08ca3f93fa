//! Query and mutation roots

use std::sync::Arc;

use async_graphql::{EmptySubscription, Object, Schema};
use todo_core::task::{TaskFilter, TaskService};

use super::envelope::ResponseMessage;
use super::types::{Item, ItemFilter, ItemInput};

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a shared task service
pub fn build_schema(service: Arc<TaskService>) -> TodoSchema {
    Schema::build(
        QueryRoot {
            service: Arc::clone(&service),
        },
        MutationRoot { service },
        EmptySubscription,
    )
    .finish()
}

pub struct QueryRoot {
    service: Arc<TaskService>,
}

#[Object]
impl QueryRoot {
    /// All items, optionally filtered by a case-insensitive name fragment
    async fn todo_list(&self, filter: Option<ItemFilter>) -> async_graphql::Result<Vec<Item>> {
        let filter = filter.map(TaskFilter::from);
        let tasks = self
            .service
            .list(filter.as_ref())
            .await
            .map_err(|e| async_graphql::Error::new(ResponseMessage::from_error(&e).message))?;
        Ok(tasks.into_iter().map(Item::from).collect())
    }
}

pub struct MutationRoot {
    service: Arc<TaskService>,
}

#[Object]
impl MutationRoot {
    async fn add_item(&self, values: Option<ItemInput>) -> ResponseMessage {
        let input = values.unwrap_or_default().into();
        ResponseMessage::from_result(self.service.add(input).await, "Item added successfully")
    }

    async fn update_item(&self, values: Option<ItemInput>) -> ResponseMessage {
        let input = values.unwrap_or_default().into();
        ResponseMessage::from_result(
            self.service.update(input).await,
            "Item updated successfully",
        )
    }

    async fn delete_item(&self, id: i32) -> ResponseMessage {
        ResponseMessage::from_result(self.service.delete(id).await, "Item removed successfully")
    }

    async fn complete_item(&self, id: i32) -> ResponseMessage {
        ResponseMessage::from_result(
            self.service.complete(id).await,
            "Item completed successfully",
        )
    }
}
