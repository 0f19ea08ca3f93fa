//! GraphQL API layer
//!
//! Exposes the task operations as the `todoList` query and the `addItem`,
//! `updateItem`, `deleteItem` and `completeItem` mutations.

mod envelope;
mod schema;
mod types;

pub use schema::{build_schema, TodoSchema};
