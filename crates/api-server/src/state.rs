//! Application state

use std::sync::Arc;

use todo_core::task::{load_seed_file, seed_tasks, MemoryTaskStore, TaskService};

use crate::config::ServerConfig;
use crate::graphql::{build_schema, TodoSchema};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: Arc<TaskService>,
    schema: TodoSchema,
    graphiql: bool,
}

impl AppState {
    /// Create the store, task service and GraphQL schema for `config`
    pub async fn new(config: &ServerConfig) -> todo_core::Result<Self> {
        let store = match (&config.seed_file, config.seed) {
            (_, false) => MemoryTaskStore::new(),
            (Some(path), true) => MemoryTaskStore::with_tasks(load_seed_file(path).await?),
            (None, true) => MemoryTaskStore::with_tasks(seed_tasks()),
        };
        let service = Arc::new(TaskService::new(Arc::new(store)));
        let schema = build_schema(Arc::clone(&service));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                service,
                schema,
                graphiql: config.graphiql,
            }),
        })
    }

    pub fn service(&self) -> &Arc<TaskService> {
        &self.inner.service
    }

    pub fn schema(&self) -> &TodoSchema {
        &self.inner.schema
    }

    pub fn graphiql_enabled(&self) -> bool {
        self.inner.graphiql
    }
}
