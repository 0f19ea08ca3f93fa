//! Task module
//!
//! This module contains the task model, validation rules, storage and the
//! operations built on top of them.

mod memory_store;
mod model;
mod repository;
mod seed;
mod service;
pub mod validation;

pub use memory_store::MemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use seed::{load_seed_file, seed_tasks};
pub use service::TaskService;
