//! Core library for the to-do list service
//!
//! This crate contains the core business logic, including:
//! - Task model and validation rules
//! - The in-memory task store
//! - Task operations (add, update, complete, delete, list)

pub mod error;
pub mod task;

pub use error::{Error, ErrorCode};
pub type Result<T> = std::result::Result<T, Error>;
