//! Uniform mutation response and error translation

use async_graphql::SimpleObject;
use todo_core::{Error, ErrorCode};

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";
const INTERNAL_MESSAGE: &str = "An internal server error occurred";

/// Result of every mutation
///
/// Failures are reported here rather than as GraphQL errors.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct ResponseMessage {
    pub status: String,
    pub message: String,
    pub code: String,
}

impl ResponseMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            code: ErrorCode::Ok.as_str().to_string(),
        }
    }

    /// Translate a core error, hiding the detail of unexpected failures
    pub fn from_error(err: &Error) -> Self {
        let message = if err.is_client_facing() {
            err.to_string()
        } else {
            tracing::error!("Unexpected error while handling mutation: {}", err);
            INTERNAL_MESSAGE.to_string()
        };

        Self {
            status: STATUS_ERROR.to_string(),
            message,
            code: err.code().as_str().to_string(),
        }
    }

    /// Envelope for an operation outcome
    pub fn from_result<T>(result: todo_core::Result<T>, success: &str) -> Self {
        match result {
            Ok(_) => Self::success(success),
            Err(err) => Self::from_error(&err),
        }
    }
}
