//! # API Response Types
//!
//! Envelope types shared by every Keystone endpoint.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "success": false,
//!   "code": "FORBIDDEN",
//!   "message": "You do not have permission to delete this task"
//! }
//! ```
//!
//! Successful endpoints embed `success: true` next to their payload key
//! (`task`, `leads`, ...); the shared types here cover the error side and
//! the payload-free acknowledgements used by deletes and login.

use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub code:    String,
    pub message: String,
}

impl ErrorResponse {
    /// Build the wire envelope for an error.
    ///
    /// Server faults keep their detail out of the body; the full error is
    /// logged where the response is produced.
    pub fn from_error(err: &AppError) -> Self {
        let message = if err.is_server_fault() {
            "Internal server error".to_string()
        } else {
            err.message()
        };
        Self {
            success: false,
            code: err.code().to_string(),
            message,
        }
    }
}

/// Acknowledgement envelope with no payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    /// Bare `{"success": true}` acknowledgement.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Acknowledgement carrying a human-readable message.
    pub fn with_message(message: impl ToString) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            tracing::error!(code = self.code(), "request failed: {}", self.message());
        }
        let status = self.status();
        let body = ErrorResponse::from_error(&self);
        (status, axum::Json(body)).into_response()
    }
}
