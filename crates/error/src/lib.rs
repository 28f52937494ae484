//! # Keystone Error Infrastructure
//!
//! Error types and API response handling for the Keystone application.

pub mod response;

pub use response::{ErrorResponse, SuccessResponse};

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound { message: String },

    #[error("BadRequest: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation: {message}")]
    Validation { message: String },

    #[error("Internal: {message}")]
    Internal { message: String },

    #[error("Database: {message}")]
    Database { message: String },

    #[error("IO: {message}")]
    Io { message: String },

    #[error("Config: {message}")]
    Config { message: String },

    #[error("Migration: {message}")]
    Migration { message: String },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a bad request error.
    #[inline]
    pub fn bad_request(message: impl ToString) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a forbidden error.
    #[inline]
    pub fn forbidden(message: impl ToString) -> Self {
        Self::Forbidden {
            message: message.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound { .. } => http::StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => http::StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => http::StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => http::StatusCode::FORBIDDEN,
            AppError::Conflict { .. } => http::StatusCode::CONFLICT,
            AppError::Validation { .. } => http::StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::Forbidden { .. } => "FORBIDDEN",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
            AppError::Database { .. } => "DATABASE_ERROR",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Migration { .. } => "MIGRATION_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound { message }
            | AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::Conflict { message }
            | AppError::Validation { message }
            | AppError::Internal { message }
            | AppError::Database { message }
            | AppError::Io { message }
            | AppError::Config { message }
            | AppError::Migration { message } => message.clone(),
        }
    }

    /// True for errors whose message must not reach the client.
    pub fn is_server_fault(&self) -> bool {
        self.status() == http::StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let wrap = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::NotFound { message } => Self::NotFound {
                message: wrap(message),
            },
            AppError::BadRequest { message } => Self::BadRequest {
                message: wrap(message),
            },
            AppError::Unauthorized { message } => Self::Unauthorized {
                message: wrap(message),
            },
            AppError::Forbidden { message } => Self::Forbidden {
                message: wrap(message),
            },
            AppError::Conflict { message } => Self::Conflict {
                message: wrap(message),
            },
            AppError::Validation { message } => Self::Validation {
                message: wrap(message),
            },
            AppError::Internal { message } => Self::Internal {
                message: wrap(message),
            },
            AppError::Database { message } => Self::Database {
                message: wrap(message),
            },
            AppError::Io { message } => Self::Io {
                message: wrap(message),
            },
            AppError::Config { message } => Self::Config {
                message: wrap(message),
            },
            AppError::Migration { message } => Self::Migration {
                message: wrap(message),
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert String to AppError.
impl From<String> for AppError {
    fn from(s: String) -> Self {
        Self::BadRequest { message: s }
    }
}

/// Convert &str to AppError.
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Convert all errors to strings
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        } else {
            messages.join(", ")
        };

        Self::Validation { message }
    }
}
