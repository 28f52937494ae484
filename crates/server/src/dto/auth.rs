//! # Auth Data Transfer Objects
//!
//! Request and response types for login and the login-history audit trail.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request carrying the shared back-office credential pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    /// Mobile number to verify
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile:   String,
    /// Password to verify
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login verdict; always returned with HTTP 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

/// One recorded login attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginHistoryEntry {
    /// Attempt's unique identifier
    pub id:        String,
    /// Mobile number presented
    pub mobile:    String,
    /// Whether the attempt succeeded
    pub success:   bool,
    /// Client IP address
    pub ip:        String,
    /// Attempt timestamp
    pub timestamp: String,
}

/// Response for the login-history list, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginHistoryResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Recorded attempts
    pub history: Vec<LoginHistoryEntry>,
}
