//! # Keystone API Server
//!
//! Axum-based HTTP API for the Keystone back office.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`fanout`]: Notification fanout rules for task and lead events
//! - [`handlers`]: HTTP request handlers per record type
//! - [`middleware`]: HTTP middleware (actor resolution)
//! - [`router`]: API route configuration

use std::sync::Arc;

use auth::CredentialVerifier;

pub mod dto;
pub mod fanout;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db:       sea_orm::DbConn,
    /// Credential verifier backing the login endpoint
    pub verifier: Arc<dyn CredentialVerifier>,
}
