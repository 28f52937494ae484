//! # Request Handlers
//!
//! One module per record type, mirroring the route groups in
//! [`crate::router`]. Handlers take the shared state, the resolved actor,
//! and a validated request; the router layer stays a thin extractor shim.

pub mod auth;
pub mod customers;
pub mod employees;
pub mod leads;
pub mod notifications;
pub mod tasks;
