//! # Data Transfer Objects Module
//!
//! Request and response types for API endpoints.

pub mod auth;
pub mod customers;
pub mod employees;
pub mod leads;
pub mod notifications;
pub mod tasks;
