//! # HTTP Middleware
//!
//! Custom middleware for request processing.

pub mod actor;

pub use actor::{actor_middleware, Actor, ACTOR_HEADER};
