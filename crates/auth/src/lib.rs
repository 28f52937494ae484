//! # Authentication and Authorization
//!
//! Access control for the Keystone API:
//! - Role-based access policy over employees, tasks, leads, and notifications
//! - Pluggable credential verification for the login endpoint

pub mod credentials;
pub mod policy;

// Re-export commonly used types
pub use credentials::{CredentialVerifier, StaticVerifier};
pub use policy::{
    can_edit_task,
    can_manage_employees,
    can_manage_lead,
    can_post_task_update,
    can_view_login_history,
    can_view_notification,
    can_view_task,
    is_manager,
};
