//! Entity definitions for Keystone ERP
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! Role and status enumerations are stored as plain strings so the schema
//! works unchanged on SQLite and Postgres.

pub mod employees;
pub use employees::Entity as Employees;
pub mod tasks;
pub use tasks::Entity as Tasks;
pub mod task_updates;
pub use task_updates::Entity as TaskUpdates;
pub mod leads;
pub use leads::Entity as Leads;
pub mod customers;
pub use customers::Entity as Customers;
pub mod notifications;
pub use notifications::Entity as Notifications;
pub mod login_history;
pub use login_history::Entity as LoginHistory;
