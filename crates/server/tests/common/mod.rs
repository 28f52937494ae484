//! # Common Test Utilities
//!
//! Provides shared test infrastructure including in-memory database setup,
//! application state construction, and seed helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use chrono::{NaiveDate, Utc};
use entity::employees::Role;
use entity::leads::LeadStatus;
use entity::tasks::{TaskPriority, TaskStatus};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use server::AppState;

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Monotonic counter feeding unique mobiles and member ids
static SEQ: AtomicUsize = AtomicUsize::new(0);

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        // Initialize tracing subscriber for tests
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

fn next_seq() -> usize { SEQ.fetch_add(1, Ordering::Relaxed) }

/// Open a fresh in-memory SQLite database with migrations applied
///
/// The pool is pinned to a single connection so every query in the test
/// observes the same in-memory database.
pub async fn setup_test_db() -> DbConn {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let conn = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");
    conn
}

/// Create application state backed by a fresh database and the built-in
/// credential pair
pub async fn create_test_app_state() -> AppState {
    AppState {
        db:       setup_test_db().await,
        verifier: Arc::new(auth::StaticVerifier::default()),
    }
}

/// Insert an employee with a unique mobile and member id
pub async fn seed_employee(db: &DbConn, name: &str, role: Role) -> entity::employees::Model {
    let seq = next_seq();
    let employee = entity::employees::ActiveModel {
        id:          Set(cuid2::create_id()),
        name:        Set(name.to_string()),
        mobile:      Set(format!("5550{:06}", seq)),
        role:        Set(role),
        department:  Set("Operations".to_string()),
        designation: Set("Generalist".to_string()),
        member_id:   Set(format!("EMP-{:04}", seq)),
        created_at:  Set(Utc::now()),
        updated_at:  Set(Utc::now()),
    };

    employee
        .insert(db)
        .await
        .expect("Failed to insert test employee")
}

/// Insert a pending medium-priority task between the given employees
pub async fn seed_task(
    db: &DbConn,
    title: &str,
    assigned_to: &str,
    assigned_by: &str,
    due_date: NaiveDate,
) -> entity::tasks::Model {
    let task = entity::tasks::ActiveModel {
        id:          Set(cuid2::create_id()),
        title:       Set(title.to_string()),
        description: Set(format!("{} description", title)),
        assigned_to: Set(assigned_to.to_string()),
        assigned_by: Set(assigned_by.to_string()),
        due_date:    Set(due_date),
        priority:    Set(TaskPriority::Medium),
        status:      Set(TaskStatus::Pending),
        created_at:  Set(Utc::now()),
        updated_at:  Set(Utc::now()),
    };

    task.insert(db).await.expect("Failed to insert test task")
}

/// Insert a warm lead, optionally assigned to an employee
pub async fn seed_lead(
    db: &DbConn,
    name: &str,
    company: &str,
    assigned_to: Option<&str>,
) -> entity::leads::Model {
    let lead = entity::leads::ActiveModel {
        id:          Set(cuid2::create_id()),
        name:        Set(name.to_string()),
        email:       Set(Some(format!("{}@example.com", name.to_lowercase().replace(' ', ".")))),
        phone:       Set(Some("5559876".to_string())),
        company:     Set(company.to_string()),
        address:     Set(None),
        status:      Set(LeadStatus::Warm),
        source:      Set(Some("referral".to_string())),
        assigned_to: Set(assigned_to.map(str::to_string)),
        notes:       Set(None),
        created_at:  Set(Utc::now()),
        updated_at:  Set(Utc::now()),
    };

    lead.insert(db).await.expect("Failed to insert test lead")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_employee_unique_contact_fields() {
        let db = setup_test_db().await;

        let first = seed_employee(&db, "First", Role::Employee).await;
        let second = seed_employee(&db, "Second", Role::Employee).await;

        assert_ne!(first.mobile, second.mobile);
        assert_ne!(first.member_id, second.member_id);
    }

    #[tokio::test]
    async fn test_seed_lead_empty_string_counts_as_unassigned() {
        let db = setup_test_db().await;

        let lead = seed_lead(&db, "Nobody Home", "Vacant Inc", Some("")).await;
        assert_eq!(lead.assignee(), None);
    }
}
