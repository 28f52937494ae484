pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_employees_table;
mod m20260810_000002_create_tasks_table;
mod m20260810_000003_create_task_updates_table;
mod m20260810_000004_create_leads_table;
mod m20260810_000005_create_customers_table;
mod m20260810_000006_create_notifications_table;
mod m20260810_000007_create_login_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_employees_table::Migration),
            Box::new(m20260810_000002_create_tasks_table::Migration),
            Box::new(m20260810_000003_create_task_updates_table::Migration),
            Box::new(m20260810_000004_create_leads_table::Migration),
            Box::new(m20260810_000005_create_customers_table::Migration),
            Box::new(m20260810_000006_create_notifications_table::Migration),
            Box::new(m20260810_000007_create_login_history_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}
