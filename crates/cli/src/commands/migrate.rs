//! # CLI Migration Command
//!
//! Database migration handling for the Keystone CLI.

use error::Result;
use migration::{Migrator, MigratorTrait as _};
use tracing::info;

use crate::{
    commands::MigrateArgs,
    config::{resolve_database_url, DatabaseConfig},
};

/// Runs database migrations
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Migrate command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn migrate(config: &DatabaseConfig, args: MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        status = %args.status,
        rollback = %args.rollback,
        fresh = %args.fresh,
        "Running database migrations..."
    );

    // Resolve the connection URL from configuration
    let database_url = resolve_database_url(config);

    // Connect to database
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    if args.status {
        // Report without changing anything
        let applied = Migrator::get_applied_migrations(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get applied migrations: {}", e))?;
        let pending = Migrator::get_pending_migrations(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get pending migrations: {}", e))?;

        info!(
            target: "migrate",
            applied_count = %applied.len(),
            pending_count = %pending.len(),
            "Migration status"
        );

        for m in &applied {
            info!(target: "migrate", migration = %m.name(), "Applied");
        }
        for m in &pending {
            info!(target: "migrate", migration = %m.name(), "Would apply");
        }

        return Ok(());
    }

    if args.fresh {
        // Drop every table and reapply from scratch
        info!(target: "migrate", "Dropping all tables and reapplying migrations...");

        Migrator::fresh(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to refresh database: {}", e))?;

        info!(target: "migrate", "Fresh migration completed successfully");
        return Ok(());
    }

    if args.rollback {
        // Rollback the last migration
        info!(target: "migrate", "Rolling back the last migration...");

        Migrator::down(&db, None)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to rollback migration: {}", e))?;

        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    // Run migrations
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    info!(target: "migrate", "Migrations completed successfully");
    Ok(())
}
