//! # CLI Serve Command
//!
//! Server startup and lifecycle for the Keystone CLI.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use auth::StaticVerifier;
use error::Result;
use migration::{Migrator, MigratorTrait as _};
use server::{create_app_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    commands::ServeArgs,
    config::{parse_socket_addr, resolve_database_url, DatabaseConfig},
};

/// Starts the API server
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Serve command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn serve(config: &DatabaseConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    // Resolve the connection URL from configuration
    let database_url = resolve_database_url(config);

    // Connect to database
    info!(target: "serve", "Connecting to database...");
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    // Run migrations automatically on startup
    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(
        target: "serve",
        "Database migrations completed successfully"
    );

    // Create application state
    let state = AppState {
        db,
        verifier: Arc::new(StaticVerifier::from_env()),
    };

    // Create the Axum router
    let app = create_app_router(state);

    // Parse the bind address
    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    serve_http(&app, &address).await
}

/// Serves the application over HTTP
async fn serve_http(app: &axum::Router, address: &SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    // ConnectInfo feeds the peer address into the login audit trail
    Ok(axum::serve(
        listener,
        app.clone()
            .into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| anyhow!("HTTP server error: {}", e))?)
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
