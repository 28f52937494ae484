//! # CLI Validate Command
//!
//! Configuration validation for the Keystone CLI.

use error::{AppError, Result};
use tracing::info;

use crate::config::{parse_socket_addr, resolve_database_url, DatabaseConfig};

/// Validates the CLI configuration
///
/// Checks that the environment resolves to a usable database target and
/// bind address without opening any connections.
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub fn validate() -> Result<()> {
    let config = DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;

    // Only the scheme is reported; the URL may carry credentials
    let database_url = resolve_database_url(&config);
    let scheme = database_url.split("://").next().unwrap_or("unknown");
    info!(target: "validate", %scheme, "Database configuration resolved");

    let host = std::env::var("KEYSTONE_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
    let port_str = std::env::var("KEYSTONE_PORT").unwrap_or_else(|_| "3000".to_owned());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| AppError::config(format!("Invalid KEYSTONE_PORT: {}", port_str)))?;

    parse_socket_addr(&host, port)
        .map_err(|e| AppError::config(format!("Invalid bind address {}:{}: {}", host, port, e)))?;

    info!(target: "validate", %host, %port, "Bind address resolved");
    Ok(())
}
