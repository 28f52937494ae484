//! # Keystone CLI
//!
//! Command-line interface for the Keystone back office.
//!
//! ## Usage
//!
//! ```bash
//! keystone serve    # Start the API server (runs migrations automatically)
//! keystone migrate  # Run database migrations
//! keystone --help   # Show help
//! ```

mod commands;
mod config;

use clap::{CommandFactory as _, Parser};
use commands::Commands;
use error::{AppError, Result};

/// Keystone - business operations backend
#[derive(Parser, Debug)]
#[command(name = "keystone")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "KEYSTONE_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Optional log file path
    #[arg(long, env = "KEYSTONE_LOG_FILE")]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    logging::init(&cli.log_level, &cli.log_format, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Keystone CLI starting...");

    match cli.command {
        Commands::Serve(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
            commands::serve::serve(&db_config, &args).await?
        },
        Commands::Migrate(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
            commands::migrate::migrate(&db_config, args).await?
        },
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command())?,
        Commands::Validate => commands::validate::validate()?,
    }

    logging::info!(target: "app", "Keystone CLI completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(&["keystone", "serve", "--host", "127.0.0.1", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, 8080);
            },
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::parse_from(&["keystone", "validate"]);
        match cli.command {
            Commands::Validate => {},
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(&["keystone", "validate"]);
        assert_eq!(cli.log_format, "pretty");
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_migrate_rollback() {
        let cli = Cli::parse_from(&["keystone", "migrate", "--rollback"]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.rollback);
                assert!(!args.fresh);
                assert!(!args.status);
            },
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_migrate_fresh() {
        let cli = Cli::parse_from(&["keystone", "migrate", "--fresh"]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.fresh);
            },
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_migrate_status() {
        let cli = Cli::parse_from(&["keystone", "migrate", "--status"]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.status);
                assert!(!args.rollback);
            },
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_completions_parse() {
        let cli = Cli::parse_from(&["keystone", "completions", "bash"]);
        match cli.command {
            Commands::Completions(args) => {
                assert!(matches!(args.shell, clap_complete::Shell::Bash));
            },
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_command_factory() {
        let cmd = Cli::command();
        assert!(cmd.get_name() == "keystone");
    }
}
