//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, Registry};

// Keeps the non-blocking file writer alive for the process lifetime.
// Dropping the guard would silently stop file output.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            log_file: None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level: std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format: std::env::var("KEYSTONE_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
            log_file: std::env::var("KEYSTONE_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("KEYSTONE_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// True when configured for a production deployment.
    pub fn is_production(&self) -> bool { self.environment == "production" }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let level: LevelFilter = self.level.parse().unwrap_or(LevelFilter::INFO);

        match self.format.as_str() {
            "json" => self.build_json_subscriber(level),
            "pretty" => self.build_pretty_subscriber(level),
            "compact" => self.build_compact_subscriber(level),
            _ => self.build_json_subscriber(level),
        }
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339());

        if let Some(ref log_file) = self.log_file {
            let path = PathBuf::from(log_file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "keystone.log".to_string());
            let file_appender = tracing_appender::rolling::hourly(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);
            let file_layer = fmt::layer().json().with_writer(non_blocking);
            Box::new(
                Registry::default()
                    .with(level)
                    .with(subscriber)
                    .with(file_layer),
            )
        } else {
            Box::new(Registry::default().with(level).with(subscriber))
        }
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .pretty()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }

    /// Build a compact subscriber for testing.
    fn build_compact_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .compact()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }
}
