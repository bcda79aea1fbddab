//! Configuration types for the salary report service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section is
//! optional and falls back to its default.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_OVERTIME_HOURLY_RATE;
use crate::models::NewDesignation;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://salary_report.db").
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://salary_report.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// Salary calculation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryConfig {
    /// Amount paid per overtime hour.
    #[serde(default = "default_overtime_hourly_rate")]
    pub overtime_hourly_rate: Decimal,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            overtime_hourly_rate: default_overtime_hourly_rate(),
        }
    }
}

fn default_overtime_hourly_rate() -> Decimal {
    DEFAULT_OVERTIME_HOURLY_RATE
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The complete service configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Salary calculation settings.
    #[serde(default)]
    pub salary: SalaryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Designations inserted at startup when the store has none.
    #[serde(default)]
    pub designations: Vec<NewDesignation>,
}
