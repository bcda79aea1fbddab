//! Configuration loading for the salary report service.
//!
//! This module loads the service configuration from a YAML file: server
//! address, database connection, overtime rate, logging, and the
//! designations to seed into an empty store.
//!
//! # Example
//!
//! ```no_run
//! use salary_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary_report.yaml").unwrap();
//! println!("Database: {}", config.database().url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DatabaseConfig, LoggingConfig, SalaryConfig, ServerConfig};
