//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AMOUNT_BOUNDS, NewDesignation};

use super::types::{AppConfig, DatabaseConfig, LoggingConfig, SalaryConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// # File Structure
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:8000"
/// database:
///   url: "sqlite://salary_report.db"
///   max_connections: 5
/// salary:
///   overtime_hourly_rate: "100"
/// logging:
///   level: info
///   json: false
/// designations:
///   - name: Manager
///     basic_salary: "1000.00"
///     hra_percent: "10"
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary_report.yaml").unwrap();
/// println!("Listening on {}", loader.server().bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - A seed designation or the overtime rate is out of range (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_report::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/salary_report.yaml")?;
    /// # Ok::<(), salary_report::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config).map_err(|message| PayrollError::ConfigParseError {
            path: origin.to_string(),
            message,
        })?;

        Ok(Self { config })
    }

    /// Returns a description of the first invalid value, if any.
    fn validate(config: &AppConfig) -> Result<(), String> {
        AMOUNT_BOUNDS
            .check(config.salary.overtime_hourly_rate)
            .map_err(|message| format!("salary.overtime_hourly_rate {}", message))?;

        for designation in &config.designations {
            designation.validate().map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration for further overrides.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the database settings.
    pub fn database(&self) -> &DatabaseConfig {
        &self.config.database
    }

    /// Returns the salary calculation settings.
    pub fn salary(&self) -> &SalaryConfig {
        &self.config.salary
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Returns the designations to seed into an empty store.
    pub fn seed_designations(&self) -> &[NewDesignation] {
        &self.config.designations
    }
}
