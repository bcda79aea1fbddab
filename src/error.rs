//! Error types for the salary report service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording employees,
//! managing designations and building salary reports.

use thiserror::Error;

/// The main error type for the salary report service.
///
/// Repositories, the configuration loader and the request handlers all
/// return this error type, so the HTTP layer can map every failure in a
/// single place.
///
/// # Example
///
/// ```
/// use salary_report::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An intake submission carried no designation reference.
    #[error("Designation is required")]
    MissingDesignation,

    /// An intake submission referenced a designation that does not exist.
    #[error("Unknown designation: {reference}")]
    UnknownDesignation {
        /// The reference exactly as it was submitted.
        reference: String,
    },

    /// No designation row exists for the given id.
    #[error("Designation not found: {id}")]
    DesignationNotFound {
        /// The designation id that was looked up.
        id: i64,
    },

    /// A designation cannot be deleted while employees still reference it.
    #[error("Designation {id} is referenced by {employees} employee(s)")]
    DesignationInUse {
        /// The designation id.
        id: i64,
        /// Number of employees referencing the designation.
        employees: u64,
    },

    /// A designation field failed validation.
    #[error("Invalid designation field '{field}': {message}")]
    InvalidDesignation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Employee data failed validation.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A stored row could not be decoded into a model.
    #[error("Invalid record in table '{table}': {message}")]
    InvalidRecord {
        /// The table the row was read from.
        table: String,
        /// A description of the decoding failure.
        message: String,
    },

    /// The database returned an error.
    #[error("Database error: {message}")]
    Database {
        /// The message reported by the database driver.
        message: String,
    },
}

impl From<sqlx::Error> for PayrollError {
    fn from(err: sqlx::Error) -> Self {
        PayrollError::Database {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
