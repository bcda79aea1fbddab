//! Response types for the salary report API.
//!
//! This module defines the report and form bodies returned by the handlers,
//! the error response structure, and the mapping from [`PayrollError`] to
//! HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_salary_breakdown;
use crate::error::PayrollError;
use crate::models::{Designation, Employee, SalaryBreakdown};

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a malformed form body error response.
    pub fn malformed_form(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_FORM", message)
    }

    /// Creates a malformed query or path parameter error response.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new("INVALID_PARAMETER", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PayrollError::MissingDesignation => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "MISSING_DESIGNATION",
                    "Designation is required",
                    "Choose a designation before saving the employee",
                ),
            },
            PayrollError::UnknownDesignation { reference } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "UNKNOWN_DESIGNATION",
                    format!("Unknown designation: {}", reference),
                    "The selected designation does not exist",
                ),
            },
            PayrollError::DesignationNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "DESIGNATION_NOT_FOUND",
                    format!("Designation not found: {}", id),
                ),
            },
            PayrollError::DesignationInUse { id, employees } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DESIGNATION_IN_USE",
                    format!("Designation {} cannot be deleted", id),
                    format!("{} employee(s) still reference it", employees),
                ),
            },
            PayrollError::InvalidDesignation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DESIGNATION",
                    format!("Invalid designation field '{}': {}", field, message),
                    "The designation data contains invalid information",
                ),
            },
            PayrollError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            },
            PayrollError::InvalidRecord { table, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Stored {} data could not be read", table),
                    message,
                ),
            },
            PayrollError::Database { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("DATABASE_ERROR", "Database error", message),
            },
        }
    }
}

/// Body of `GET /form/`, and of a rejected `POST /form/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeFormContext {
    /// Designations the employee may be linked to.
    pub designations: Vec<Designation>,
    /// Why the last submission was rejected, if it was.
    pub error: Option<ApiError>,
}

/// One row of the salary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalary {
    /// Employee id.
    pub id: i64,
    /// Employee name.
    pub name: Option<String>,
    /// Contact details.
    pub contact: Option<String>,
    /// Overtime hours worked.
    pub overtime_hours: u32,
    /// Linked designation id.
    pub designation_id: Option<i64>,
    /// Linked designation name.
    pub designation_name: Option<String>,
    /// Computed pay components.
    #[serde(flatten)]
    pub salary: SalaryBreakdown,
}

impl EmployeeSalary {
    /// Computes the report row for an employee.
    pub fn from_employee(employee: &Employee, overtime_hourly_rate: Decimal) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            contact: employee.contact.clone(),
            overtime_hours: employee.overtime_hours,
            designation_id: employee.designation_id(),
            designation_name: employee
                .designation
                .as_ref()
                .and_then(|d| d.name.clone()),
            salary: calculate_salary_breakdown(employee, overtime_hourly_rate),
        }
    }
}

/// Aggregates across the rows of a salary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of employees listed.
    pub employee_count: usize,
    /// Sum of the listed gross salaries.
    pub gross_salary: Decimal,
}

impl ReportTotals {
    /// Totals the given report rows; the gross sum saturates at
    /// [`Decimal::MAX`].
    pub fn from_rows(rows: &[EmployeeSalary]) -> Self {
        Self {
            employee_count: rows.len(),
            gross_salary: rows
                .iter()
                .fold(Decimal::ZERO, |total, row| {
                    total.saturating_add(row.salary.gross_salary)
                }),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
    /// The designation filter as given, if any.
    pub designation_filter: Option<String>,
    /// Listed employees with their computed salaries.
    pub employees: Vec<EmployeeSalary>,
    /// Every designation, for the filter control.
    pub designations: Vec<Designation>,
    /// Aggregates over `employees`.
    pub totals: ReportTotals,
}
