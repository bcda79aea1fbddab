//! HTTP API module for the salary report service.
//!
//! This module provides the endpoints for the employee intake form, the
//! salary report and designation administration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{build_report, create_router, perform_intake};
pub use request::{DesignationFilter, IntakeForm, ReportQuery, parse_overtime_hours};
pub use response::{
    ApiError, ApiErrorResponse, EmployeeSalary, IntakeFormContext, ReportTotals, SalaryReport,
};
pub use state::AppState;
