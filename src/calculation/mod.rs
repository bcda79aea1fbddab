//! Salary calculation logic.
//!
//! This module contains the pure functions that derive an employee's pay
//! components from their linked designation: the percentage allowances
//! (HRA, DA, TA), overtime pay, and the gross salary that combines them.
//! None of these functions fail; absent inputs count as zero.

mod allowances;
mod gross_salary;
mod overtime;

pub use allowances::{
    AllowanceKind, calculate_allowance, calculate_da, calculate_hra, calculate_ta,
};
pub use gross_salary::{calculate_gross_salary, calculate_salary_breakdown};
pub use overtime::{DEFAULT_OVERTIME_HOURLY_RATE, calculate_overtime};
