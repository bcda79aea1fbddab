//! Core data models for the salary report service.
//!
//! This module contains all the domain models used throughout the service.

mod designation;
mod employee;
mod salary;

pub use designation::{
    AMOUNT_BOUNDS, DESIGNATION_NAME_MAX_LEN, DecimalBounds, Designation, NewDesignation,
    PERCENT_BOUNDS,
};
pub use employee::{EMPLOYEE_FIELD_MAX_LEN, Employee, NewEmployee};
pub use salary::SalaryBreakdown;
