//! Salary report service
//!
//! This crate records employees and the designations (job-grade salary
//! templates) they hold, and reports each employee's gross salary computed
//! from basic pay, percentage allowances, bonus and overtime.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
