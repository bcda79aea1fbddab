//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type that captures every
//! computed pay component for one employee, as shown in the salary report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay components for one employee.
///
/// Values are exact decimals; nothing is rounded. Produced by
/// [`crate::calculation::calculate_salary_breakdown`] and never persisted.
///
/// # Example
///
/// ```
/// use salary_report::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown::zero();
/// assert_eq!(breakdown.gross_salary, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic salary taken from the designation (zero if absent).
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Travel allowance.
    pub ta: Decimal,
    /// Flat bonus taken from the designation (zero if absent).
    pub bonus: Decimal,
    /// Overtime pay (hours multiplied by the hourly overtime rate).
    pub overtime: Decimal,
    /// Sum of all components, or zero when no designation is linked.
    pub gross_salary: Decimal,
}

impl SalaryBreakdown {
    /// A breakdown with every component set to zero.
    pub fn zero() -> Self {
        Self {
            basic_salary: Decimal::ZERO,
            hra: Decimal::ZERO,
            da: Decimal::ZERO,
            ta: Decimal::ZERO,
            bonus: Decimal::ZERO,
            overtime: Decimal::ZERO,
            gross_salary: Decimal::ZERO,
        }
    }

    /// Total of the three percentage allowances.
    pub fn allowances_total(&self) -> Decimal {
        self.hra + self.da + self.ta
    }
}
