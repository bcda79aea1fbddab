//! Overtime pay calculation.
//!
//! Overtime is paid at a flat hourly rate that does not depend on the
//! designation.

use rust_decimal::Decimal;

use crate::models::Employee;

/// The hourly overtime rate used when none is configured.
pub const DEFAULT_OVERTIME_HOURLY_RATE: Decimal = Decimal::ONE_HUNDRED;

/// Calculates overtime pay as `overtime_hours * hourly_rate`.
///
/// Unlike the allowances this does not need a designation: an employee
/// without one still reports overtime pay, although it does not count
/// towards their gross salary.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::{DEFAULT_OVERTIME_HOURLY_RATE, calculate_overtime};
/// use salary_report::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     name: None,
///     contact: None,
///     overtime_hours: 2,
///     designation: None,
/// };
///
/// let overtime = calculate_overtime(&employee, DEFAULT_OVERTIME_HOURLY_RATE);
/// assert_eq!(overtime, Decimal::from(200));
/// ```
pub fn calculate_overtime(employee: &Employee, hourly_rate: Decimal) -> Decimal {
    Decimal::from(employee.overtime_hours).saturating_mul(hourly_rate)
}
