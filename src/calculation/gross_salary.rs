//! Gross salary calculation.
//!
//! Gross salary is basic salary plus the three percentage allowances, the
//! designation bonus and overtime pay. Employees without a designation have
//! a gross salary of zero.

use rust_decimal::Decimal;

use crate::models::{Employee, SalaryBreakdown};

use super::allowances::{calculate_da, calculate_hra, calculate_ta};
use super::overtime::calculate_overtime;

/// Calculates an employee's gross salary.
///
/// Returns zero when no designation is linked. Otherwise returns
/// `basic_salary + hra + da + ta + bonus + overtime`, where an absent basic
/// salary or bonus counts as zero.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::{DEFAULT_OVERTIME_HOURLY_RATE, calculate_gross_salary};
/// use salary_report::models::{Designation, Employee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let employee = Employee {
///     id: 1,
///     name: Some("Asha".to_string()),
///     contact: None,
///     overtime_hours: 2,
///     designation: Some(Designation {
///         id: 1,
///         name: Some("Manager".to_string()),
///         basic_salary: Some(dec("1000.00")),
///         hra_percent: Some(dec("10")),
///         da_percent: Some(dec("5")),
///         ta_percent: Some(dec("0")),
///         bonus: Some(dec("50.00")),
///     }),
/// };
///
/// let gross = calculate_gross_salary(&employee, DEFAULT_OVERTIME_HOURLY_RATE);
/// assert_eq!(gross, dec("1400.00"));
/// ```
pub fn calculate_gross_salary(employee: &Employee, overtime_hourly_rate: Decimal) -> Decimal {
    calculate_salary_breakdown(employee, overtime_hourly_rate).gross_salary
}

/// Calculates every pay component for an employee.
///
/// Overtime is always reported, but only counts towards gross salary when a
/// designation is linked. Sums saturate at the `Decimal` range instead of
/// overflowing.
pub fn calculate_salary_breakdown(
    employee: &Employee,
    overtime_hourly_rate: Decimal,
) -> SalaryBreakdown {
    let overtime = calculate_overtime(employee, overtime_hourly_rate);

    let Some(designation) = employee.designation.as_ref() else {
        return SalaryBreakdown {
            overtime,
            ..SalaryBreakdown::zero()
        };
    };

    let basic_salary = designation.basic_salary.unwrap_or(Decimal::ZERO);
    let bonus = designation.bonus.unwrap_or(Decimal::ZERO);
    let hra = calculate_hra(employee);
    let da = calculate_da(employee);
    let ta = calculate_ta(employee);

    SalaryBreakdown {
        basic_salary,
        hra,
        da,
        ta,
        bonus,
        overtime,
        gross_salary: [hra, da, ta, bonus, overtime]
            .into_iter()
            .fold(basic_salary, Decimal::saturating_add),
    }
}
