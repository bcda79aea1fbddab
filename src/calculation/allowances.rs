//! Percentage allowance calculation.
//!
//! House rent (HRA), dearness (DA) and travel (TA) allowances are each a
//! percentage of the designation's basic salary. All three follow the same
//! rule, so they share one implementation keyed by [`AllowanceKind`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Designation, Employee};

/// The percentage-based allowances a designation defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceKind {
    /// House rent allowance.
    Hra,
    /// Dearness allowance.
    Da,
    /// Travel allowance.
    Ta,
}

impl AllowanceKind {
    /// All allowance kinds, in report order.
    pub const ALL: [AllowanceKind; 3] = [AllowanceKind::Hra, AllowanceKind::Da, AllowanceKind::Ta];

    /// Returns the designation's percentage for this allowance.
    pub fn percent(self, designation: &Designation) -> Option<Decimal> {
        match self {
            AllowanceKind::Hra => designation.hra_percent,
            AllowanceKind::Da => designation.da_percent,
            AllowanceKind::Ta => designation.ta_percent,
        }
    }
}

/// Calculates one percentage allowance for an employee.
///
/// The allowance is `percent / 100 * basic_salary`. It is zero when the
/// employee has no designation, or when either the percentage or the basic
/// salary is absent or zero. The product saturates at the `Decimal` range,
/// so this never fails.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::{AllowanceKind, calculate_allowance};
/// use salary_report::models::{Designation, Employee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: 1,
///     name: None,
///     contact: None,
///     overtime_hours: 0,
///     designation: Some(Designation {
///         id: 1,
///         name: Some("Manager".to_string()),
///         basic_salary: Some(Decimal::from_str("1000.00").unwrap()),
///         hra_percent: Some(Decimal::from(10)),
///         da_percent: None,
///         ta_percent: None,
///         bonus: None,
///     }),
/// };
///
/// let hra = calculate_allowance(&employee, AllowanceKind::Hra);
/// assert_eq!(hra, Decimal::from(100));
/// assert_eq!(calculate_allowance(&employee, AllowanceKind::Da), Decimal::ZERO);
/// ```
pub fn calculate_allowance(employee: &Employee, kind: AllowanceKind) -> Decimal {
    let Some(designation) = employee.designation.as_ref() else {
        return Decimal::ZERO;
    };

    match (kind.percent(designation), designation.basic_salary) {
        (Some(percent), Some(basic)) if !percent.is_zero() && !basic.is_zero() => {
            (percent / Decimal::ONE_HUNDRED).saturating_mul(basic)
        }
        _ => Decimal::ZERO,
    }
}

/// Calculates the house rent allowance.
pub fn calculate_hra(employee: &Employee) -> Decimal {
    calculate_allowance(employee, AllowanceKind::Hra)
}

/// Calculates the dearness allowance.
pub fn calculate_da(employee: &Employee) -> Decimal {
    calculate_allowance(employee, AllowanceKind::Da)
}

/// Calculates the travel allowance.
pub fn calculate_ta(employee: &Employee) -> Decimal {
    calculate_allowance(employee, AllowanceKind::Ta)
}
