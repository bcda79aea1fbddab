//! Designation model and related types.
//!
//! A designation is a job-grade salary template: a basic salary, three
//! percentage allowances and a flat bonus. Employees reference exactly one
//! designation and derive their pay from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Maximum length of a designation name, in characters.
pub const DESIGNATION_NAME_MAX_LEN: usize = 100;

/// Digit limits for a stored decimal column.
///
/// A value fits when it is non-negative, has at most `decimal_places`
/// fractional digits (ignoring trailing zeros) and at most
/// `max_digits - decimal_places` integer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalBounds {
    /// Total significant digits allowed.
    pub max_digits: u32,
    /// Fractional digits allowed.
    pub decimal_places: u32,
}

/// Bounds for salary and bonus amounts.
pub const AMOUNT_BOUNDS: DecimalBounds = DecimalBounds {
    max_digits: 10,
    decimal_places: 2,
};

/// Bounds for allowance percentages.
pub const PERCENT_BOUNDS: DecimalBounds = DecimalBounds {
    max_digits: 5,
    decimal_places: 2,
};

impl DecimalBounds {
    /// Exclusive upper limit on the value.
    pub fn limit(&self) -> Decimal {
        Decimal::from(10u64.pow(self.max_digits - self.decimal_places))
    }

    /// Returns a description of the violation when `value` does not fit.
    pub fn check(&self, value: Decimal) -> Result<(), String> {
        if value < Decimal::ZERO {
            return Err("must not be negative".to_string());
        }

        let normalized = value.normalize();
        if normalized.scale() > self.decimal_places {
            return Err(format!(
                "must have at most {} decimal places",
                self.decimal_places
            ));
        }
        if normalized >= self.limit() {
            return Err(format!("must be less than {}", self.limit()));
        }

        Ok(())
    }
}

/// A stored designation.
///
/// Every monetary and percentage field is optional. Absent values are
/// treated as zero by the salary calculator rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    /// System-assigned identifier.
    pub id: i64,
    /// Display label (e.g., "Manager").
    pub name: Option<String>,
    /// Monthly basic salary.
    pub basic_salary: Option<Decimal>,
    /// House rent allowance, as a percentage of basic salary.
    pub hra_percent: Option<Decimal>,
    /// Dearness allowance, as a percentage of basic salary.
    pub da_percent: Option<Decimal>,
    /// Travel allowance, as a percentage of basic salary.
    pub ta_percent: Option<Decimal>,
    /// Flat bonus amount.
    pub bonus: Option<Decimal>,
}

/// The fields needed to create a designation.
///
/// Percentages and bonus default to zero when omitted, but an explicit
/// `null` is kept as absent.
///
/// # Example
///
/// ```
/// use salary_report::models::NewDesignation;
/// use rust_decimal::Decimal;
///
/// let new: NewDesignation = serde_json::from_str(r#"{
///     "name": "Clerk",
///     "basic_salary": "500.00"
/// }"#).unwrap();
///
/// assert_eq!(new.hra_percent, Some(Decimal::ZERO));
/// assert_eq!(new.bonus, Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDesignation {
    /// Display label.
    #[serde(default)]
    pub name: Option<String>,
    /// Monthly basic salary.
    #[serde(default)]
    pub basic_salary: Option<Decimal>,
    /// House rent allowance percentage.
    #[serde(default = "default_zero")]
    pub hra_percent: Option<Decimal>,
    /// Dearness allowance percentage.
    #[serde(default = "default_zero")]
    pub da_percent: Option<Decimal>,
    /// Travel allowance percentage.
    #[serde(default = "default_zero")]
    pub ta_percent: Option<Decimal>,
    /// Flat bonus amount.
    #[serde(default = "default_zero")]
    pub bonus: Option<Decimal>,
}

fn default_zero() -> Option<Decimal> {
    Some(Decimal::ZERO)
}

impl NewDesignation {
    /// Checks the name length and that every amount and percentage is
    /// non-negative and within its [`DecimalBounds`].
    pub fn validate(&self) -> PayrollResult<()> {
        if let Some(name) = &self.name {
            if name.chars().count() > DESIGNATION_NAME_MAX_LEN {
                return Err(PayrollError::InvalidDesignation {
                    field: "name".to_string(),
                    message: format!(
                        "must be at most {} characters",
                        DESIGNATION_NAME_MAX_LEN
                    ),
                });
            }
        }

        let amounts = [
            ("basic_salary", self.basic_salary, AMOUNT_BOUNDS),
            ("hra_percent", self.hra_percent, PERCENT_BOUNDS),
            ("da_percent", self.da_percent, PERCENT_BOUNDS),
            ("ta_percent", self.ta_percent, PERCENT_BOUNDS),
            ("bonus", self.bonus, AMOUNT_BOUNDS),
        ];

        for (field, value, bounds) in amounts {
            if let Some(value) = value {
                bounds
                    .check(value)
                    .map_err(|message| PayrollError::InvalidDesignation {
                        field: field.to_string(),
                        message,
                    })?;
            }
        }

        Ok(())
    }

    /// Builds the stored form of this designation under the given id.
    pub fn into_designation(self, id: i64) -> Designation {
        Designation {
            id,
            name: self.name,
            basic_salary: self.basic_salary,
            hra_percent: self.hra_percent,
            da_percent: self.da_percent,
            ta_percent: self.ta_percent,
            bonus: self.bonus,
        }
    }
}
