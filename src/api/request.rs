//! Request types for the salary report API.
//!
//! This module defines the form submitted to `POST /form/` and the query
//! string accepted by `GET /`.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::NewEmployee;

/// The employee intake form, as submitted by the browser.
///
/// Every field arrives as optional text; interpretation happens in the
/// accessor methods so that bad values can be coerced instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    /// Id of the designation to link.
    #[serde(default)]
    pub designation: Option<String>,
    /// Employee name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact details.
    #[serde(default)]
    pub contact: Option<String>,
    /// Overtime hours; only plain digits are honoured.
    #[serde(default)]
    pub overtime_hours: Option<String>,
}

impl IntakeForm {
    /// Resolves the designation reference to an id.
    ///
    /// An absent or empty reference is `MissingDesignation`; anything that
    /// is not an integer cannot name a designation and is
    /// `UnknownDesignation`.
    pub fn designation_id(&self) -> PayrollResult<i64> {
        let reference = self.designation.as_deref().unwrap_or_default();
        if reference.is_empty() {
            return Err(PayrollError::MissingDesignation);
        }

        reference
            .trim()
            .parse::<i64>()
            .map_err(|_| PayrollError::UnknownDesignation {
                reference: reference.to_string(),
            })
    }

    /// Returns the overtime hours, coercing anything unusable to zero.
    pub fn overtime_hours(&self) -> u32 {
        parse_overtime_hours(self.overtime_hours.as_deref())
    }

    /// Builds the employee to persist under the given designation.
    pub fn into_new_employee(self, designation_id: i64) -> NewEmployee {
        let overtime_hours = self.overtime_hours();
        NewEmployee {
            name: self.name,
            contact: self.contact,
            overtime_hours,
            designation_id,
        }
    }
}

/// Parses overtime hours from form text.
///
/// Only a non-empty run of ASCII digits that fits in a `u32` is accepted.
/// Signs, whitespace, decimals, words and overflowing values all become
/// zero; this never fails.
///
/// # Examples
///
/// ```
/// use salary_report::api::parse_overtime_hours;
///
/// assert_eq!(parse_overtime_hours(Some("12")), 12);
/// assert_eq!(parse_overtime_hours(Some("abc")), 0);
/// assert_eq!(parse_overtime_hours(None), 0);
/// ```
pub fn parse_overtime_hours(value: Option<&str>) -> u32 {
    match value {
        Some(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            text.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Query string for `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Designation id to filter employees by.
    #[serde(default)]
    pub designation: Option<String>,
}

/// How the report narrows its employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignationFilter {
    /// No filter was given.
    All,
    /// Only employees linked to this designation id.
    Only(i64),
    /// A filter was given that no designation id can equal.
    NoMatch,
}

impl ReportQuery {
    /// Interprets the raw filter value.
    pub fn filter(&self) -> DesignationFilter {
        match self.designation.as_deref() {
            None | Some("") => DesignationFilter::All,
            Some(raw) => raw
                .trim()
                .parse()
                .map(DesignationFilter::Only)
                .unwrap_or(DesignationFilter::NoMatch),
        }
    }

    /// The filter value to echo back in the report, if one was applied.
    pub fn applied_filter(&self) -> Option<String> {
        self.designation.clone().filter(|raw| !raw.is_empty())
    }
}
