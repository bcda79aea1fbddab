//! Employee model and related types.
//!
//! This module defines the Employee struct as read back from the store
//! (with its designation joined in) and the NewEmployee struct used by
//! intake.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::Designation;

/// Maximum length of an employee name or contact, in characters.
pub const EMPLOYEE_FIELD_MAX_LEN: usize = 100;

/// Represents a recorded employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// System-assigned identifier.
    pub id: i64,
    /// Display label.
    pub name: Option<String>,
    /// Free-text contact details.
    pub contact: Option<String>,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: u32,
    /// The linked designation, if any.
    pub designation: Option<Designation>,
}

impl Employee {
    /// Returns the id of the linked designation, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_report::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: Some("Asha".to_string()),
    ///     contact: None,
    ///     overtime_hours: 0,
    ///     designation: None,
    /// };
    /// assert_eq!(employee.designation_id(), None);
    /// ```
    pub fn designation_id(&self) -> Option<i64> {
        self.designation.as_ref().map(|d| d.id)
    }
}

/// The fields persisted when an employee is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display label.
    pub name: Option<String>,
    /// Free-text contact details.
    pub contact: Option<String>,
    /// Overtime hours worked.
    pub overtime_hours: u32,
    /// The designation the employee is linked to.
    pub designation_id: i64,
}

impl NewEmployee {
    /// Checks that name and contact fit their columns.
    pub fn validate(&self) -> PayrollResult<()> {
        for (field, value) in [("name", &self.name), ("contact", &self.contact)] {
            if value
                .as_ref()
                .is_some_and(|v| v.chars().count() > EMPLOYEE_FIELD_MAX_LEN)
            {
                return Err(PayrollError::InvalidEmployee {
                    field: field.to_string(),
                    message: format!("must be at most {} characters", EMPLOYEE_FIELD_MAX_LEN),
                });
            }
        }
        Ok(())
    }
}
