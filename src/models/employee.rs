//! Employee model.
//!
//! This module defines the [`Employee`] struct representing the worker whose
//! timesheet is being priced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee paid by the hour.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("E001", Decimal::new(2000, 2));
/// assert_eq!(employee.employee_id, "E001");
/// assert_eq!(employee.hourly_rate, Decimal::from(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee. Must not be blank.
    pub employee_id: String,
    /// The base hourly rate. Must be greater than zero.
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Creates a new employee. No validation is performed here; see
    /// [`crate::validation::validate_employee`].
    pub fn new(employee_id: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            employee_id: employee_id.into(),
            hourly_rate,
        }
    }
}
