//! Input validation for payroll runs.
//!
//! Validation rejects structurally invalid employee or time-entry data before
//! any overtime rule runs. All checks are fail-fast: the first violation is
//! returned and nothing after it is inspected.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, TimeEntry, Timesheet};

/// Validates an employee record.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] if the identifier is empty or
/// whitespace-only, or if the hourly rate is not greater than zero.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::validation::validate_employee;
/// use rust_decimal::Decimal;
///
/// assert!(validate_employee(&Employee::new("E001", Decimal::from(20))).is_ok());
/// assert!(validate_employee(&Employee::new("   ", Decimal::from(20))).is_err());
/// assert!(validate_employee(&Employee::new("E001", Decimal::ZERO)).is_err());
/// ```
pub fn validate_employee(employee: &Employee) -> EngineResult<()> {
    if employee.employee_id.trim().is_empty() {
        return Err(EngineError::InvalidEmployee {
            field: "employee_id".to_string(),
            message: "employee_id must not be empty".to_string(),
        });
    }

    if employee.hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: format!(
                "hourly_rate must be greater than 0 (got {})",
                employee.hourly_rate
            ),
        });
    }

    Ok(())
}

/// Validates a single time entry.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeEntry`] if the hours are negative.
pub fn validate_time_entry(entry: &TimeEntry) -> EngineResult<()> {
    if entry.hours < Decimal::ZERO {
        return Err(EngineError::InvalidTimeEntry {
            work_date: entry.work_date,
            message: format!("hours must be 0 or greater (got {})", entry.hours),
        });
    }

    Ok(())
}

/// Validates the employee and then every entry, in sequence order.
pub fn validate_timesheet(timesheet: &Timesheet) -> EngineResult<()> {
    validate_employee(&timesheet.employee)?;

    for entry in &timesheet.entries {
        validate_time_entry(entry)?;
    }

    Ok(())
}
