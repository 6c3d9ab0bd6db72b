//! Timesheet model.
//!
//! A [`Timesheet`] is the complete input to one payroll run: one employee and
//! the hours they recorded over the period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Employee, TimeEntry};

/// One employee's recorded hours for a pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, TimeEntry, Timesheet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let timesheet = Timesheet::new(
///     Employee::new("E001", Decimal::from(20)),
///     vec![
///         TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(), Decimal::from(8)),
///         TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(), Decimal::from(10)),
///     ],
/// );
/// assert_eq!(timesheet.total_hours()?, Decimal::from(18));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// The employee being paid.
    pub employee: Employee,
    /// Time entries in the order they were recorded.
    pub entries: Vec<TimeEntry>,
}

impl Timesheet {
    /// Creates a new timesheet.
    pub fn new(employee: Employee, entries: Vec<TimeEntry>) -> Self {
        Self { employee, entries }
    }

    /// Sum of the raw hours across all entries.
    ///
    /// Returns [`EngineError::CalculationOverflow`] if the sum exceeds the
    /// decimal range.
    pub fn total_hours(&self) -> EngineResult<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |total, entry| total.checked_add(entry.hours))
            .ok_or_else(|| EngineError::overflow("timesheet total hours"))
    }
}
