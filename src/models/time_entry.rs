//! Time entry model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours recorded against a single calendar day.
///
/// The engine does not require entries to be unique per date or sorted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(), Decimal::from(8));
/// assert_eq!(entry.hours, Decimal::from(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The calendar date the hours were worked.
    pub work_date: NaiveDate,
    /// Hours worked on that date. Must be zero or greater.
    pub hours: Decimal,
}

impl TimeEntry {
    /// Creates a new time entry.
    pub fn new(work_date: NaiveDate, hours: Decimal) -> Self {
        Self { work_date, hours }
    }
}
