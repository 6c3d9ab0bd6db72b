//! Daily overtime rule.
//!
//! This module splits one day's worked hours into regular and overtime
//! portions against a per-day threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default daily regular-hours limit (8 hours).
pub const DEFAULT_DAILY_REGULAR_LIMIT: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// How a single day's worked hours are split.
///
/// Invariants: `regular_hours + overtime_hours == worked_hours`,
/// `0 <= regular_hours <= regular_limit` and `overtime_hours >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursBreakdown {
    /// Hours worked on the day.
    pub worked_hours: Decimal,
    /// Hours up to the daily limit.
    pub regular_hours: Decimal,
    /// Hours beyond the daily limit.
    pub overtime_hours: Decimal,
}

/// Splits a day's hours into regular and overtime against `regular_limit`.
///
/// # Errors
///
/// - [`EngineError::InvalidConfiguration`] if `regular_limit` is not positive
/// - [`EngineError::InvalidInput`] if `hours_worked` is negative
///
/// The limit is checked first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_daily_overtime, DEFAULT_DAILY_REGULAR_LIMIT};
/// use rust_decimal::Decimal;
///
/// let result = split_daily_overtime(Decimal::from(10), DEFAULT_DAILY_REGULAR_LIMIT).unwrap();
/// assert_eq!(result.regular_hours, Decimal::from(8));
/// assert_eq!(result.overtime_hours, Decimal::from(2));
///
/// let result = split_daily_overtime(Decimal::from(8), DEFAULT_DAILY_REGULAR_LIMIT).unwrap();
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_daily_overtime(
    hours_worked: Decimal,
    regular_limit: Decimal,
) -> EngineResult<DailyHoursBreakdown> {
    if regular_limit <= Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            parameter: "regular_limit".to_string(),
            message: format!("regular_limit must be greater than 0 (got {regular_limit})"),
        });
    }

    if hours_worked < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "hours_worked".to_string(),
            message: format!("hours_worked must be 0 or greater (got {hours_worked})"),
        });
    }

    let regular_hours = hours_worked.min(regular_limit);
    let overtime_hours = (hours_worked - regular_limit).max(Decimal::ZERO);

    Ok(DailyHoursBreakdown {
        worked_hours: hours_worked,
        regular_hours,
        overtime_hours,
    })
}
