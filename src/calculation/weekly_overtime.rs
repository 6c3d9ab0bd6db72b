//! Weekly overtime rule.
//!
//! Same shape as the daily rule, applied to the aggregated hours for the
//! whole period rather than to a single day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default weekly regular-hours limit (44 hours).
pub const DEFAULT_WEEKLY_REGULAR_LIMIT: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// How a period's total hours are split against the weekly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursBreakdown {
    /// Total hours for the period.
    pub total_hours: Decimal,
    /// Hours up to the weekly limit.
    pub regular_hours: Decimal,
    /// Hours beyond the weekly limit.
    pub overtime_hours: Decimal,
}

/// Splits total period hours into weekly regular and weekly overtime.
///
/// # Errors
///
/// - [`EngineError::InvalidConfiguration`] if `weekly_limit` is not positive
/// - [`EngineError::InvalidInput`] if `total_hours` is negative
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{split_weekly_overtime, DEFAULT_WEEKLY_REGULAR_LIMIT};
/// use rust_decimal::Decimal;
///
/// let split = split_weekly_overtime(Decimal::from(50), DEFAULT_WEEKLY_REGULAR_LIMIT).unwrap();
/// assert_eq!(split.regular_hours, Decimal::from(44));
/// assert_eq!(split.overtime_hours, Decimal::from(6));
/// ```
pub fn split_weekly_overtime(
    total_hours: Decimal,
    weekly_limit: Decimal,
) -> EngineResult<WeeklyHoursBreakdown> {
    if weekly_limit <= Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            parameter: "weekly_limit".to_string(),
            message: format!("weekly_limit must be greater than 0 (got {weekly_limit})"),
        });
    }
    if total_hours < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "total_hours".to_string(),
            message: format!("total_hours must be 0 or greater (got {total_hours})"),
        });
    }

    Ok(WeeklyHoursBreakdown {
        total_hours,
        regular_hours: total_hours.min(weekly_limit),
        overtime_hours: (total_hours - weekly_limit).max(Decimal::ZERO),
    })
}
