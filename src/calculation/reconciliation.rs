//! Reconciliation of daily and weekly overtime.
//!
//! The weekly split is taken over all hours worked, so its regular portion
//! already contains hours the daily rule classified as overtime. Those hours
//! are moved out of regular time here so that they are paid as overtime
//! exactly once.
//!
//! With `D` the summed daily overtime, `T` the total hours and
//! `wr + wo == T` the weekly split:
//!
//! - `regular = max(0, wr - D)`
//! - `overtime = T - regular`
//!
//! When `D <= wr` the overtime is `T - wr + D = wo + D`: daily overtime plus
//! weekly overtime. When `D > wr` (daily overtime alone exceeds the weekly
//! limit) regular time floors at zero and every hour is overtime. Adding
//! `D + wo` in that branch would count `D - wr` hours twice, so overtime is
//! capped at `T`. In both branches `regular + overtime == T`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WeeklyHoursBreakdown;

/// Final regular/overtime split for a period after both rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledHours {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// True when daily overtime alone exceeded the weekly regular hours and
    /// regular time was floored at zero.
    pub regular_floored: bool,
}

/// Reconciles the summed daily overtime with the weekly split.
///
/// Inputs are assumed non-negative, as produced by the two split rules.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{reconcile_overtime, split_weekly_overtime};
/// use rust_decimal::Decimal;
///
/// // Five 10 hour days: 10 hours of daily overtime, 50 hours total.
/// let weekly = split_weekly_overtime(Decimal::from(50), Decimal::from(44)).unwrap();
/// let hours = reconcile_overtime(Decimal::from(10), &weekly);
///
/// assert_eq!(hours.regular_hours, Decimal::from(34));
/// assert_eq!(hours.overtime_hours, Decimal::from(16));
/// ```
pub fn reconcile_overtime(
    total_daily_overtime: Decimal,
    weekly: &WeeklyHoursBreakdown,
) -> ReconciledHours {
    let regular_floored = total_daily_overtime > weekly.regular_hours;
    let regular_hours = (weekly.regular_hours - total_daily_overtime).max(Decimal::ZERO);
    let overtime_hours = if regular_floored {
        weekly.total_hours
    } else {
        total_daily_overtime + weekly.overtime_hours
    };

    ReconciledHours {
        regular_hours,
        overtime_hours,
        regular_floored,
    }
}
