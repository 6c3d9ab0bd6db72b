//! Calculation logic for the Payroll Engine.
//!
//! This module contains the daily and weekly overtime rules, the
//! reconciliation of the two, gross pay pricing, and the engine that runs a
//! timesheet through all of them.

mod daily_overtime;
mod engine;
mod gross_pay;
mod reconciliation;
mod weekly_overtime;

pub use daily_overtime::{DEFAULT_DAILY_REGULAR_LIMIT, DailyHoursBreakdown, split_daily_overtime};
pub use engine::{PayrollCalculation, PayrollEngine, run_payroll};
pub use gross_pay::{DEFAULT_OVERTIME_MULTIPLIER, calculate_gross_pay};
pub use reconciliation::{ReconciledHours, reconcile_overtime};
pub use weekly_overtime::{
    DEFAULT_WEEKLY_REGULAR_LIMIT, WeeklyHoursBreakdown, split_weekly_overtime,
};
