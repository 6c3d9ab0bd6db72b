//! Payroll engine.
//!
//! Runs a timesheet through the full pipeline:
//! validate, split each day, split the week, reconcile, price.
//! Each stage depends on the previous one succeeding; the first error aborts
//! the run and no partial result is produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::OvertimeRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, PayrollResult, Timesheet};
use crate::validation::validate_timesheet;

use super::{
    DailyHoursBreakdown, calculate_gross_pay, reconcile_overtime, split_daily_overtime,
    split_weekly_overtime,
};

/// A payroll result together with the audit trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The priced result.
    pub result: PayrollResult,
    /// Every decision taken while producing the result.
    pub audit_trace: AuditTrace,
}

/// Applies a fixed set of [`OvertimeRules`] to timesheets.
///
/// The engine holds no mutable state, so one instance can price any number
/// of timesheets, from any number of threads.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollEngine;
/// use payroll_engine::config::OvertimeRules;
/// use payroll_engine::models::{Employee, TimeEntry, Timesheet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let timesheet = Timesheet::new(
///     Employee::new("E001", Decimal::from(20)),
///     vec![TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(), Decimal::from(10))],
/// );
///
/// let result = PayrollEngine::new(OvertimeRules::default()).run(&timesheet).unwrap();
/// assert_eq!(result.regular_hours, Decimal::from(8));
/// assert_eq!(result.overtime_hours, Decimal::from(2));
/// assert_eq!(result.gross_pay, Decimal::from(220));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayrollEngine {
    rules: OvertimeRules,
}

impl PayrollEngine {
    /// Creates an engine applying `rules`.
    ///
    /// Rules are not checked here; an out-of-range threshold is reported as
    /// [`crate::error::EngineError::InvalidConfiguration`] by the run that
    /// first uses it.
    pub fn new(rules: OvertimeRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this engine applies.
    pub fn rules(&self) -> &OvertimeRules {
        &self.rules
    }

    /// Prices a timesheet.
    pub fn run(&self, timesheet: &Timesheet) -> EngineResult<PayrollResult> {
        self.run_with_audit(timesheet)
            .map(|calculation| calculation.result)
    }

    /// Prices a timesheet and returns the audit trace alongside the result.
    pub fn run_with_audit(&self, timesheet: &Timesheet) -> EngineResult<PayrollCalculation> {
        let employee = &timesheet.employee;
        let mut trace = AuditTrace::default();

        if let Err(err) = validate_timesheet(timesheet) {
            warn!(employee_id = %employee.employee_id, error = %err, "Timesheet rejected");
            return Err(err);
        }
        trace.record(
            "validation",
            "Timesheet Validation",
            json!({
                "employee_id": employee.employee_id,
                "hourly_rate": employee.hourly_rate.normalize().to_string(),
                "entries": timesheet.entries.len(),
            }),
            json!({ "valid": true }),
            format!(
                "employee and {} time entries passed validation",
                timesheet.entries.len()
            ),
        );

        let mut total_regular = Decimal::ZERO;
        let mut total_daily_overtime = Decimal::ZERO;
        for entry in &timesheet.entries {
            let day = split_daily_overtime(entry.hours, self.rules.daily_regular_limit)?;
            total_regular = total_regular
                .checked_add(day.regular_hours)
                .ok_or_else(|| EngineError::overflow("total regular hours"))?;
            total_daily_overtime = total_daily_overtime
                .checked_add(day.overtime_hours)
                .ok_or_else(|| EngineError::overflow("total daily overtime hours"))?;
            trace.record(
                "daily_overtime_split",
                "Daily Overtime Split",
                json!({
                    "work_date": entry.work_date,
                    "worked_hours": entry.hours.normalize().to_string(),
                    "regular_limit": self.rules.daily_regular_limit.normalize().to_string(),
                }),
                json!({
                    "regular_hours": day.regular_hours.normalize().to_string(),
                    "overtime_hours": day.overtime_hours.normalize().to_string(),
                }),
                daily_reasoning(&day, self.rules.daily_regular_limit),
            );
        }
        debug!(
            employee_id = %employee.employee_id,
            entries = timesheet.entries.len(),
            total_regular = %total_regular,
            total_daily_overtime = %total_daily_overtime,
            "Applied daily overtime rule"
        );

        let total_hours = total_regular
            .checked_add(total_daily_overtime)
            .ok_or_else(|| EngineError::overflow("total hours"))?;
        let weekly = split_weekly_overtime(total_hours, self.rules.weekly_regular_limit)?;
        trace.record(
            "weekly_overtime_split",
            "Weekly Overtime Split",
            json!({
                "total_hours": total_hours.normalize().to_string(),
                "weekly_limit": self.rules.weekly_regular_limit.normalize().to_string(),
            }),
            json!({
                "weekly_regular_hours": weekly.regular_hours.normalize().to_string(),
                "weekly_overtime_hours": weekly.overtime_hours.normalize().to_string(),
            }),
            if weekly.overtime_hours > Decimal::ZERO {
                format!(
                    "{} total hours exceeds {} hour weekly limit by {} hours",
                    total_hours.normalize(),
                    self.rules.weekly_regular_limit.normalize(),
                    weekly.overtime_hours.normalize()
                )
            } else {
                format!(
                    "{} total hours is within {} hour weekly limit",
                    total_hours.normalize(),
                    self.rules.weekly_regular_limit.normalize()
                )
            },
        );

        let hours = reconcile_overtime(total_daily_overtime, &weekly);
        if hours.regular_floored {
            warn!(
                employee_id = %employee.employee_id,
                total_daily_overtime = %total_daily_overtime,
                weekly_limit = %self.rules.weekly_regular_limit,
                "Daily overtime exceeds weekly limit; all hours paid as overtime"
            );
        }
        trace.record(
            "overtime_reconciliation",
            "Overtime Reconciliation",
            json!({
                "total_daily_overtime": total_daily_overtime.normalize().to_string(),
                "weekly_regular_hours": weekly.regular_hours.normalize().to_string(),
                "weekly_overtime_hours": weekly.overtime_hours.normalize().to_string(),
            }),
            json!({
                "regular_hours": hours.regular_hours.normalize().to_string(),
                "overtime_hours": hours.overtime_hours.normalize().to_string(),
            }),
            if hours.regular_floored {
                format!(
                    "{} daily overtime hours exceed {} weekly regular hours, all {} hours are overtime",
                    total_daily_overtime.normalize(),
                    weekly.regular_hours.normalize(),
                    total_hours.normalize()
                )
            } else {
                format!(
                    "{} daily overtime hours moved out of {} weekly regular hours",
                    total_daily_overtime.normalize(),
                    weekly.regular_hours.normalize()
                )
            },
        );

        let gross_pay = calculate_gross_pay(
            hours.regular_hours,
            hours.overtime_hours,
            employee.hourly_rate,
            self.rules.overtime_multiplier,
        )?;
        trace.record(
            "gross_pay",
            "Gross Pay",
            json!({
                "regular_hours": hours.regular_hours.normalize().to_string(),
                "overtime_hours": hours.overtime_hours.normalize().to_string(),
                "hourly_rate": employee.hourly_rate.normalize().to_string(),
                "overtime_multiplier": self.rules.overtime_multiplier.normalize().to_string(),
            }),
            json!({ "gross_pay": gross_pay.normalize().to_string() }),
            format!(
                "{} regular hours at {} plus {} overtime hours at {} x {}",
                hours.regular_hours.normalize(),
                employee.hourly_rate.normalize(),
                hours.overtime_hours.normalize(),
                employee.hourly_rate.normalize(),
                self.rules.overtime_multiplier.normalize()
            ),
        );

        info!(
            employee_id = %employee.employee_id,
            regular_hours = %hours.regular_hours,
            overtime_hours = %hours.overtime_hours,
            gross_pay = %gross_pay,
            "Payroll run completed"
        );

        Ok(PayrollCalculation {
            result: PayrollResult {
                employee_id: employee.employee_id.clone(),
                hourly_rate: employee.hourly_rate,
                regular_hours: hours.regular_hours,
                overtime_hours: hours.overtime_hours,
                gross_pay,
            },
            audit_trace: trace,
        })
    }
}

fn daily_reasoning(day: &DailyHoursBreakdown, limit: Decimal) -> String {
    if day.overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour daily limit by {} hours",
            day.worked_hours.normalize(),
            limit.normalize(),
            day.overtime_hours.normalize()
        )
    } else if day.worked_hours == limit {
        format!(
            "{} hours worked equals {} hour daily limit, no overtime",
            day.worked_hours.normalize(),
            limit.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour daily limit, no overtime",
            day.worked_hours.normalize(),
            limit.normalize()
        )
    }
}

/// Prices a timesheet with the default rules: 8 hours per day, 44 hours per
/// period, overtime at 1.5x.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::run_payroll;
/// use payroll_engine::models::{Employee, TimeEntry, Timesheet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let timesheet = Timesheet::new(
///     Employee::new("E001", Decimal::from(20)),
///     vec![
///         TimeEntry::new(day(10), Decimal::from(8)),
///         TimeEntry::new(day(11), Decimal::from(10)),
///     ],
/// );
///
/// let result = run_payroll(&timesheet).unwrap();
/// assert_eq!(result.regular_hours, Decimal::from(16));
/// assert_eq!(result.overtime_hours, Decimal::from(2));
/// assert_eq!(result.gross_pay, Decimal::from(380));
/// ```
pub fn run_payroll(timesheet: &Timesheet) -> EngineResult<PayrollResult> {
    PayrollEngine::default().run(timesheet)
}
