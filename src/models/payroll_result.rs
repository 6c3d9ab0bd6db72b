//! Payroll result model.
//!
//! [`PayrollResult`] is the single output of a payroll run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The outcome of pricing one timesheet.
///
/// Hours are the reconciled totals: `regular_hours + overtime_hours` equals the
/// sum of the raw hours on the timesheet. No rounding is applied to any field.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     employee_id: "E001".to_string(),
///     hourly_rate: Decimal::from(20),
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
///     gross_pay: Decimal::from(220),
/// };
/// assert_eq!(result.total_hours()?, Decimal::from(10));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Identifier of the employee that was paid.
    pub employee_id: String,
    /// The hourly rate used for pricing.
    pub hourly_rate: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total pre-deduction pay for the period.
    pub gross_pay: Decimal,
}

impl PayrollResult {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> EngineResult<Decimal> {
        self.regular_hours
            .checked_add(self.overtime_hours)
            .ok_or_else(|| EngineError::overflow("result total hours"))
    }
}
