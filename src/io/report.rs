//! Plain-text rendering of payroll results.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PayrollResult;

/// Renders a [`PayrollResult`] as a fixed text block.
///
/// Hours and amounts are shown to two decimal places, rounding half away
/// from zero. The result itself is never rounded.
///
/// # Example
///
/// ```
/// use payroll_engine::io::PayrollReport;
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
/// let text = PayrollReport::new(&result).to_string();
/// assert!(text.contains("Gross pay:    $220.00"));
/// ```
pub struct PayrollReport<'a> {
    result: &'a PayrollResult,
}

impl<'a> PayrollReport<'a> {
    /// Wraps a result for display.
    pub fn new(result: &'a PayrollResult) -> Self {
        Self { result }
    }
}

fn two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

impl fmt::Display for PayrollReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Payroll Result")?;
        writeln!(f, "--------------")?;
        writeln!(f, "Employee:     {}", result.employee_id)?;
        writeln!(f, "Hourly rate:  ${}", two_places(result.hourly_rate))?;
        writeln!(f, "Regular hrs:  {}", two_places(result.regular_hours))?;
        writeln!(f, "OT hrs:       {}", two_places(result.overtime_hours))?;
        write!(f, "Gross pay:    ${}", two_places(result.gross_pay))
    }
}
