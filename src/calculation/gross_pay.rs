//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates gross pay from regular and overtime hours.
///
/// `gross = regular_hours * hourly_rate + overtime_hours * hourly_rate * overtime_multiplier`
///
/// No rounding is performed; display formatting is left to the caller.
///
/// # Errors
///
/// Checked in this order:
/// - [`EngineError::InvalidRate`] if `hourly_rate` is not positive
/// - [`EngineError::InvalidHours`] if either hours value is negative
/// - [`EngineError::InvalidMultiplier`] if `overtime_multiplier` is below 1
/// - [`EngineError::CalculationOverflow`] if any product or the total exceeds
///   the decimal range
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_gross_pay, DEFAULT_OVERTIME_MULTIPLIER};
/// use rust_decimal::Decimal;
///
/// // 8 regular at $20 = 160, 2 overtime at $20 * 1.5 = 60
/// let gross = calculate_gross_pay(
///     Decimal::from(8),
///     Decimal::from(2),
///     Decimal::from(20),
///     DEFAULT_OVERTIME_MULTIPLIER,
/// )
/// .unwrap();
/// assert_eq!(gross, Decimal::from(220));
/// ```
pub fn calculate_gross_pay(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    overtime_multiplier: Decimal,
) -> EngineResult<Decimal> {
    if hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidRate { rate: hourly_rate });
    }
    if regular_hours < Decimal::ZERO || overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidHours {
            regular_hours,
            overtime_hours,
        });
    }
    if overtime_multiplier < Decimal::ONE {
        return Err(EngineError::InvalidMultiplier {
            multiplier: overtime_multiplier,
        });
    }

    let regular_pay = regular_hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| EngineError::overflow("regular pay"))?;
    let overtime_pay = overtime_hours
        .checked_mul(hourly_rate)
        .and_then(|pay| pay.checked_mul(overtime_multiplier))
        .ok_or_else(|| EngineError::overflow("overtime pay"))?;
    regular_pay
        .checked_add(overtime_pay)
        .ok_or_else(|| EngineError::overflow("gross pay"))
}
