//! Configuration types for overtime rules.
//!
//! This module contains the strongly-typed rules structure that is
//! deserialized from a YAML rules file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_DAILY_REGULAR_LIMIT, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_REGULAR_LIMIT,
};
use crate::error::{EngineError, EngineResult};

/// Thresholds and multiplier applied by the payroll engine.
///
/// Any key omitted from a rules file takes its default value.
///
/// # Example
///
/// ```
/// use payroll_engine::config::OvertimeRules;
/// use rust_decimal::Decimal;
///
/// let rules = OvertimeRules::default();
/// assert_eq!(rules.daily_regular_limit, Decimal::from(8));
/// assert_eq!(rules.weekly_regular_limit, Decimal::from(44));
/// assert_eq!(rules.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OvertimeRules {
    /// Hours per day paid at the regular rate before daily overtime applies.
    pub daily_regular_limit: Decimal,
    /// Hours per period paid at the regular rate before weekly overtime applies.
    pub weekly_regular_limit: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for OvertimeRules {
    fn default() -> Self {
        Self {
            daily_regular_limit: DEFAULT_DAILY_REGULAR_LIMIT,
            weekly_regular_limit: DEFAULT_WEEKLY_REGULAR_LIMIT,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl OvertimeRules {
    /// Checks that both limits are positive and the multiplier is at least 1.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_regular_limit <= Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                parameter: "daily_regular_limit".to_string(),
                message: format!(
                    "daily_regular_limit must be greater than 0 (got {})",
                    self.daily_regular_limit
                ),
            });
        }
        if self.weekly_regular_limit <= Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                parameter: "weekly_regular_limit".to_string(),
                message: format!(
                    "weekly_regular_limit must be greater than 0 (got {})",
                    self.weekly_regular_limit
                ),
            });
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidConfiguration {
                parameter: "overtime_multiplier".to_string(),
                message: format!(
                    "overtime_multiplier must be at least 1.0 (got {})",
                    self.overtime_multiplier
                ),
            });
        }
        Ok(())
    }
}
