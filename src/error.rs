//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading, validating and
//! pricing a timesheet.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::TimesheetNotFound {
///     path: "/missing/timesheet.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Timesheet file not found: /missing/timesheet.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An employee record was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time entry was invalid.
    #[error("Invalid time entry for {work_date}: {message}")]
    InvalidTimeEntry {
        /// The work date of the offending entry.
        work_date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A value passed directly to an overtime rule was invalid.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the rejected argument.
        field: String,
        /// A description of the violated precondition.
        message: String,
    },

    /// A rule threshold or multiplier was out of range.
    #[error("Invalid configuration '{parameter}': {message}")]
    InvalidConfiguration {
        /// The name of the rejected parameter.
        parameter: String,
        /// A description of the violated precondition.
        message: String,
    },

    /// The hourly rate given to the pay calculation was not positive.
    #[error("Invalid hourly rate {rate}: hourly_rate must be greater than 0")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// Hours given to the pay calculation were negative.
    #[error(
        "Invalid hours (regular {regular_hours}, overtime {overtime_hours}): hours must be 0 or greater"
    )]
    InvalidHours {
        /// The regular hours supplied.
        regular_hours: Decimal,
        /// The overtime hours supplied.
        overtime_hours: Decimal,
    },

    /// The overtime multiplier was below 1.
    #[error("Invalid overtime multiplier {multiplier}: overtime_multiplier must be at least 1.0")]
    InvalidMultiplier {
        /// The rejected multiplier.
        multiplier: Decimal,
    },

    /// An intermediate amount fell outside the range a decimal can hold.
    #[error("Calculation overflow: {quantity} exceeds the supported decimal range")]
    CalculationOverflow {
        /// The quantity being computed when the overflow occurred.
        quantity: String,
    },

    /// Rules configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rules configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Timesheet file was not found at the specified path.
    #[error("Timesheet file not found: {path}")]
    TimesheetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Timesheet record was structurally invalid and could not be parsed.
    #[error("Failed to parse timesheet '{source_name}': {message}")]
    TimesheetParseError {
        /// Where the record came from (file path, or "<inline>").
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// A result could not be serialized for output.
    #[error("Failed to serialize output: {message}")]
    SerializationError {
        /// A description of the serialization error.
        message: String,
    },
}

impl EngineError {
    /// Returns a stable, machine-readable code for this error.
    ///
    /// ```
    /// use payroll_engine::error::EngineError;
    /// use rust_decimal::Decimal;
    ///
    /// let error = EngineError::InvalidRate { rate: Decimal::ZERO };
    /// assert_eq!(error.code(), "INVALID_RATE");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
            EngineError::InvalidTimeEntry { .. } => "INVALID_TIME_ENTRY",
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
            EngineError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            EngineError::InvalidRate { .. } => "INVALID_RATE",
            EngineError::InvalidHours { .. } => "INVALID_HOURS",
            EngineError::InvalidMultiplier { .. } => "INVALID_MULTIPLIER",
            EngineError::CalculationOverflow { .. } => "CALCULATION_OVERFLOW",
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::TimesheetNotFound { .. } => "TIMESHEET_NOT_FOUND",
            EngineError::TimesheetParseError { .. } => "TIMESHEET_PARSE_ERROR",
            EngineError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Returns true if the error was caused by caller-supplied payroll data
    /// rather than by configuration or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidEmployee { .. }
                | EngineError::InvalidTimeEntry { .. }
                | EngineError::InvalidInput { .. }
                | EngineError::InvalidRate { .. }
                | EngineError::InvalidHours { .. }
                | EngineError::InvalidMultiplier { .. }
                | EngineError::CalculationOverflow { .. }
        )
    }

    /// Creates a [`EngineError::CalculationOverflow`] for `quantity`.
    pub fn overflow(quantity: impl Into<String>) -> Self {
        EngineError::CalculationOverflow {
            quantity: quantity.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
