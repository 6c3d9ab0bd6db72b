//! Timesheet loading.
//!
//! Timesheet records are JSON documents of the form:
//!
//! ```text
//! {
//!   "employee": {"employee_id": "E001", "hourly_rate": 20.0},
//!   "entries": [{"work_date": "2026-01-10", "hours": 8.0}]
//! }
//! ```
//!
//! Rates and hours may be JSON numbers or decimal strings. Loading only checks
//! structure; value checks such as negative hours belong to
//! [`crate::validation`] and are reported separately.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Timesheet;

/// Loads a timesheet from a JSON file.
///
/// # Errors
///
/// - [`EngineError::TimesheetNotFound`] if the file does not exist
/// - [`EngineError::TimesheetParseError`] if the file cannot be read as UTF-8
///   text, or the content is not a timesheet record
///
/// # Example
///
/// ```no_run
/// use payroll_engine::io::load_timesheet_from_json;
///
/// let timesheet = load_timesheet_from_json("data/sample_timesheet.json")?;
/// println!("{} entries", timesheet.entries.len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_timesheet_from_json<P: AsRef<Path>>(path: P) -> EngineResult<Timesheet> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EngineError::TimesheetNotFound {
            path: path_str.clone(),
        },
        _ => EngineError::TimesheetParseError {
            source_name: path_str.clone(),
            message: format!("cannot read file: {e}"),
        },
    })?;

    let timesheet = parse(&content, &path_str)?;
    debug!(
        path = %path_str,
        employee_id = %timesheet.employee.employee_id,
        entries = timesheet.entries.len(),
        "Loaded timesheet"
    );
    Ok(timesheet)
}

/// Parses a timesheet record from a JSON string.
///
/// ```
/// use payroll_engine::io::parse_timesheet;
///
/// let timesheet = parse_timesheet(
///     r#"{"employee": {"employee_id": "E001", "hourly_rate": 20},
///         "entries": [{"work_date": "2026-01-10", "hours": 8}]}"#,
/// )
/// .unwrap();
/// assert_eq!(timesheet.employee.employee_id, "E001");
/// ```
pub fn parse_timesheet(json: &str) -> EngineResult<Timesheet> {
    parse(json, "<inline>")
}

fn parse(json: &str, source_name: &str) -> EngineResult<Timesheet> {
    serde_json::from_str(json).map_err(|e| EngineError::TimesheetParseError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
