//! Input and output around the payroll engine.
//!
//! The engine itself only consumes and produces in-memory values. This module
//! loads timesheet records from JSON and renders results for display.

mod loader;
mod report;

pub use loader::{load_timesheet_from_json, parse_timesheet};
pub use report::PayrollReport;
