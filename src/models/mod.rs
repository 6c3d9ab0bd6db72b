//! Core data models for the Payroll Engine.
//!
//! This module contains the domain values passed into and out of a payroll run.

mod audit;
mod employee;
mod payroll_result;
mod time_entry;
mod timesheet;

pub use audit::{AuditStep, AuditTrace};
pub use employee::Employee;
pub use payroll_result::PayrollResult;
pub use time_entry::TimeEntry;
pub use timesheet::Timesheet;
