//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the engine over HTTP: `POST /payroll` accepts a
//! timesheet record and returns the priced result with its audit trace.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, PayrollResponse};
pub use state::AppState;
