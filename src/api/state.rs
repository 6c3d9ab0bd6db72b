//! Application state for the Payroll Engine API.

use crate::calculation::PayrollEngine;
use crate::config::OvertimeRules;

/// Shared application state.
///
/// Holds the engine configured with the rules loaded at startup. The engine
/// is immutable, so every request sees the same rules.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: PayrollEngine,
}

impl AppState {
    /// Creates a new application state applying the given rules.
    pub fn new(rules: OvertimeRules) -> Self {
        Self {
            engine: PayrollEngine::new(rules),
        }
    }

    /// Returns the payroll engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }
}
