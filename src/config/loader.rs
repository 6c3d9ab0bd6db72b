//! Rules file loading.
//!
//! This module provides the [`RulesLoader`] type for loading overtime rules
//! from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::OvertimeRules;

/// Loads and validates overtime rules.
///
/// The rules file is a flat YAML mapping:
/// ```text
/// daily_regular_limit: 8
/// weekly_regular_limit: 44
/// overtime_multiplier: 1.5
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/rules.yaml")?;
/// println!("Weekly limit: {}", loader.rules().weekly_regular_limit);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: OvertimeRules,
}

impl RulesLoader {
    /// Loads rules from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file does not exist
    /// - [`EngineError::ConfigParseError`] if it cannot be read or is not valid
    ///   rules YAML
    /// - [`EngineError::InvalidConfiguration`] if a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EngineError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => EngineError::ConfigParseError {
                path: path_str.clone(),
                message: format!("cannot read file: {e}"),
            },
        })?;

        let rules: OvertimeRules =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
        rules.validate()?;

        debug!(
            path = %path_str,
            daily_regular_limit = %rules.daily_regular_limit,
            weekly_regular_limit = %rules.weekly_regular_limit,
            overtime_multiplier = %rules.overtime_multiplier,
            "Loaded overtime rules"
        );

        Ok(Self { rules })
    }

    /// Loads rules from `path` if given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self {
                rules: OvertimeRules::default(),
            }),
        }
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &OvertimeRules {
        &self.rules
    }
}
