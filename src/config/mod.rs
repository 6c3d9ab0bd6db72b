//! Configuration loading for the Payroll Engine.
//!
//! Overtime thresholds and the overtime multiplier default to 8 hours per day,
//! 44 hours per period and 1.5x. They can be overridden from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RulesLoader;
//!
//! let loader = RulesLoader::load("./config/rules.yaml").unwrap();
//! println!("Daily limit: {}", loader.rules().daily_regular_limit);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::OvertimeRules;
