//! Payroll Engine
//!
//! This crate computes gross pay for one employee over a pay period by
//! applying a daily overtime rule to each day's hours, a weekly overtime rule
//! to the period total, and reconciling the two so no hour is paid as
//! overtime twice.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod validation;
