//! Application configuration and constants.
//!
//! This module provides:
//! - Scoring weights, thresholds, and canonical finding messages
//! - CLI option types and parsing

pub mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Action, Config, ExportFormat, LogFormat, LogLevel};
