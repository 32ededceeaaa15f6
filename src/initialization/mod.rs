//! Application initialization.
//!
//! This module provides logger setup for the CLI binary.

mod logger;

pub use logger::init_logger_with;
