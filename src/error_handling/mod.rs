//! Error types for the application shell.

mod types;

pub use types::{InitializationError, InputError};
