//! Error type definitions.
//!
//! The analysis engine itself is total and never fails; these types cover
//! the application shell around it (logger setup, input reading). An
//! "error" finding in an analysis result is a content-quality signal, not a
//! failure of computation.

use log::SetLoggerError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading post snapshots.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("Failed to open input file {path}: {source}")]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A line could not be read from the input.
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages_name_the_path() {
        let err = InputError::FileOpen {
            path: PathBuf::from("/no/such/posts.jsonl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/no/such/posts.jsonl"));
    }
}
