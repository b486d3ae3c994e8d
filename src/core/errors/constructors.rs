//! Error constructor utilities.
//!
//! Helper functions for building [`EvalError`] values with consistent messages
//! and error chaining.

use super::types::EvalError;
use std::path::Path;

impl EvalError {
    /// Creates a configuration error without an underlying source.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error that wraps an underlying error.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    /// * `error` - The underlying error that caused this error.
    pub fn config_error_with_source(
        message: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a configuration error for a dictionary file that could not be read.
    ///
    /// # Arguments
    ///
    /// * `path` - The dictionary path that failed to load.
    /// * `error` - The I/O error returned while reading it.
    pub fn dictionary_load(path: &Path, error: std::io::Error) -> Self {
        Self::config_error_with_source(
            format!(
                "failed to read character dictionary from '{}': {}",
                path.display(),
                error
            ),
            error,
        )
    }

    /// Creates an invalid argument error.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid argument.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error for two collections whose sizes must agree.
    ///
    /// # Arguments
    ///
    /// * `actual_name` - Name of the first collection.
    /// * `actual` - Size of the first collection.
    /// * `expected_name` - Name of the second collection.
    /// * `expected` - Size of the second collection.
    pub fn length_mismatch(
        actual_name: &str,
        actual: usize,
        expected_name: &str,
        expected: usize,
    ) -> Self {
        Self::invalid_argument(format!(
            "mismatch between {} count ({}) and {} count ({})",
            actual_name, actual, expected_name, expected
        ))
    }
}

impl From<crate::core::config::ConfigError> for EvalError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::config_error_with_source("invalid metric configuration", error)
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(error: serde_json::Error) -> Self {
        Self::config_error_with_source(format!("malformed configuration JSON: {}", error), error)
    }
}
