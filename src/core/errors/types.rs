//! Error types for recognition metric evaluation.
//!
//! This module defines the errors that can surface while configuring a metric,
//! feeding it batches, and reading the final scores.

use thiserror::Error;

/// Enum representing various errors that can occur while evaluating recognition output.
///
/// Every public operation in this crate either succeeds or returns one of these
/// variants. No operation logs an error and carries on.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error indicating a configuration problem, such as an unreadable
    /// character dictionary.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error indicating a malformed batch.
    ///
    /// Raised for an unexpected ground-truth structure, mismatched
    /// prediction/ground-truth counts, or mismatched text/length counts.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// A message describing the invalid argument.
        message: String,
    },

    /// Error indicating that scores were requested before any sample was seen.
    #[error("accuracy can not be calculated, because the number of samples is 0")]
    EmptyEvaluation,
}

impl EvalError {
    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, EvalError::ConfigError { .. })
    }

    /// Returns true if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EvalError::InvalidArgument { .. })
    }

    /// Returns true if this error was caused by an empty evaluation run.
    pub fn is_empty_evaluation(&self) -> bool {
        matches!(self, EvalError::EmptyEvaluation)
    }
}
