//! Configuration error types and validation traits.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a dictionary path does not exist.
    #[error("dictionary path does not exist: {path}")]
    DictionaryPathNotFound { path: std::path::PathBuf },

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Validates a dictionary path.
    ///
    /// This method checks that the path exists and is a file.
    fn validate_dictionary_path(&self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            Err(ConfigError::DictionaryPathNotFound {
                path: path.to_path_buf(),
            })
        } else if !path.is_file() {
            Err(ConfigError::InvalidConfig {
                message: format!("Dictionary path is not a file: {}", path.display()),
            })
        } else {
            Ok(())
        }
    }

    /// Validates a parallel processing threshold.
    ///
    /// This method checks that the threshold is at least 1.
    fn validate_parallel_threshold(&self, threshold: usize) -> Result<(), ConfigError> {
        if threshold == 0 {
            Err(ConfigError::InvalidConfig {
                message: "Parallel threshold must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
