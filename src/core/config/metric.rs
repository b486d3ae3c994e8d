//! Recognition metric configuration.

use super::errors::{ConfigError, ConfigValidator};
use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::core::errors::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for [`RecMetric`](crate::metrics::RecMetric).
///
/// All normalization switches default to `true`, matching the usual
/// evaluation setup for a lowercase alphanumeric recognizer.
///
/// # Example
///
/// ```rust
/// use oar_ocr_eval::core::config::RecMetricConfig;
///
/// let config: RecMetricConfig = serde_json::from_str(r#"{ "lower": false }"#)?;
/// assert!(config.ignore_space);
/// assert!(!config.lower);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecMetricConfig {
    /// Path to a character dictionary file, one entry per line.
    /// If None, the built-in digits + lowercase letters set is used.
    #[serde(default)]
    pub character_dict_path: Option<PathBuf>,

    /// Remove spaces from both prediction and ground truth.
    /// Default: true
    #[serde(default = "RecMetricConfig::default_true")]
    pub ignore_space: bool,

    /// Drop ground-truth characters that are not in the dictionary.
    /// Default: true
    #[serde(default = "RecMetricConfig::default_true")]
    pub filter_ood: bool,

    /// Lower-case the ground truth.
    /// Default: true
    #[serde(default = "RecMetricConfig::default_true")]
    pub lower: bool,

    /// Emit every normalized `pred :: label` pair through tracing.
    /// Default: false
    #[serde(default)]
    pub print_flag: bool,

    /// Batches with more samples than this are scored on the rayon pool.
    /// Default: 64 (matches DEFAULT_PARALLEL_THRESHOLD constant)
    #[serde(default = "RecMetricConfig::default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl RecMetricConfig {
    /// Create a new RecMetricConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    fn default_true() -> bool {
        true
    }

    fn default_parallel_threshold() -> usize {
        DEFAULT_PARALLEL_THRESHOLD
    }

    /// Set the character dictionary path.
    pub fn with_character_dict(mut self, path: impl Into<PathBuf>) -> Self {
        self.character_dict_path = Some(path.into());
        self
    }

    /// Set whether spaces are removed.
    pub fn with_ignore_space(mut self, ignore_space: bool) -> Self {
        self.ignore_space = ignore_space;
        self
    }

    /// Set whether out-of-dictionary ground-truth characters are dropped.
    pub fn with_filter_ood(mut self, filter_ood: bool) -> Self {
        self.filter_ood = filter_ood;
        self
    }

    /// Set whether the ground truth is lower-cased.
    pub fn with_lower(mut self, lower: bool) -> Self {
        self.lower = lower;
        self
    }

    /// Set whether normalized pairs are logged.
    pub fn with_print_flag(mut self, print_flag: bool) -> Self {
        self.print_flag = print_flag;
        self
    }

    /// Set the parallel scoring threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> EvalResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> EvalResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EvalError::config_error_with_source(
                format!("failed to read metric config '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }
}

impl Default for RecMetricConfig {
    fn default() -> Self {
        Self {
            character_dict_path: None,
            ignore_space: true,
            filter_ood: true,
            lower: true,
            print_flag: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ConfigValidator for RecMetricConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_parallel_threshold(self.parallel_threshold)?;
        if let Some(path) = &self.character_dict_path {
            self.validate_dictionary_path(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RecMetricConfig::default();
        assert!(config.character_dict_path.is_none());
        assert!(config.ignore_space);
        assert!(config.filter_ood);
        assert!(config.lower);
        assert!(!config.print_flag);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RecMetricConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RecMetricConfig::default());
    }

    #[test]
    fn test_zero_parallel_threshold_rejected() {
        let config = RecMetricConfig::new().with_parallel_threshold(0);
        assert!(config.validate().is_err());

        let err = RecMetricConfig::from_json_str(r#"{ "parallel_threshold": 0 }"#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_missing_dictionary_path_rejected() {
        let config = RecMetricConfig::new().with_character_dict("/nonexistent/dict.txt");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DictionaryPathNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = RecMetricConfig::from_json_str(r#"{ "lower": "yes" }"#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ignore_space": false, "print_flag": true }}"#).unwrap();

        let config = RecMetricConfig::from_json_file(file.path()).unwrap();
        assert!(!config.ignore_space);
        assert!(config.print_flag);
        assert!(config.filter_ood);
    }
}
