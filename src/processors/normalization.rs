//! Text normalization applied before recognition output is scored.
//!
//! Predictions and labels go through the same fixed sequence of steps:
//!
//! 1. space removal (both sides)
//! 2. out-of-dictionary filtering (label only)
//! 3. lower-casing (label only)
//!
//! Filtering runs before lower-casing so that dictionary membership is checked
//! against the label's original case.

use crate::core::errors::{EvalError, EvalResult};
use crate::domain::{CharacterDictionary, SamplePair};
use std::sync::Arc;

/// Switches controlling [`TextNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationConfig {
    /// Remove ASCII spaces from prediction and label.
    pub ignore_space: bool,
    /// Drop label characters missing from the dictionary.
    pub filter_ood: bool,
    /// Lower-case the label.
    pub lower: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            ignore_space: true,
            filter_ood: true,
            lower: true,
        }
    }
}

/// Normalizes (prediction, label) pairs.
///
/// The prediction is only touched by space removal; the model is expected to
/// emit text in the dictionary's alphabet already.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    config: NormalizationConfig,
    dictionary: Option<Arc<CharacterDictionary>>,
}

impl TextNormalizer {
    /// Creates a new TextNormalizer.
    ///
    /// # Arguments
    ///
    /// * `config` - Which normalization steps to apply.
    /// * `dictionary` - The dictionary used for OOD filtering. Optional when
    ///   `config.filter_ood` is false.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::ConfigError` if `filter_ood` is set without a dictionary.
    pub fn new(
        config: NormalizationConfig,
        dictionary: Option<Arc<CharacterDictionary>>,
    ) -> EvalResult<Self> {
        if config.filter_ood && dictionary.is_none() {
            return Err(EvalError::config_error(
                "filter_ood requires a character dictionary",
            ));
        }
        Ok(Self { config, dictionary })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> NormalizationConfig {
        self.config
    }

    /// Returns the dictionary used for filtering, if any.
    pub fn dictionary(&self) -> Option<&Arc<CharacterDictionary>> {
        self.dictionary.as_ref()
    }

    /// Normalizes one (prediction, label) pair.
    pub fn normalize(&self, prediction: &str, ground_truth: &str) -> SamplePair {
        let (prediction, mut ground_truth) = if self.config.ignore_space {
            (remove_spaces(prediction), remove_spaces(ground_truth))
        } else {
            (prediction.to_string(), ground_truth.to_string())
        };

        if self.config.filter_ood {
            if let Some(dict) = &self.dictionary {
                ground_truth.retain(|c| dict.contains_char(c));
            }
        }

        if self.config.lower {
            ground_truth = ground_truth.to_lowercase();
        }

        SamplePair {
            prediction,
            ground_truth,
        }
    }
}

fn remove_spaces(text: &str) -> String {
    text.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(ignore_space: bool, filter_ood: bool, lower: bool) -> TextNormalizer {
        TextNormalizer::new(
            NormalizationConfig {
                ignore_space,
                filter_ood,
                lower,
            },
            Some(Arc::new(CharacterDictionary::default())),
        )
        .unwrap()
    }

    #[test]
    fn test_all_steps() {
        let n = normalizer(true, true, true);
        let pair = n.normalize("ba la", "ba xla la!");
        assert_eq!(pair.prediction, "bala");
        assert_eq!(pair.ground_truth, "baxlala");
    }

    #[test]
    fn test_no_steps() {
        let n = normalizer(false, false, false);
        let pair = n.normalize("A b", "C d!");
        assert_eq!(pair.prediction, "A b");
        assert_eq!(pair.ground_truth, "C d!");
    }

    #[test]
    fn test_only_ascii_space_removed() {
        let n = normalizer(true, false, false);
        let pair = n.normalize("a\tb c", "x\u{3000}y z");
        assert_eq!(pair.prediction, "a\tbc");
        assert_eq!(pair.ground_truth, "x\u{3000}yz");
    }

    #[test]
    fn test_prediction_not_filtered_or_lowered() {
        let n = normalizer(true, true, true);
        let pair = n.normalize("AB!", "ab");
        assert_eq!(pair.prediction, "AB!");
        assert_eq!(pair.ground_truth, "ab");
    }

    #[test]
    fn test_filter_runs_before_lower() {
        // Uppercase letters are not in the default dictionary, so they are
        // dropped before lower-casing could have saved them.
        let n = normalizer(false, true, true);
        let pair = n.normalize("", "AbC1");
        assert_eq!(pair.ground_truth, "b1");
    }

    #[test]
    fn test_lower_without_filter() {
        let n = normalizer(false, false, true);
        let pair = n.normalize("", "AbC1");
        assert_eq!(pair.ground_truth, "abc1");
    }

    #[test]
    fn test_filter_with_case_sensitive_dictionary() {
        let n = TextNormalizer::new(
            NormalizationConfig {
                ignore_space: false,
                filter_ood: true,
                lower: true,
            },
            Some(Arc::new(CharacterDictionary::from_entries(["A", "b"]))),
        )
        .unwrap();
        let pair = n.normalize("", "AaBb");
        assert_eq!(pair.ground_truth, "ab");
    }

    #[test]
    fn test_empty_strings() {
        let n = normalizer(true, true, true);
        let pair = n.normalize("", "");
        assert_eq!(pair.prediction, "");
        assert_eq!(pair.ground_truth, "");

        let pair = n.normalize("   ", "!!  ");
        assert_eq!(pair.prediction, "");
        assert_eq!(pair.ground_truth, "");
    }

    #[test]
    fn test_filter_ood_requires_dictionary() {
        let err = TextNormalizer::new(NormalizationConfig::default(), None).unwrap_err();
        assert!(err.is_config_error());

        let config = NormalizationConfig {
            filter_ood: false,
            ..NormalizationConfig::default()
        };
        assert!(TextNormalizer::new(config, None).is_ok());
    }
}
