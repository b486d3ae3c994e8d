//! Recognition metric: batch ingestion on top of [`RecAccumulator`].
//!
//! A [`RecMetric`] unpacks each batch into (prediction, label) pairs, runs
//! every pair through the configured [`TextNormalizer`], and scores it into
//! its accumulator.
//!
//! # Example
//!
//! ```rust
//! use oar_ocr_eval::prelude::*;
//!
//! # fn main() -> Result<(), EvalError> {
//! let mut metric = RecMetric::new(&RecMetricConfig::default())?;
//!
//! let preds = RecPredictions::new(["balala", "ba"]);
//! let gt = GroundTruth::padded(["ba xla la!    ", "ba       "], vec![10, 2]);
//! metric.update_batch(&preds, &gt)?;
//!
//! let scores = metric.eval()?;
//! assert_eq!(scores.acc, 0.5);
//! assert!((scores.norm_edit_distance - 0.928571).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

use super::accumulator::{RecAccumulator, RecMetricOutput};
use crate::core::config::{ConfigValidator, RecMetricConfig};
use crate::core::errors::{EvalError, EvalResult};
use crate::core::traits::Metric;
use crate::core::validation::validate_length_match;
use crate::domain::{CharacterDictionary, GroundTruth, RecPredictions};
use crate::processors::{NormalizationConfig, TextNormalizer};
use rayon::prelude::*;
use serde_json::Value;
use std::sync::Arc;

/// Exact-match accuracy and normalized edit distance for text recognition.
///
/// The metric is single-owner: `update_batch` takes `&mut self`. To evaluate
/// on several workers, give each worker its own `RecMetric` and combine them
/// with [`merge`](Self::merge) before calling [`eval`](Self::eval).
#[derive(Debug, Clone)]
pub struct RecMetric {
    normalizer: TextNormalizer,
    accumulator: RecAccumulator,
    print_flag: bool,
    parallel_threshold: usize,
}

impl RecMetric {
    /// Creates a metric from a configuration, loading the configured dictionary.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::ConfigError` if the configuration is invalid or the
    /// dictionary file cannot be read.
    pub fn new(config: &RecMetricConfig) -> EvalResult<Self> {
        config.validate()?;
        let dictionary = CharacterDictionary::load(config.character_dict_path.as_deref())?;
        Self::with_dictionary(config, Arc::new(dictionary))
    }

    /// Creates a metric that shares an already loaded dictionary.
    ///
    /// `config.character_dict_path` is ignored.
    pub fn with_dictionary(
        config: &RecMetricConfig,
        dictionary: Arc<CharacterDictionary>,
    ) -> EvalResult<Self> {
        config.validate_parallel_threshold(config.parallel_threshold)?;
        let normalizer = TextNormalizer::new(
            NormalizationConfig {
                ignore_space: config.ignore_space,
                filter_ood: config.filter_ood,
                lower: config.lower,
            },
            Some(dictionary),
        )?;

        let mut metric = Self {
            normalizer,
            accumulator: RecAccumulator::new(),
            print_flag: config.print_flag,
            parallel_threshold: config.parallel_threshold,
        };
        metric.clear();
        Ok(metric)
    }

    /// Resets the accumulated state to start a new evaluation run.
    pub fn clear(&mut self) {
        self.accumulator.clear();
    }

    /// Scores one batch.
    ///
    /// The whole batch is validated before any state changes; on error the
    /// accumulated totals are exactly what they were before the call.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if padded texts and lengths differ
    /// in size, if the number of predictions differs from the number of labels,
    /// or if the running counters would overflow.
    pub fn update_batch(&mut self, preds: &RecPredictions, gt: &GroundTruth) -> EvalResult<()> {
        let labels = gt.unpack()?;
        validate_length_match(preds.len(), labels.len(), "predictions", "ground truth")?;

        if let Some(confs) = preds.confs.as_ref().filter(|c| c.len() != preds.len()) {
            tracing::warn!(
                "Ignoring {} confidences for {} predictions",
                confs.len(),
                preds.len()
            );
        }

        tracing::debug!("Scoring recognition batch of {} samples", labels.len());

        let this = &*self;
        let batch = if labels.len() > this.parallel_threshold {
            preds
                .texts
                .par_iter()
                .zip(labels.par_iter())
                .fold(RecAccumulator::new, |mut acc, (pred, label)| {
                    this.score_into(&mut acc, pred, label);
                    acc
                })
                .map(Ok::<_, EvalError>)
                .try_reduce(RecAccumulator::new, |mut left, right| {
                    left.merge(&right)?;
                    Ok(left)
                })?
        } else {
            let mut acc = RecAccumulator::new();
            for (pred, label) in preds.texts.iter().zip(&labels) {
                this.score_into(&mut acc, pred, label);
            }
            acc
        };

        self.accumulator.merge(&batch)
    }

    /// Scores one batch given in loosely-typed form.
    ///
    /// `preds` is `{"texts": [...], "confs": [...]}` or a list of strings;
    /// `gt` is a list of strings or a `[gt_texts, gt_lens]` pair.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` for any other structure, and
    /// everything [`update_batch`](Self::update_batch) returns.
    pub fn update_json(&mut self, preds: &Value, gt: &Value) -> EvalResult<()> {
        let preds = RecPredictions::from_json(preds)?;
        let gt = GroundTruth::from_json(gt)?;
        self.update_batch(&preds, &gt)
    }

    /// Computes the scores for everything seen since the last `clear`.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::EmptyEvaluation` if no sample has been scored.
    pub fn eval(&self) -> EvalResult<RecMetricOutput> {
        let output = self.accumulator.finalize()?;
        tracing::info!(
            "correct num: {}, total num: {}",
            self.accumulator.correct_num(),
            self.accumulator.total_num()
        );
        Ok(output)
    }

    /// Folds another metric's totals into this one.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if the merged counts overflow.
    pub fn merge(&mut self, other: &RecMetric) -> EvalResult<()> {
        self.accumulator.merge(&other.accumulator)
    }

    /// Folds a partial accumulator, e.g. one received from another process.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if the merged counts overflow.
    pub fn merge_state(&mut self, state: &RecAccumulator) -> EvalResult<()> {
        self.accumulator.merge(state)
    }

    /// The accumulated state.
    pub fn accumulator(&self) -> &RecAccumulator {
        &self.accumulator
    }

    /// The normalizer applied to every pair.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    fn score_into(&self, acc: &mut RecAccumulator, pred: &str, label: &str) {
        let pair = self.normalizer.normalize(pred, label);
        if self.print_flag {
            tracing::info!("{} :: {}", pair.prediction, pair.ground_truth);
        }
        acc.update(&pair.prediction, &pair.ground_truth);
    }
}

impl<'a> Metric<'a> for RecMetric {
    type Input = (&'a RecPredictions, &'a GroundTruth);
    type Output = RecMetricOutput;

    fn clear(&mut self) {
        RecMetric::clear(self);
    }

    fn update(&mut self, (preds, gt): Self::Input) -> EvalResult<()> {
        self.update_batch(preds, gt)
    }

    fn eval(&self) -> EvalResult<RecMetricOutput> {
        RecMetric::eval(self)
    }
}
