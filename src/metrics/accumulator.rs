//! Running totals for recognition accuracy and edit distance.

use crate::core::errors::{EvalError, EvalResult};
use crate::core::validation::validate_unit_range;
use crate::processors::{exact_match, normalized_distance};
use serde::{Deserialize, Serialize};

/// Final scores of an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecMetricOutput {
    /// Fraction of samples whose prediction matched the label exactly.
    pub acc: f64,
    /// One minus the mean normalized edit distance. 1.0 means every sample
    /// was identical to its label.
    pub norm_edit_distance: f64,
}

/// Running state of a recognition evaluation.
///
/// The state is plain data: partial accumulators built on different workers
/// (or serialized from other processes) are combined with
/// [`merge`](Self::merge) before [`finalize`](Self::finalize).
///
/// Deserialized state is checked: `correct_num <= total_num` and the summed
/// distance must lie in `[0, total_num]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccumulatorState")]
pub struct RecAccumulator {
    correct_num: u64,
    total_num: u64,
    norm_edit_dis: f64,
}

/// Unchecked wire form of [`RecAccumulator`].
#[derive(Deserialize)]
struct AccumulatorState {
    correct_num: u64,
    total_num: u64,
    norm_edit_dis: f64,
}

impl TryFrom<AccumulatorState> for RecAccumulator {
    type Error = EvalError;

    fn try_from(state: AccumulatorState) -> Result<Self, Self::Error> {
        RecAccumulator::from_parts(state.correct_num, state.total_num, state.norm_edit_dis)
    }
}

impl RecAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an accumulator from its raw totals.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if `correct_num > total_num`, or if
    /// `norm_edit_dis` is not a finite value in `[0, total_num]`.
    pub fn from_parts(correct_num: u64, total_num: u64, norm_edit_dis: f64) -> EvalResult<Self> {
        if correct_num > total_num {
            return Err(EvalError::invalid_argument(format!(
                "correct_num ({}) exceeds total_num ({})",
                correct_num, total_num
            )));
        }
        if total_num == 0 {
            if norm_edit_dis != 0.0 {
                return Err(EvalError::invalid_argument(format!(
                    "norm_edit_dis must be 0 when total_num is 0, got: {}",
                    norm_edit_dis
                )));
            }
        } else {
            validate_unit_range(norm_edit_dis / total_num as f64, "mean norm_edit_dis")?;
        }
        Ok(Self {
            correct_num,
            total_num,
            norm_edit_dis,
        })
    }

    /// Resets all counters.
    pub fn clear(&mut self) {
        self.correct_num = 0;
        self.total_num = 0;
        self.norm_edit_dis = 0.0;
    }

    /// Scores one normalized (prediction, label) pair.
    pub fn update(&mut self, pred: &str, label: &str) {
        self.norm_edit_dis += normalized_distance(pred, label);
        if exact_match(pred, label) {
            self.correct_num += 1;
        }
        self.total_num += 1;
    }

    /// Adds another accumulator's totals to this one.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::InvalidArgument` if a counter would overflow; the
    /// state is left unchanged in that case.
    pub fn merge(&mut self, other: &RecAccumulator) -> EvalResult<()> {
        let overflow = || EvalError::invalid_argument("merged sample counts overflow u64");
        let correct_num = self
            .correct_num
            .checked_add(other.correct_num)
            .ok_or_else(overflow)?;
        let total_num = self
            .total_num
            .checked_add(other.total_num)
            .ok_or_else(overflow)?;

        self.correct_num = correct_num;
        self.total_num = total_num;
        self.norm_edit_dis += other.norm_edit_dis;
        Ok(())
    }

    /// Computes the scores without resetting state.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::EmptyEvaluation` if no sample has been scored.
    pub fn finalize(&self) -> EvalResult<RecMetricOutput> {
        if self.total_num == 0 {
            return Err(EvalError::EmptyEvaluation);
        }
        let total = self.total_num as f64;
        Ok(RecMetricOutput {
            acc: self.correct_num as f64 / total,
            norm_edit_distance: 1.0 - self.norm_edit_dis / total,
        })
    }

    /// Number of exact matches.
    pub fn correct_num(&self) -> u64 {
        self.correct_num
    }

    /// Number of scored samples.
    pub fn total_num(&self) -> u64 {
        self.total_num
    }

    /// Sum of normalized edit distances.
    pub fn norm_edit_dis(&self) -> f64 {
        self.norm_edit_dis
    }
}
