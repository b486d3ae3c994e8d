//! # OAR OCR Eval
//!
//! Accuracy metrics for evaluating text recognition models.
//!
//! Given batches of decoded predictions and their ground truth, a
//! [`RecMetric`](metrics::RecMetric) accumulates exact-match accuracy and a
//! normalized edit-distance score over a whole evaluation run.
//!
//! ## Features
//!
//! - Configurable text normalization: space removal, out-of-dictionary
//!   filtering, case folding
//! - Padded ground truth with per-sample lengths
//! - Unicode-aware Levenshtein distance
//! - Mergeable, serializable accumulator state for sharded evaluation
//! - Parallel scoring of large batches
//!
//! ## Modules
//!
//! * [`core`] - Configuration, error handling, constants and the `Metric` trait
//! * [`domain`] - Character dictionary and batch input types
//! * [`processors`] - Text normalization and string similarity
//! * [`metrics`] - Accumulator and the recognition metric
//! * [`utils`] - Dictionary file loading
//!
//! ## Quick Start
//!
//! ```rust
//! use oar_ocr_eval::prelude::*;
//!
//! # fn main() -> Result<(), EvalError> {
//! // The default dictionary is lowercase and filtering runs before lowering,
//! // so uppercase labels are only folded when filtering is off.
//! let config = RecMetricConfig::new().with_filter_ood(false);
//! let mut metric = RecMetric::new(&config)?;
//!
//! metric.update_batch(
//!     &RecPredictions::new(["hello", "world"]),
//!     &GroundTruth::texts(["Hello", "w0rld"]),
//! )?;
//!
//! let scores = metric.eval()?;
//! assert_eq!(scores.acc, 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! ### Sharded evaluation
//!
//! ```rust
//! use oar_ocr_eval::prelude::*;
//!
//! # fn main() -> Result<(), EvalError> {
//! let config = RecMetricConfig::default();
//! let mut shard_a = RecMetric::new(&config)?;
//! let mut shard_b = RecMetric::new(&config)?;
//!
//! shard_a.update_batch(&RecPredictions::new(["ab"]), &GroundTruth::texts(["ab"]))?;
//! shard_b.update_batch(&RecPredictions::new(["cd"]), &GroundTruth::texts(["ce"]))?;
//!
//! // The state can also travel as JSON between processes
//! let wire = serde_json::to_string(shard_b.accumulator()).unwrap();
//! let state: RecAccumulator = serde_json::from_str(&wire).unwrap();
//! shard_a.merge_state(&state)?;
//!
//! let scores = shard_a.eval()?;
//! assert_eq!(scores.acc, 0.5);
//! assert_eq!(scores.norm_edit_distance, 0.75);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod metrics;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error Handling
    pub use crate::core::{EvalError, EvalResult};

    // Configuration
    pub use crate::core::{ConfigValidator, Metric, RecMetricConfig};

    // Domain types
    pub use crate::domain::{CharacterDictionary, GroundTruth, RecPredictions};

    // Metrics
    pub use crate::metrics::{RecAccumulator, RecMetric, RecMetricOutput};
}
