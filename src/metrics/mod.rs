//! Recognition metrics.
//!
//! * [`accumulator`] - Running totals and final scores
//! * [`rec_metric`] - Batch ingestion and normalization

pub mod accumulator;
pub mod rec_metric;

pub use accumulator::{RecAccumulator, RecMetricOutput};
pub use rec_metric::RecMetric;
