//! Configuration management for recognition metrics.
//!
//! This module provides the metric configuration type and the validation trait
//! used to check it before a metric is built.

pub mod errors;
pub mod metric;

pub use errors::{ConfigError, ConfigValidator};
pub use metric::RecMetricConfig;
