//! The core module of the evaluation pipeline.
//!
//! This module contains:
//! - Configuration management
//! - Constants used throughout the crate
//! - Error handling
//! - The [`Metric`] trait
//! - Input validation helpers

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod validation;

pub use config::{ConfigError, ConfigValidator, RecMetricConfig};
pub use constants::*;
pub use errors::{EvalError, EvalResult};
pub use traits::Metric;

/// Directive used when `RUST_LOG` is unset: evaluation summaries and pair logs.
const DEFAULT_LOG_DIRECTIVE: &str = "oar_ocr_eval=info";

/// Installs a global subscriber for evaluation drivers.
///
/// The filter comes from `RUST_LOG`, falling back to `oar_ocr_eval=info`.
/// Returns `false` if a global subscriber was already set; the library never
/// installs one on its own.
pub fn init_tracing() -> bool {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}
