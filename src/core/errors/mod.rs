//! Error types for recognition metric evaluation.
//!
//! # Usage
//!
//! ```rust
//! use oar_ocr_eval::core::errors::EvalError;
//!
//! // A batch with mismatched sizes
//! let error = EvalError::length_mismatch("predictions", 3, "ground truth", 2);
//! assert!(error.is_invalid_argument());
//!
//! // A configuration error
//! let config_error = EvalError::config_error("filter_ood requires a character dictionary");
//! assert!(config_error.is_config_error());
//! ```

pub mod constructors;
pub mod types;

pub use types::EvalError;

/// Convenient result alias for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
