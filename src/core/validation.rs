//! Input validation utilities.
//!
//! Checks that run before any metric state is touched, so a rejected batch
//! never leaves a partial update behind.

use crate::core::errors::{EvalError, EvalResult};

/// Validates that two collections have the same number of elements.
#[inline]
pub fn validate_length_match(
    actual: usize,
    expected: usize,
    actual_name: &str,
    expected_name: &str,
) -> EvalResult<()> {
    if actual != expected {
        return Err(EvalError::length_mismatch(
            actual_name,
            actual,
            expected_name,
            expected,
        ));
    }
    Ok(())
}

/// Validates that a score lies in the unit range [0.0, 1.0].
#[inline]
pub fn validate_unit_range(value: f64, param_name: &str) -> EvalResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EvalError::invalid_argument(format!(
            "Parameter '{}' must be in range [0, 1], got: {}",
            param_name, value
        )));
    }
    Ok(())
}
