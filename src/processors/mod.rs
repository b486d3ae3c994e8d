//! Text processors used between batch unpacking and accumulation.
//!
//! * [`normalization`] - Space removal, dictionary filtering and case folding
//! * [`similarity`] - Edit distance and exact match

pub mod normalization;
pub mod similarity;

pub use normalization::{NormalizationConfig, TextNormalizer};
pub use similarity::{exact_match, levenshtein, normalized_distance};
