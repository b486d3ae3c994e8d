//! Domain types for recognition evaluation.
//!
//! This module provides the character dictionary and the batch types that
//! carry predictions and ground truth into a metric.

pub mod batch;
pub mod dictionary;

pub use batch::{GroundTruth, RecPredictions, SamplePair};
pub use dictionary::{CharacterDictionary, DictionarySource};
