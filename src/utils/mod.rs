//! Utility functions shared across the crate.

pub mod dict;

pub use dict::{parse_character_dict, read_character_dict};
