//! Constants used throughout the evaluation pipeline.

/// The default character set used when no dictionary is configured.
///
/// Digits followed by lowercase ASCII letters, 36 entries in this order.
pub const DEFAULT_CHARACTER_SET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// The default threshold for parallel scoring.
///
/// Batches with at most this many samples are scored sequentially; larger
/// batches are split across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
