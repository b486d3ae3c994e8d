//! String similarity used to score recognition output.
//!
//! Distances are computed over Unicode scalar values, so a CJK character or an
//! accented letter counts as one edit, not as several bytes.

/// Levenshtein distance between `a` and `b` with unit-cost insertions,
/// deletions and substitutions.
#[inline]
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Levenshtein distance divided by the longer string's length, in [0.0, 1.0].
///
/// Two empty strings are a perfect match (`0.0`); exactly one empty string
/// gives `1.0`.
///
/// # Example
///
/// ```rust
/// use oar_ocr_eval::processors::normalized_distance;
///
/// assert_eq!(normalized_distance("", ""), 0.0);
/// assert_eq!(normalized_distance("abc", ""), 1.0);
/// assert!((normalized_distance("balala", "baxlala") - 1.0 / 7.0).abs() < 1e-12);
/// ```
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / max_len as f64
}

/// Exact string equality on already-normalized text.
#[inline]
pub fn exact_match(a: &str, b: &str) -> bool {
    a == b
}
