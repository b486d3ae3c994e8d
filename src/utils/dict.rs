//! Dictionary loading utilities.

use crate::core::errors::{EvalError, EvalResult};
use std::path::Path;

/// Reads a character dictionary file and returns a vector of strings.
///
/// Each line in the file becomes one entry, with trailing `\n` and `\r`
/// characters stripped. Empty lines are preserved as empty entries; a newline
/// at the very end of the file does not add one.
///
/// # Errors
///
/// Returns an `EvalError::ConfigError` if the file cannot be read.
///
/// # Example
///
/// ```rust,no_run
/// use oar_ocr_eval::utils::read_character_dict;
/// use std::path::Path;
///
/// let dict = read_character_dict(Path::new("path/to/dict.txt"))?;
/// # Ok::<(), oar_ocr_eval::core::EvalError>(())
/// ```
pub fn read_character_dict(path: &Path) -> EvalResult<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| EvalError::dictionary_load(path, e))?;
    Ok(parse_character_dict(&content))
}

/// Splits dictionary file content into entries.
pub fn parse_character_dict(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches(['\r', '\n']).to_string())
        .collect()
}
