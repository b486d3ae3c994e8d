//! Character dictionary used to filter ground-truth text.

use crate::core::constants::DEFAULT_CHARACTER_SET;
use crate::core::errors::EvalResult;
use crate::utils::read_character_dict;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where a [`CharacterDictionary`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The built-in digits + lowercase letters set.
    Default,
    /// Entries supplied directly by the caller.
    Inline,
    /// Entries read from a file, one per line.
    File(PathBuf),
}

/// An ordered set of valid dictionary entries.
///
/// Insertion order is preserved in [`entries`](Self::entries) while
/// membership checks go through a hash set. Entries are usually single
/// characters but multi-character tokens are stored as-is.
///
/// The dictionary is immutable once built and is meant to be shared
/// through an `Arc` by every metric that uses the same configuration.
#[derive(Debug, Clone)]
pub struct CharacterDictionary {
    entries: Vec<String>,
    lookup: HashSet<String>,
    source: DictionarySource,
}

impl CharacterDictionary {
    fn from_parts(entries: Vec<String>, source: DictionarySource) -> Self {
        let lookup = entries.iter().cloned().collect();
        Self {
            entries,
            lookup,
            source,
        }
    }

    /// Loads a dictionary from an optional file path.
    ///
    /// With `None`, the built-in 36-entry set is returned.
    ///
    /// # Errors
    ///
    /// Returns an `EvalError::ConfigError` if the file cannot be read.
    pub fn load(path: Option<&Path>) -> EvalResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads a dictionary file, one entry per line.
    pub fn from_file(path: &Path) -> EvalResult<Self> {
        let entries = read_character_dict(path)?;
        tracing::debug!(
            "Loaded {} dictionary entries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self::from_parts(
            entries,
            DictionarySource::File(path.to_path_buf()),
        ))
    }

    /// Builds a dictionary from an explicit list of entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(
            entries.into_iter().map(Into::into).collect(),
            DictionarySource::Inline,
        )
    }

    /// Returns true if `entry` is one of the loaded entries.
    pub fn contains(&self, entry: &str) -> bool {
        self.lookup.contains(entry)
    }

    /// Returns true if the single character `c` is one of the loaded entries.
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.lookup.contains(&*c.encode_utf8(&mut buf))
    }

    /// The entries in load order, duplicates included.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the entries came from.
    pub fn source(&self) -> &DictionarySource {
        &self.source
    }
}

impl Default for CharacterDictionary {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_CHARACTER_SET.chars().map(String::from).collect(),
            DictionarySource::Default,
        )
    }
}
