//! Reference word-set loading.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::{CollideError, Result};

use super::alphabet::is_valid_word;
use super::lines::Lines;

/// Deduplicated set of valid words.
pub type WordSet = HashSet<String>;

/// Reads every line of `reader` into a set of words.
///
/// Fails on the first invalid line; the words collected so far are dropped.
/// `locator` only names the source in errors.
pub fn load_word_set<R: BufRead>(locator: &str, reader: R) -> Result<WordSet> {
    let mut words = WordSet::new();
    for line in Lines::new(reader) {
        let line = line.map_err(|e| CollideError::unreachable(locator, e))?;
        if !is_valid_word(&line) {
            return Err(CollideError::InvalidContent {
                line,
                locator: locator.to_string(),
            });
        }
        words.insert(line);
    }
    tracing::debug!(locator, words = words.len(), "loaded word set");
    Ok(words)
}
