//! Intersection counting between a reference set and a candidate stream.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::{CollideError, Result};

use super::alphabet::is_valid_word;
use super::lines::Lines;
use super::load::WordSet;

/// Counts distinct words of `reader` that are also in `reference`.
///
/// Repeated candidate words are counted once. Any invalid line fails the
/// whole count; there is no partial result.
pub fn count_shared<R: BufRead>(reference: &WordSet, locator: &str, reader: R) -> Result<usize> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut shared = 0usize;
    for line in Lines::new(reader) {
        let line = line.map_err(|e| CollideError::unreachable(locator, e))?;
        if !is_valid_word(&line) {
            return Err(CollideError::InvalidContent {
                line,
                locator: locator.to_string(),
            });
        }
        if seen.contains(&line) {
            continue;
        }
        if reference.contains(&line) {
            shared += 1;
        }
        seen.insert(line);
    }
    Ok(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reference(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn count(reference: &WordSet, body: &str) -> Result<usize> {
        count_shared(reference, "mem://file1.txt", Cursor::new(body.as_bytes().to_vec()))
    }

    #[test]
    fn duplicates_counted_once() {
        let r = reference(&["cat", "dog", "bird"]);
        assert_eq!(count(&r, "cat\ncat\nfish\n").unwrap(), 1);
    }

    #[test]
    fn absent_words_never_count() {
        let r = reference(&["cat", "dog"]);
        assert_eq!(count(&r, "fish\neel\ncod\n").unwrap(), 0);
        assert_eq!(count(&r, "").unwrap(), 0);
    }

    #[test]
    fn bounded_by_smaller_side() {
        let r = reference(&["cat", "dog", "bird"]);
        let n = count(&r, "bird\ndog\ncat\ndog\nbird\ncat\nyak\n").unwrap();
        assert_eq!(n, 3);

        let r = reference(&["cat", "dog", "bird", "yak", "eel"]);
        let n = count(&r, "yak\nyak\neel\n").unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn invalid_line_is_total_failure() {
        let r = reference(&["cat"]);
        match count(&r, "cat\ncat3\n") {
            Err(CollideError::InvalidContent { line, locator }) => {
                assert_eq!(line, "cat3");
                assert_eq!(locator, "mem://file1.txt");
            }
            other => panic!("expected InvalidContent, got {:?}", other),
        }
    }

    #[test]
    fn reference_is_not_mutated() {
        let r = reference(&["cat"]);
        count(&r, "dog\ncat\n").unwrap();
        assert_eq!(r.len(), 1);
    }
}
