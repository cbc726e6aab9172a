//! Word list loading utilities
//!
//! Lists are line-delimited. Lines are trimmed, blank lines skipped, and
//! entries normalized to uppercase. Order is preserved.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_versus::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a line-delimited word list
///
/// # Examples
/// ```
/// use wordle_versus::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n  slate \n\nirate\n");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} malformed word list entries");
    }
    words
}

/// Convert a string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
