//! Wordle word representation
//!
//! A Word stores a 5-letter uppercase word along with its raw bytes for scoring.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every Wordle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is not trimmed; callers that read raw lines
    /// should trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_versus::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        // Count characters, not bytes, so multi-byte input reports a sensible length
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// This is the remaining-count multiset consumed during scoring.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_counts_characters_not_bytes() {
        assert!(matches!(Word::new("CRAÑE"), Err(WordError::NonAscii)));
        assert!(matches!(
            Word::new("ÑÑÑ"),
            Err(WordError::InvalidLength(3))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'A'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'c'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
