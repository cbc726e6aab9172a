//! The pair of word lists a game is played with

use super::AllowedSet;
use crate::core::Word;
use log::debug;

/// Allowed guesses plus the ordered answer list
///
/// The allowed set always contains every answer.
#[derive(Debug, Clone)]
pub struct Dictionary {
    allowed: AllowedSet,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, folding the answers into the allowed set
    #[must_use]
    pub fn new(allowed_words: &[Word], answer_words: Vec<Word>) -> Self {
        let mut allowed = AllowedSet::new(allowed_words);
        let before = allowed.len();
        allowed.extend(&answer_words);

        if allowed.len() > before {
            debug!(
                "added {} answer words missing from the allowed list",
                allowed.len() - before
            );
        }

        Self {
            allowed,
            answers: answer_words,
        }
    }

    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> &AllowedSet {
        &self.allowed
    }

    /// Answer words in list order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.is_allowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn answers_are_always_allowed() {
        let allowed = words_from_slice(&["slate", "crane"]);
        let answers = words_from_slice(&["crate", "crane"]);
        let dictionary = Dictionary::new(&allowed, answers);

        assert!(dictionary.is_allowed("crate"));
        assert!(dictionary.is_allowed("slate"));
        assert_eq!(dictionary.allowed().len(), 3);
    }

    #[test]
    fn answer_order_is_preserved() {
        let answers = words_from_slice(&["trace", "crate", "crane"]);
        let dictionary = Dictionary::new(&[], answers.clone());
        assert_eq!(dictionary.answers(), answers.as_slice());
    }
}
