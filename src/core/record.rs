//! Immutable guess history entries

use super::{Feedback, Word};

/// A guess and the feedback it earned
///
/// Fields are private so a record cannot be edited once it is in a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Score `word` against `secret` and wrap the result
    #[must_use]
    pub fn scored(word: Word, secret: &Word) -> Self {
        let feedback = Feedback::score(&word, secret);
        Self { word, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}
