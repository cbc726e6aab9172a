//! Per-letter knowledge accumulated from a guess history

use super::{FeedbackCode, GuessRecord};
use rustc_hash::FxHashMap;

/// Best-known feedback for every letter guessed so far
///
/// A letter seen as green stays green; yellow beats gray.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, FeedbackCode>,
}

impl KeyboardState {
    /// Keyboard rows in QWERTY order
    pub const ROWS: [&'static str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut letters: FxHashMap<u8, FeedbackCode> = FxHashMap::default();
        for record in history {
            for (&letter, &code) in record.word().chars().iter().zip(record.feedback().codes()) {
                letters
                    .entry(letter)
                    .and_modify(|known| *known = (*known).max(code))
                    .or_insert(code);
            }
        }
        Self { letters }
    }

    /// Feedback for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<FeedbackCode> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }
}
