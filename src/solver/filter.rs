//! Candidate filtering and the bot's guess policy

use crate::config::GameConfig;
use crate::core::{Feedback, GuessRecord, Word};
use crate::error::GameError;

/// Rationale for every bot guess after the opener
pub const FILTERED_RATIONALE: &str = "first valid possible answer after filtering";

/// Rationale for the bot's final allowed guess
pub const LAST_GUESS_RATIONALE: &str = "Last guess!";

/// A guess chosen by the bot, with the reason it gives for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotGuess {
    pub word: Word,
    pub rationale: String,
}

/// Answer words still consistent with one lane's feedback
///
/// Owns the lane's guess history. Candidates keep the order of the answer
/// list they were built from, which makes the bot's choice reproducible.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    candidates: Vec<Word>,
    history: Vec<GuessRecord>,
}

impl CandidateFilter {
    /// Create a filter over the full answer list
    #[must_use]
    pub fn new(answer_words: &[Word]) -> Self {
        let mut filter = Self::default();
        filter.reset(answer_words);
        filter
    }

    /// Restore the full answer list and forget all history
    pub fn reset(&mut self, answer_words: &[Word]) {
        self.candidates.clear();
        self.candidates.extend_from_slice(answer_words);
        self.history.clear();
    }

    /// Keep only candidates that would have produced `feedback` for `guess`
    ///
    /// Never fails: feedback no answer could produce leaves the set empty.
    pub fn narrow(&mut self, guess: &Word, feedback: &Feedback) {
        self.candidates
            .retain(|candidate| Feedback::score(guess, candidate) == *feedback);
    }

    /// Append a record to the history and narrow by it
    pub fn record(&mut self, record: GuessRecord) {
        self.narrow(record.word(), record.feedback());
        self.history.push(record);
    }

    /// Choose the bot's next guess
    ///
    /// The first guess is the configured opener. Afterwards it is the first
    /// remaining candidate in answer-list order.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidatesRemaining` once the history has ruled
    /// out every answer word.
    pub fn next_guess(&self, config: &GameConfig) -> Result<BotGuess, GameError> {
        if self.history.is_empty() {
            return Ok(BotGuess {
                word: config.opener.clone(),
                rationale: config.opener_rationale.clone(),
            });
        }

        let word = self
            .candidates
            .first()
            .ok_or(GameError::NoCandidatesRemaining)?
            .clone();

        let rationale = if config.is_last_turn(self.history.len()) {
            LAST_GUESS_RATIONALE
        } else {
            FILTERED_RATIONALE
        };

        Ok(BotGuess {
            word,
            rationale: rationale.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses recorded so far
    #[inline]
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(GuessRecord::is_solved)
    }
}
