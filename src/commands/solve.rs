//! Word solving command
//!
//! Runs the bot lane alone against a chosen secret and records every step.

use crate::config::GameConfig;
use crate::core::{Feedback, GuessRecord, Word};
use crate::error::GameError;
use crate::solver::CandidateFilter;

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub rationale: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play the bot against `target` until it solves or runs out of guesses
///
/// # Errors
///
/// Returns `GameError::NoCandidatesRemaining` if the bot runs out of
/// candidates, which only happens when `target` is not an answer word.
pub fn solve_word(
    target: &Word,
    answer_words: &[Word],
    config: &GameConfig,
) -> Result<SolveResult, GameError> {
    let mut filter = CandidateFilter::new(answer_words);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = filter.count();
        let guess = filter.next_guess(config)?;

        let record = GuessRecord::scored(guess.word, target);
        let solved = record.is_solved();
        let (word, feedback) = (record.word().clone(), *record.feedback());
        filter.record(record);

        guesses.push(GuessStep {
            word,
            feedback,
            rationale: guess.rationale,
            candidates_before,
            candidates_after: filter.count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.clone(),
    })
}
