//! Errors surfaced by a game turn
//!
//! Every variant is local to the turn that produced it: committed history is
//! never touched when one of these is returned.

use crate::game::LaneKind;
use crate::guesser::GuesserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Guess length is not 5
    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidGuessLength(usize),

    /// Guess is not in the allowed word list
    #[error("Not a valid word: {0}")]
    NotInAllowedSet(String),

    /// The external guesser returned an error payload or an unusable reply
    #[error("External guesser failed: {0}")]
    ExternalGuesserFailure(#[from] GuesserError),

    /// Recorded feedback is inconsistent with every answer word
    #[error("No candidates remain; recorded feedback contradicts the answer list")]
    NoCandidatesRemaining,

    /// A secret cannot be drawn from an empty answer list
    #[error("The answer list is empty")]
    EmptyAnswerSet,

    /// The lane has already solved or used its whole guess budget
    #[error("The {0} lane has no guesses left")]
    OutOfGuesses(LaneKind),

    /// The game has ended; start a new one to keep playing
    #[error("The game is over")]
    GameOver,
}
