//! Port to the external language-model guesser
//!
//! The guesser is a black box: it receives a lane's guesses and feedback as
//! JSON and answers with `{"guess", "reason"}` or `{"error", "raw"}`. Only the
//! returned guess string is used.

mod command;
mod protocol;
mod scripted;

pub use command::{CommandGuesser, PROMPT_ENV};
pub use protocol::{GuesserReply, GuesserRequest, extract_json_object, parse_reply};
pub use scripted::ScriptedGuesser;

use crate::core::WordError;
use thiserror::Error;

/// A source of guesses for the language-model lane
pub trait Guesser {
    /// Ask for the next guess given everything the lane has seen
    ///
    /// # Errors
    ///
    /// Returns a `GuesserError` when the collaborator cannot be reached or its
    /// reply is an error payload or cannot be decoded.
    fn guess(&mut self, request: &GuesserRequest) -> Result<GuesserReply, GuesserError>;
}

impl<G: Guesser + ?Sized> Guesser for Box<G> {
    fn guess(&mut self, request: &GuesserRequest) -> Result<GuesserReply, GuesserError> {
        (**self).guess(request)
    }
}

/// Errors from the external guesser
#[derive(Debug, Error)]
pub enum GuesserError {
    /// The collaborator answered with an error payload
    #[error("guesser reported an error: {error}")]
    Reported {
        error: String,
        raw: serde_json::Value,
    },

    /// No JSON object could be found in the reply
    #[error("malformed guesser reply: {0}")]
    Malformed(String),

    /// The reply was JSON but not of the expected shape
    #[error("could not decode guesser reply: {0}")]
    Json(#[from] serde_json::Error),

    /// The returned guess is not a five-letter word
    #[error("guesser returned an invalid word {guess:?}: {source}")]
    InvalidGuess {
        guess: String,
        #[source]
        source: WordError,
    },

    #[error("could not run guesser: {0}")]
    Io(#[from] std::io::Error),

    #[error("guesser exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    /// A scripted guesser ran out of queued replies
    #[error("no scripted replies left")]
    Exhausted,
}
