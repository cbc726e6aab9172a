//! Guesser that replays canned replies

use super::{Guesser, GuesserError, GuesserReply, GuesserRequest};
use std::collections::VecDeque;

/// Replays queued results in order and remembers every request it saw
#[derive(Debug, Default)]
pub struct ScriptedGuesser {
    replies: VecDeque<Result<GuesserReply, GuesserError>>,
    requests: Vec<GuesserRequest>,
}

impl ScriptedGuesser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    #[must_use]
    pub fn with_reply(mut self, guess: &str, reason: &str) -> Self {
        self.replies.push_back(Ok(GuesserReply::new(guess, reason)));
        self
    }

    /// Queue a failure
    #[must_use]
    pub fn with_failure(mut self, error: GuesserError) -> Self {
        self.replies.push_back(Err(error));
        self
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> &[GuesserRequest] {
        &self.requests
    }
}

impl Guesser for ScriptedGuesser {
    fn guess(&mut self, request: &GuesserRequest) -> Result<GuesserReply, GuesserError> {
        self.requests.push(request.clone());
        self.replies.pop_front().unwrap_or(Err(GuesserError::Exhausted))
    }
}
