//! Candidate filtering and the rule-based bot
//!
//! The bot's policy is deliberately simple: a fixed opener, then the first
//! answer word still consistent with everything it has been told.

mod filter;

pub use filter::{BotGuess, CandidateFilter, FILTERED_RATIONALE, LAST_GUESS_RATIONALE};
