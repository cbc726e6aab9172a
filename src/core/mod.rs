//! Core domain types for Wordle
//!
//! Words, the feedback scorer and guess records. Everything here is pure and
//! free of I/O.

mod feedback;
mod keyboard;
mod record;
mod word;

pub use feedback::{Feedback, FeedbackCode};
pub use keyboard::KeyboardState;
pub use record::GuessRecord;
pub use word::{WORD_LENGTH, Word, WordError};
