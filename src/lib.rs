//! Wordle Versus
//!
//! A human, a language-model agent and a rule-based bot each guess the same
//! hidden five-letter word, receiving feedback only for their own guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_versus::core::{Feedback, Word};
//! use wordle_versus::solver::CandidateFilter;
//!
//! let answers: Vec<Word> = ["crane", "crate", "trace"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let guess = Word::new("crane").unwrap();
//! let feedback = Feedback::score(&guess, &answers[1]);
//!
//! let mut filter = CandidateFilter::new(&answers);
//! filter.narrow(&guess, &feedback);
//! assert_eq!(filter.candidates(), &answers[1..2]);
//! ```

// Core domain types
pub mod core;

// Candidate filtering and the bot policy
pub mod solver;

// Word lists
pub mod wordlists;

// External language-model guesser
pub mod guesser;

// Game session and lanes
pub mod game;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use config::GameConfig;
pub use error::GameError;
