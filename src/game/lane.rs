//! One independent guessing participant

use crate::core::{GuessRecord, Word};
use crate::solver::CandidateFilter;
use std::fmt;

/// Who is guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Human,
    Llm,
    Bot,
}

impl LaneKind {
    /// Every lane, in the order they play each round
    pub const ALL: [Self; 3] = [Self::Human, Self::Llm, Self::Bot];

    /// Board heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Llm => "LLM",
            Self::Bot => "Bot",
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Llm => "LLM",
            Self::Bot => "bot",
        })
    }
}

/// A lane's history, candidate set and the reasons given for each guess
#[derive(Debug, Clone)]
pub struct Lane {
    kind: LaneKind,
    filter: CandidateFilter,
    rationales: Vec<Option<String>>,
}

impl Lane {
    #[must_use]
    pub fn new(kind: LaneKind, answer_words: &[Word]) -> Self {
        Self {
            kind,
            filter: CandidateFilter::new(answer_words),
            rationales: Vec::new(),
        }
    }

    pub fn reset(&mut self, answer_words: &[Word]) {
        self.filter.reset(answer_words);
        self.rationales.clear();
    }

    #[must_use]
    pub const fn kind(&self) -> LaneKind {
        self.kind
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.filter.history()
    }

    /// Reason given for each guess, parallel to `history`
    #[must_use]
    pub fn rationales(&self) -> &[Option<String>] {
        &self.rationales
    }

    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.filter.is_solved()
    }

    /// Solved, or out of guesses
    #[must_use]
    pub fn is_finished(&self, max_guesses: usize) -> bool {
        self.is_solved() || self.filter.turns_taken() >= max_guesses
    }

    pub(crate) fn commit(&mut self, record: GuessRecord, rationale: Option<String>) {
        self.filter.record(record);
        self.rationales.push(rationale);
    }
}
