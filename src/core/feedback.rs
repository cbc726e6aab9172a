//! Wordle feedback scoring and representation
//!
//! Feedback is an ordered sequence of five codes, one per guess position:
//! - `Correct` (green): letter matches the secret at that position
//! - `Present` (yellow): letter occurs elsewhere in the secret
//! - `Absent` (gray): letter does not occur, or all its occurrences are used up

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered by information priority, so `max` merges two observations of the
/// same letter into the stronger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeedbackCode {
    #[serde(rename = "b")]
    Absent,
    #[serde(rename = "y")]
    Present,
    #[serde(rename = "g")]
    Correct,
}

impl FeedbackCode {
    /// Wire character (`g`, `y` or `b`)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`B`/`b`/⬜/⬛.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([FeedbackCode; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([FeedbackCode::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(codes: [FeedbackCode; WORD_LENGTH]) -> Self {
        Self(codes)
    }

    /// Score `guess` against `secret`
    ///
    /// Total and pure. Repeated letters in the guess only earn as many
    /// `Correct`/`Present` marks as the secret has occurrences of that letter.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the secret's letter pool
    /// 2. Second pass, left to right: mark `Present` while the pool still holds
    ///    the letter, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_versus::core::{Feedback, FeedbackCode::*, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let secret = Word::new("erase").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::score(&guess, &secret).codes(),
    ///     &[Present, Absent, Present, Present, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut codes = [FeedbackCode::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set codes[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                codes[i] = FeedbackCode::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if codes[i] == FeedbackCode::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                codes[i] = FeedbackCode::Present;
                *count -= 1;
            }
        }

        Self(codes)
    }

    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[FeedbackCode; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions carrying `code`
    #[must_use]
    pub fn count(&self, code: FeedbackCode) -> usize {
        self.0.iter().filter(|&&c| c == code).count()
    }

    /// Parse feedback from a string like "GY-GY", "gybgy" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_versus::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut codes = [FeedbackCode::Absent; WORD_LENGTH];
        for (slot, ch) in codes.iter_mut().zip(chars) {
            *slot = FeedbackCode::from_char(ch)?;
        }
        Some(Self(codes))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|code| code.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
