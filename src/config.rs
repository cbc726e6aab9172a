//! Game configuration

use crate::core::Word;

/// Default guess budget per lane
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Default opening word for the bot lane
pub const DEFAULT_OPENER: &str = "SLATE";

/// Rationale reported alongside the opening word
pub const DEFAULT_OPENER_RATIONALE: &str = "Fixed opener: common letters in common positions";

/// Settings shared by every lane of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses each lane may make
    pub max_guesses: usize,
    /// Bot's first guess
    pub opener: Word,
    /// Reason given for the bot's first guess
    pub opener_rationale: String,
}

impl GameConfig {
    /// Replace the opener, keeping the remaining settings
    #[must_use]
    pub fn with_opener(mut self, opener: Word) -> Self {
        self.opener = opener;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Whether a lane that has made `guesses_made` guesses is on its final one
    #[must_use]
    pub const fn is_last_turn(&self, guesses_made: usize) -> bool {
        guesses_made + 1 == self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            opener: Word::new(DEFAULT_OPENER).expect("default opener is a valid word"),
            opener_rationale: DEFAULT_OPENER_RATIONALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.opener.text(), "SLATE");
        assert!(!config.opener_rationale.is_empty());
    }

    #[test]
    fn last_turn_is_sixth_guess() {
        let config = GameConfig::default();
        assert!(!config.is_last_turn(0));
        assert!(!config.is_last_turn(4));
        assert!(config.is_last_turn(5));
    }

    #[test]
    fn builders_override_fields() {
        let config = GameConfig::default()
            .with_opener(Word::new("crane").unwrap())
            .with_max_guesses(4);
        assert_eq!(config.opener.text(), "CRANE");
        assert!(config.is_last_turn(3));
    }
}
