//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, GuessRecord, KeyboardState};
use colored::{ColoredString, Colorize};

/// Render one tile, optionally hiding the letter
fn tile(letter: char, code: Option<FeedbackCode>) -> ColoredString {
    let text = format!(" {letter} ");
    match code {
        Some(FeedbackCode::Correct) => text.black().on_green().bold(),
        Some(FeedbackCode::Present) => text.black().on_yellow().bold(),
        Some(FeedbackCode::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Format a guess as colored tiles
///
/// With `reveal` off the letters are blanked and only the colors remain.
#[must_use]
pub fn record_tiles(record: &GuessRecord, reveal: bool) -> String {
    record
        .word()
        .chars()
        .iter()
        .zip(record.feedback().codes())
        .map(|(&letter, &code)| {
            let shown = if reveal { char::from(letter) } else { ' ' };
            tile(shown, Some(code)).to_string()
        })
        .collect()
}

/// Format the keyboard, one line per row, colored by what is known
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KeyboardState::ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(char::from(letter), keyboard.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn record(guess: &str, secret: &str) -> GuessRecord {
        GuessRecord::scored(Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn revealed_tiles_show_letters() {
        colored::control::set_override(false);
        assert_eq!(record_tiles(&record("crane", "crate"), true), " C  R  A  N  E ");
    }

    #[test]
    fn hidden_tiles_hide_letters() {
        colored::control::set_override(false);
        let tiles = record_tiles(&record("crane", "crate"), false);
        assert!(!tiles.contains('C'));
        assert_eq!(tiles.len(), 15);
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardState::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(" Q "));
        assert!(lines[2].starts_with("    "));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
