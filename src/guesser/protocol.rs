//! Request and reply wire format

use super::GuesserError;
use crate::core::{Feedback, GuessRecord, Word};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write;

/// What the guesser is told: one lane's guesses and their feedback
///
/// `history` and `feedback` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuesserRequest {
    pub history: Vec<String>,
    pub feedback: Vec<Feedback>,
}

impl GuesserRequest {
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        Self {
            history: history.iter().map(|r| r.word().text().to_string()).collect(),
            feedback: history.iter().map(|r| *r.feedback()).collect(),
        }
    }

    /// Instructions for a language model, with the game state embedded
    #[must_use]
    pub fn prompt(&self) -> String {
        let history = serde_json::to_string(&self.history).unwrap_or_default();
        let feedback = serde_json::to_string(&self.feedback).unwrap_or_default();

        let mut prompt = String::new();
        prompt.push_str(
            "You are an expert Wordle player. Find the hidden 5-letter word in as few guesses as possible.\n\n",
        );
        prompt.push_str("The game state has two parallel arrays:\n");
        prompt.push_str("- history: your previous guesses, e.g. [\"SLATE\", \"CRONY\"]\n");
        prompt.push_str(
            "- feedback: one array per guess, one code per letter: 'g' = right letter, right spot; \
             'y' = in the word, wrong spot; 'b' = not in the word\n\n",
        );
        prompt.push_str(
            "Never repeat a previous guess. Only guess valid 5-letter words from the Wordle dictionary, \
             and use all of the feedback.\n\n",
        );
        let _ = writeln!(prompt, "history: {history}");
        let _ = writeln!(prompt, "feedback: {feedback}\n");
        prompt.push_str(
            "Reply with this JSON object and nothing else:\n\
             {\"guess\": \"[GUESS]\", \"reason\": \"[why, 20 words or fewer]\"}\n",
        );
        prompt
    }
}

/// A successful guesser reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuesserReply {
    pub guess: String,
    #[serde(default)]
    pub reason: String,
}

impl GuesserReply {
    #[must_use]
    pub fn new(guess: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            reason: reason.into(),
        }
    }

    /// The guess as an uppercase word
    ///
    /// # Errors
    ///
    /// Returns `GuesserError::InvalidGuess` if the guess is not five ASCII letters.
    pub fn word(&self) -> Result<Word, GuesserError> {
        Word::new(self.guess.trim()).map_err(|source| GuesserError::InvalidGuess {
            guess: self.guess.clone(),
            source,
        })
    }
}

/// Whether an `error` field marks the reply as failed
///
/// Anything but `null`, `false`, `0` or an empty string counts.
fn is_error_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Slice from the first `{` to the last `}`
///
/// Language models often wrap their JSON in prose or code fences.
///
/// # Examples
/// ```
/// use wordle_versus::guesser::extract_json_object;
///
/// let text = "Sure! ```json\n{\"guess\": \"CRANE\"}\n```";
/// assert_eq!(extract_json_object(text), Some("{\"guess\": \"CRANE\"}"));
/// ```
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Decode a guesser reply
///
/// A reply carrying an `error` field is a failure even when it also holds a
/// guess.
///
/// # Errors
///
/// - `GuesserError::Reported` when the object has a non-empty `error` field
/// - `GuesserError::Malformed` when the text holds no JSON object
/// - `GuesserError::Json` when the object is invalid or has no `guess`
pub fn parse_reply(text: &str) -> Result<GuesserReply, GuesserError> {
    let object = extract_json_object(text)
        .ok_or_else(|| GuesserError::Malformed(format!("no JSON object in {text:?}")))?;
    let mut value: Value = serde_json::from_str(object)?;

    if let Some(error) = value.get("error").filter(|e| is_error_value(e)) {
        let error = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        let raw = value.get_mut("raw").map(Value::take).unwrap_or_default();
        return Err(GuesserError::Reported { error, raw });
    }

    Ok(serde_json::from_value(value)?)
}
