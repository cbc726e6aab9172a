//! Dictionary membership check for guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Every word accepted as a guess
#[derive(Debug, Clone, Default)]
pub struct AllowedSet {
    words: FxHashSet<String>,
}

impl AllowedSet {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a Word>) {
        self.words
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    /// Case-insensitive membership test
    ///
    /// # Examples
    /// ```
    /// use wordle_versus::core::Word;
    /// use wordle_versus::wordlists::AllowedSet;
    ///
    /// let allowed = AllowedSet::new(&[Word::new("crane").unwrap()]);
    /// assert!(allowed.is_allowed("Crane"));
    /// assert!(!allowed.is_allowed("ZZZZZ"));
    /// ```
    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_uppercase().as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
