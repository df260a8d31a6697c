//! Game word representation
//!
//! A `Word` is a validated, lowercase ASCII word. Secrets and submitted guesses are both words.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase alphabetic word
///
/// Case is normalized on construction, so two words built from "CRANE" and "crane" compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string of any non-zero length
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Squid").unwrap();
    /// assert_eq!(word.text(), "squid");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from [`Word::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, WordError};
    ///
    /// assert!(Word::with_length("crane", 5).is_ok());
    /// assert_eq!(
    ///     Word::with_length("cranes", 5),
    ///     Err(WordError::InvalidLength { expected: 5, actual: 6 })
    /// );
    /// ```
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter in the word
    ///
    /// Seeds the remaining-letter pool used by feedback evaluation.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
