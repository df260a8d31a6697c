//! Guess evaluation against the secret word
//!
//! A `Feedback` holds one [`Classification`] per letter of a guess. It renders as a
//! text pattern (`GY-GY`) or as emoji (`🟩🟨⬜🟩🟨`) and parses back from either.

use super::{Classification, Word};
use crate::error::GameError;
use std::fmt;

/// Per-position classification of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// Wrap an explicit classification sequence
    #[must_use]
    pub const fn new(classifications: Vec<Classification>) -> Self {
        Self(classifications)
    }

    /// Evaluate `guess` against `secret` using Wordle's duplicate-letter rule
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the secret's letter pool
    /// 2. Second pass: mark each remaining position Misplaced while the pool still holds
    ///    that letter, otherwise Absent
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let secret = Word::new("sissy").unwrap();
    /// let guess = Word::new("assay").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// // a(absent) s(misplaced) s(correct) a(absent) y(correct)
    /// assert_eq!(feedback.to_string(), "-YG-G");
    /// ```
    pub fn evaluate(secret: &Word, guess: &Word) -> Result<Self, GameError> {
        if secret.len() != guess.len() {
            return Err(GameError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let secret_bytes = secret.as_bytes();
        let guess_bytes = guess.as_bytes();
        let mut result = vec![Classification::Absent; guess_bytes.len()];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_bytes.iter().zip(secret_bytes).enumerate() {
            if g == s {
                result[i] = Classification::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position, drawn from what exact matches left over
        for (i, &g) in guess_bytes.iter().enumerate() {
            if result[i] == Classification::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Classification::Misplaced;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (every letter Correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Classification::Correct)
    }

    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(Classification::Misplaced)
    }

    fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let p1 = Feedback::from_str("GY-GY").unwrap();
    /// let p2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(Classification::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback pattern: {s}"))
    }
}
