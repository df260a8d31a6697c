//! Engine contract errors
//!
//! These indicate a caller bypassed the public contract of the engine. They are not
//! meant to be recovered from inside a game; user-facing rejections live in
//! [`crate::game::SubmitError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Secret and guess lengths differ
    #[error("length mismatch: secret has {secret} letters, guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },

    /// A cursor mutation was attempted outside the guarded edit paths
    #[error("cursor out of range: row {row}, col {col}")]
    CursorOutOfRange { row: usize, col: usize },

    /// The secret does not fit the configured grid width
    #[error("secret has {actual} letters, the game expects {expected}")]
    SecretLength { expected: usize, actual: usize },

    /// A grid row holds letters that do not form a valid word
    #[error("row {row} does not hold a valid word")]
    InvalidRow { row: usize },

    /// A completed check was handed back for a row other than the one being edited
    #[error("stale submission for row {submitted}, current row is {current}")]
    StaleSubmission { submitted: usize, current: usize },
}
