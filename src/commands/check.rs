//! Evaluate a single guess against a given secret

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Compare `guess` against `secret` letter by letter
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let feedback = Feedback::evaluate(&secret, &guess)?;

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
