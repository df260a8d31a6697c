//! Secret word sources

use super::{SecretSource, ServiceError};
use crate::core::{Word, WordError};
use crate::wordlists::{ANSWERS, loader::words_from_slice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::Mutex;
use tracing::debug;

/// Draws a uniformly random answer of the requested length
#[derive(Debug)]
pub struct RandomSecret {
    answers: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl RandomSecret {
    #[must_use]
    pub fn new(answers: Vec<Word>) -> Self {
        Self {
            answers,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible draws for a fixed seed
    #[must_use]
    pub fn with_seed(answers: Vec<Word>, seed: u64) -> Self {
        Self {
            answers,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    fn draw(&self, word_length: usize) -> Result<Word, ServiceError> {
        let candidates: Vec<&Word> = self
            .answers
            .iter()
            .filter(|w| w.len() == word_length)
            .collect();

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ServiceError::Unavailable("secret generator poisoned".to_string()))?;

        candidates
            .choose(&mut *rng)
            .map(|&w| w.clone())
            .ok_or(ServiceError::NoSecretAvailable(word_length))
    }
}

#[async_trait::async_trait]
impl SecretSource for RandomSecret {
    async fn fetch_secret(&self, word_length: usize) -> Result<Word, ServiceError> {
        let secret = self.draw(word_length)?;
        debug!(word_length, "drew secret word");
        Ok(secret)
    }
}

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedSecret {
    word: Word,
}

impl FixedSecret {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

#[async_trait::async_trait]
impl SecretSource for FixedSecret {
    async fn fetch_secret(&self, word_length: usize) -> Result<Word, ServiceError> {
        if self.word.len() != word_length {
            return Err(WordError::InvalidLength {
                expected: word_length,
                actual: self.word.len(),
            }
            .into());
        }
        Ok(self.word.clone())
    }
}
