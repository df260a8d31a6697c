//! Word-list backed dictionary

use super::{Dictionary, ServiceError};
use crate::core::Word;
use crate::wordlists::{ANSWERS, DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use tracing::debug;

/// Set of accepted guesses
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build from arbitrary words; entries that are not valid words are skipped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// Dictionary built from the embedded lists
    ///
    /// Every answer is also accepted as a guess.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DICTIONARY.iter().chain(ANSWERS))
    }

    /// Add every word from a file; returns how many were new
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let before = self.words.len();
        for word in loader::load_from_file(path)? {
            self.add_word(&word);
        }
        Ok(self.words.len() - before)
    }

    /// Returns `true` if the word was not already present
    pub fn add_word(&mut self, word: &Word) -> bool {
        self.words.insert(word.text().to_string())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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

#[async_trait::async_trait]
impl Dictionary for WordListDictionary {
    async fn check(&self, word: &str) -> Result<bool, ServiceError> {
        let found = self.contains(&word.to_ascii_lowercase());
        debug!(word, found, "dictionary check");
        Ok(found)
    }
}
