//! Game configuration

use thiserror::Error;

/// Letters per word in a standard game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Accepted guesses before the game is lost
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Shape of a game: grid width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be between 1 and {max}, got {actual}")]
    WordLength { actual: usize, max: usize },
    #[error("max guesses must be between 1 and {max}, got {actual}")]
    MaxGuesses { actual: usize, max: usize },
}

impl GameConfig {
    const MAX_WORD_LENGTH: usize = 16;
    const MAX_GUESS_LIMIT: usize = 20;

    /// Build a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero or unreasonably large for the grid.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::GameConfig;
    ///
    /// let config = GameConfig::new(5, 6).unwrap();
    /// assert_eq!(config, GameConfig::default());
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_length == 0 || word_length > Self::MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength {
                actual: word_length,
                max: Self::MAX_WORD_LENGTH,
            });
        }
        if max_guesses == 0 || max_guesses > Self::MAX_GUESS_LIMIT {
            return Err(ConfigError::MaxGuesses {
                actual: max_guesses,
                max: Self::MAX_GUESS_LIMIT,
            });
        }
        Ok(Self {
            word_length,
            max_guesses,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert!(matches!(
            GameConfig::new(0, 6),
            Err(ConfigError::WordLength { actual: 0, .. })
        ));
        assert!(matches!(
            GameConfig::new(5, 0),
            Err(ConfigError::MaxGuesses { actual: 0, .. })
        ));
        assert!(GameConfig::new(17, 6).is_err());
        assert!(GameConfig::new(5, 21).is_err());
    }

    #[test]
    fn accepts_custom_dimensions() {
        let config = GameConfig::new(4, 8).unwrap();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.max_guesses, 8);
    }
}
