//! Notifications emitted by a game session for the view layer

use super::session::GameStatus;
use crate::core::Classification;
use std::fmt;
use std::time::Duration;

/// Feedback message for the last rejected or game-ending action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submitted before the row was full
    FillAllLetters,
    /// Submitted a word the dictionary does not accept
    NotInDictionary,
    Won,
    /// Ran out of guesses; the secret is revealed
    Lost { secret: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillAllLetters => write!(f, "Fill in all of the letters"),
            Self::NotInDictionary => write!(f, "Enter a word in the dictionary"),
            Self::Won => write!(f, "You win!"),
            Self::Lost { secret } => write!(f, "Game over. The word was \"{secret}\""),
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub guesses: usize,
    pub elapsed: Duration,
}

/// State change the view should reflect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LetterTyped {
        row: usize,
        col: usize,
        letter: char,
    },
    LetterDeleted {
        row: usize,
        col: usize,
    },
    CellClassified {
        row: usize,
        col: usize,
        letter: char,
        classification: Classification,
    },
    /// A keyboard key's best-ever highlight was upgraded
    KeyRecoloured {
        letter: char,
        classification: Classification,
    },
    StatusChanged {
        status: GameStatus,
        summary: GameSummary,
    },
    Notice(Notice),
}
