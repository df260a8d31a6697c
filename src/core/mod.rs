//! Core domain types for the game
//!
//! Pure, deterministic building blocks: words, per-letter classifications, guess
//! evaluation and the keyboard precedence map. Nothing here performs I/O.

mod classification;
mod feedback;
mod keyboard;
mod word;

pub use classification::Classification;
pub use feedback::Feedback;
pub use keyboard::LetterPrecedenceMap;
pub use word::{Word, WordError};
