//! Word lists for the game
//!
//! Secret words and accepted guesses, embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, DICTIONARY, DICTIONARY_COUNT};
