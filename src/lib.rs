//! Wordle Game
//!
//! A Wordle guess-evaluation and game-state engine with a terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let secret = Word::new("sissy").unwrap();
//! let guess = Word::new("assay").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.to_string(), "-YG-G");
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Engine contract errors
pub mod error;

// Input routing and the game state machine
pub mod game;

// Dictionary, secret word and leaderboard collaborators
pub mod services;

// Word lists
pub mod wordlists;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
