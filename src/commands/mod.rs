//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use simple::{enter_line, run_simple};

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::services::GameServices;
use anyhow::{Context, Result};

/// Draw a secret and start a fresh game
///
/// # Errors
///
/// Returns an error if the secret source fails or hands back a word of the wrong length.
pub async fn start_session(services: &GameServices, config: GameConfig) -> Result<GameSession> {
    let secret = services
        .secrets
        .fetch_secret(config.word_length)
        .await
        .context("could not pick a secret word")?;
    Ok(GameSession::new(config, secret)?)
}
