//! Collaborators the game engine talks to
//!
//! The engine only depends on the async traits defined here. The submodules provide
//! in-process implementations backed by the embedded word lists.

use crate::core::{Word, WordError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub mod dictionary;
pub mod leaderboard;
pub mod secret;

pub use dictionary::WordListDictionary;
pub use leaderboard::{InMemoryLeaderboard, LeaderboardEntry, LeaderboardFilter};
pub use secret::{FixedSecret, RandomSecret};

/// Failure of a collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("no secret words of length {0} are available")]
    NoSecretAvailable(usize),
    #[error("invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Decides whether a word is an accepted guess
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    async fn check(&self, word: &str) -> Result<bool, ServiceError>;
}

/// Supplies the secret word at the start of a game
#[async_trait::async_trait]
pub trait SecretSource: Send + Sync {
    async fn fetch_secret(&self, word_length: usize) -> Result<Word, ServiceError>;
}

/// Records winning games
#[async_trait::async_trait]
pub trait Leaderboard: Send + Sync {
    async fn submit(&self, entry: LeaderboardEntry) -> Result<(), ServiceError>;

    async fn entries(&self, filter: LeaderboardFilter)
    -> Result<Vec<LeaderboardEntry>, ServiceError>;
}

/// The collaborators one game needs, shared between tasks
#[derive(Clone)]
pub struct GameServices {
    pub dictionary: Arc<dyn Dictionary>,
    pub secrets: Arc<dyn SecretSource>,
    pub leaderboard: Arc<dyn Leaderboard>,
}

impl GameServices {
    #[must_use]
    pub fn new(
        dictionary: Arc<dyn Dictionary>,
        secrets: Arc<dyn SecretSource>,
        leaderboard: Arc<dyn Leaderboard>,
    ) -> Self {
        Self {
            dictionary,
            secrets,
            leaderboard,
        }
    }

    /// Embedded word lists, random secrets and an empty in-memory leaderboard
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            Arc::new(WordListDictionary::embedded()),
            Arc::new(RandomSecret::embedded()),
            Arc::new(InMemoryLeaderboard::new()),
        )
    }
}

/// Send a winning entry without waiting for the leaderboard
///
/// Failures are logged and otherwise dropped.
pub fn report_win(
    leaderboard: Arc<dyn Leaderboard>,
    entry: LeaderboardEntry,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        debug!(guesses = entry.guesses, time = %entry.elapsed_display, "submitting leaderboard entry");
        if let Err(err) = leaderboard.submit(entry).await {
            warn!(error = %err, "leaderboard submission failed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn report_win_reaches_leaderboard() {
        let board = Arc::new(InMemoryLeaderboard::new());
        let entry = LeaderboardEntry::new(Duration::from_millis(1500), 3);

        report_win(board.clone(), entry.clone()).await.unwrap();

        let entries = board.entries(LeaderboardFilter::default()).await.unwrap();
        assert_eq!(entries, vec![entry]);
    }
}
