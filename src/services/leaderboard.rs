//! In-process leaderboard
//!
//! Entries live for the lifetime of the process only.

use super::{Leaderboard, ServiceError};
use crate::game::{GameSummary, format_elapsed};
use std::sync::Mutex;
use std::time::Duration;

/// One winning game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub elapsed_millis: u64,
    /// Timer text as shown during play, `HH:MM:SS.mmm`
    pub elapsed_display: String,
    pub guesses: usize,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(elapsed: Duration, guesses: usize) -> Self {
        Self {
            elapsed_millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            elapsed_display: format_elapsed(elapsed),
            guesses,
        }
    }

    #[must_use]
    pub fn from_summary(summary: &GameSummary) -> Self {
        Self::new(summary.elapsed, summary.guesses)
    }
}

/// Which entries to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardFilter {
    /// Only games won in at most this many guesses
    pub max_guesses: Option<usize>,
    /// Return at most this many entries
    pub limit: Option<usize>,
}

/// Leaderboard ranked by time, then by guesses
#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<LeaderboardEntry>>, ServiceError> {
        self.entries
            .lock()
            .map_err(|_| ServiceError::Unavailable("leaderboard poisoned".to_string()))
    }

    fn insert(&self, entry: LeaderboardEntry) -> Result<(), ServiceError> {
        let mut entries = self.lock()?;
        let key = (entry.elapsed_millis, entry.guesses);
        let at = entries.partition_point(|e| (e.elapsed_millis, e.guesses) <= key);
        entries.insert(at, entry);
        Ok(())
    }

    fn select(&self, filter: LeaderboardFilter) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        let entries = self.lock()?;
        Ok(entries
            .iter()
            .filter(|e| filter.max_guesses.is_none_or(|max| e.guesses <= max))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl Leaderboard for InMemoryLeaderboard {
    async fn submit(&self, entry: LeaderboardEntry) -> Result<(), ServiceError> {
        self.insert(entry)
    }

    async fn entries(
        &self,
        filter: LeaderboardFilter,
    ) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        self.select(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn entry(millis: u64, guesses: usize) -> LeaderboardEntry {
        LeaderboardEntry::new(Duration::from_millis(millis), guesses)
    }

    #[test]
    fn entry_from_summary_formats_time() {
        let summary = GameSummary {
            status: GameStatus::Won,
            guesses: 4,
            elapsed: Duration::from_millis(61_250),
        };
        let entry = LeaderboardEntry::from_summary(&summary);
        assert_eq!(entry.elapsed_millis, 61_250);
        assert_eq!(entry.elapsed_display, "00:01:01.250");
        assert_eq!(entry.guesses, 4);
    }

    #[tokio::test]
    async fn entries_ranked_by_time_then_guesses() {
        let board = InMemoryLeaderboard::new();
        board.submit(entry(9_000, 3)).await.unwrap();
        board.submit(entry(4_000, 5)).await.unwrap();
        board.submit(entry(4_000, 2)).await.unwrap();

        let ranked = board.entries(LeaderboardFilter::default()).await.unwrap();
        let keys: Vec<_> = ranked.iter().map(|e| (e.elapsed_millis, e.guesses)).collect();
        assert_eq!(keys, vec![(4_000, 2), (4_000, 5), (9_000, 3)]);
    }

    #[tokio::test]
    async fn filter_by_max_guesses_and_limit() {
        let board = InMemoryLeaderboard::new();
        for (millis, guesses) in [(1_000, 6), (2_000, 2), (3_000, 3), (4_000, 1)] {
            board.submit(entry(millis, guesses)).await.unwrap();
        }

        let filtered = board
            .entries(LeaderboardFilter {
                max_guesses: Some(3),
                limit: Some(2),
            })
            .await
            .unwrap();
        let keys: Vec<_> = filtered.iter().map(|e| (e.elapsed_millis, e.guesses)).collect();
        assert_eq!(keys, vec![(2_000, 2), (3_000, 3)]);
    }
}
