//! Elapsed game time

use std::time::{Duration, Instant};

/// Wall-clock timer started with the game and stopped when it ends
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
    stopped: Option<Duration>,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Time since start, frozen once stopped
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }

    /// Stop the clock and return the final time; later calls return the same value
    pub fn stop(&mut self) -> Duration {
        *self.stopped.get_or_insert_with(|| self.started.elapsed())
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Format a duration as `HH:MM:SS.mmm`
///
/// Hours wrap at 24.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordle_game::game::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(83_456)), "00:01:23.456");
/// ```
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let millis = total_ms % 1000;
    let seconds = (total_ms / 1000) % 60;
    let minutes = (total_ms / 60_000) % 60;
    let hours = (total_ms / 3_600_000) % 24;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
