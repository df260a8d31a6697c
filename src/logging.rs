//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Levels:
//! - `error`: contract violations inside the engine
//! - `warn`: collaborator failures (dictionary, leaderboard)
//! - `info`: accepted guesses, game over
//! - `debug`: input handling, dictionary checks
//! - `trace`: everything else

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Where log lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogTarget {
    #[default]
    Stderr,
    /// Discard output; used while the TUI owns the terminal and no log file is set
    Silent,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// When set, logs are appended to this file instead of `target`
    pub log_file: Option<PathBuf>,
    pub target: LogTarget,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            target: LogTarget::Stderr,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Level from the number of `-v` flags
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub const fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }
}

/// Install the global subscriber
///
/// Call once at startup. `RUST_LOG` overrides the configured level.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install(config, SharedFileWriter::new(file), false);
    } else {
        match config.target {
            LogTarget::Stderr => install(config, io::stderr, config.with_ansi),
            LogTarget::Silent => install(config, io::sink, false),
        }
    }
    Ok(())
}

fn install<W>(config: &LogConfig, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    // Ignore a second initialisation (tests, repeated calls)
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl io::Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Our crate at `level`, dependencies at warn, unless `RUST_LOG` is set
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,wordle_game={level}"))
    })
}
