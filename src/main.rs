//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    config::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig},
    core::Word,
    logging::{LogConfig, LogTarget, init_logging},
    output::print_check_result,
    services::{
        Dictionary, FixedSecret, GameServices, InMemoryLeaderboard, RandomSecret, SecretSource,
        WordListDictionary,
    },
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extra accepted guesses, one word per line
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Number of rows on the board
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Seed for picking secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so logs only go to a file there
    let target = match command {
        Commands::Play => LogTarget::Silent,
        Commands::Simple | Commands::Check { .. } => LogTarget::Stderr,
    };
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_log_file(cli.log_file.clone())
            .with_target(target),
    )
    .context("could not open log file")?;

    match command {
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Simple => {
            let (config, services) = setup(&cli)?;
            run_simple(&services, config).await
        }
        Commands::Play => {
            use wordle_game::interactive::run_tui;

            let (config, services) = setup(&cli)?;
            run_tui(services, config).await
        }
    }
}

/// Build the game configuration and collaborators from the global options
fn setup(cli: &Cli) -> Result<(GameConfig, GameServices)> {
    let config = GameConfig::new(cli.length, cli.max_guesses)?;

    let mut dictionary = WordListDictionary::embedded();
    if let Some(path) = &cli.dictionary {
        let added = dictionary
            .extend_from_file(path)
            .with_context(|| format!("could not read dictionary {}", path.display()))?;
        info!(added, path = %path.display(), "loaded extra dictionary words");
    }

    let secrets: Arc<dyn SecretSource> = match &cli.secret {
        Some(word) => {
            let word = Word::with_length(word.as_str(), config.word_length)
                .with_context(|| format!("invalid secret '{word}'"))?;
            // The secret is always a valid guess
            dictionary.add_word(&word);
            Arc::new(FixedSecret::new(word))
        }
        None => {
            let answers = words_from_slice(ANSWERS);
            Arc::new(match cli.seed {
                Some(seed) => RandomSecret::with_seed(answers, seed),
                None => RandomSecret::new(answers),
            })
        }
    };

    let dictionary: Arc<dyn Dictionary> = Arc::new(dictionary);
    Ok((
        config,
        GameServices::new(dictionary, secrets, Arc::new(InMemoryLeaderboard::new())),
    ))
}
