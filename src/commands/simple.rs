//! Simple line-based game
//!
//! Text-based game without the TUI: one guess per line.

use super::start_session;
use crate::config::GameConfig;
use crate::game::{Action, GameSession, GameStatus, Outcome, SubmitError, route_char};
use crate::output::{print_banner, print_board, print_game_over, print_leaderboard};
use crate::services::{Dictionary, GameServices, LeaderboardEntry, LeaderboardFilter, report_win};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

const LEADERBOARD_ROWS: usize = 5;

/// Type a whole line into the current row and submit it
///
/// Each character goes through the input router. A rejected guess is erased so the
/// next line starts from an empty row. A line with more letters than the row holds
/// is ignored.
pub async fn enter_line(
    session: &mut GameSession,
    line: &str,
    dictionary: &dyn Dictionary,
) -> Outcome {
    if line.chars().filter_map(route_char).count() > session.config().word_length {
        return Outcome::Ignored;
    }
    clear_row(session);

    let mut edited = false;
    for action in line.chars().filter_map(route_char) {
        edited |= session.handle(action, dictionary).await == Outcome::Edited;
    }
    if !edited {
        return Outcome::Ignored;
    }

    let outcome = session.handle(Action::Submit, dictionary).await;
    if matches!(outcome, Outcome::Submitted(Err(ref err)) if err.is_recoverable()) {
        clear_row(session);
    }
    outcome
}

fn clear_row(session: &mut GameSession) {
    while session.delete_letter() {}
}

/// Run the line-based game until the player quits
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or no secret word can be drawn.
pub async fn run_simple(services: &GameServices, config: GameConfig) -> Result<()> {
    print_banner(config.word_length, config.max_guesses);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = start_session(services, config).await?;

    loop {
        let turn = session.guesses() + 1;
        let Some(input) = prompt(&mut lines, &format!("Guess {turn}/{}", config.max_guesses)).await?
        else {
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            _ => {}
        }

        if input.chars().count() != config.word_length {
            println!(
                "{}\n",
                format!("❌ Guesses are {} letters long", config.word_length).red()
            );
            continue;
        }

        match enter_line(&mut session, &input, services.dictionary.as_ref()).await {
            Outcome::Submitted(Ok(_)) => print_board(&session),
            Outcome::Submitted(Err(SubmitError::Engine(err))) => return Err(err.into()),
            Outcome::Submitted(Err(_)) => {
                if let Some(notice) = session.notice() {
                    println!("{}\n", format!("❌ {notice}").red());
                }
            }
            Outcome::Edited | Outcome::Ignored => {}
        }

        if let Some(summary) = session.summary() {
            print_game_over(&session);
            if session.status() == GameStatus::Won {
                let entry = LeaderboardEntry::from_summary(&summary);
                if let Err(err) = report_win(services.leaderboard.clone(), entry).await {
                    warn!(error = %err, "leaderboard task failed");
                }
            }
            show_leaderboard(services).await;

            match prompt(&mut lines, "Play again? (yes/no)").await? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session = start_session(services, config).await?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

async fn show_leaderboard(services: &GameServices) {
    let filter = LeaderboardFilter {
        limit: Some(LEADERBOARD_ROWS),
        ..LeaderboardFilter::default()
    };
    match services.leaderboard.entries(filter).await {
        Ok(entries) => print_leaderboard(&entries),
        Err(err) => warn!(error = %err, "could not load leaderboard"),
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Notice;
    use crate::services::WordListDictionary;

    fn session(secret: &str) -> GameSession {
        GameSession::new(GameConfig::default(), Word::new(secret).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn accepted_line_moves_to_next_row() {
        let dict = WordListDictionary::new(["crane", "squid"]);
        let mut game = session("squid");

        let outcome = enter_line(&mut game, "CRANE", &dict).await;

        assert!(matches!(outcome, Outcome::Submitted(Ok(_))));
        assert_eq!(game.cursor().row, 1);
        assert_eq!(game.rows()[0].text(), "crane");
    }

    #[tokio::test]
    async fn rejected_line_is_erased() {
        let dict = WordListDictionary::new(["squid"]);
        let mut game = session("squid");

        let outcome = enter_line(&mut game, "zzzzz", &dict).await;

        assert_eq!(outcome, Outcome::Submitted(Err(SubmitError::UnknownWord)));
        assert_eq!(game.notice(), Some(&Notice::NotInDictionary));
        assert_eq!(game.cursor().col, 0);
        assert_eq!(game.rows()[0].text(), "");
    }

    #[tokio::test]
    async fn line_without_letters_is_ignored() {
        let dict = WordListDictionary::new(["squid"]);
        let mut game = session("squid");

        assert_eq!(enter_line(&mut game, "12345", &dict).await, Outcome::Ignored);
        assert!(game.notice().is_none());
    }

    #[tokio::test]
    async fn overlong_line_is_ignored() {
        let dict = WordListDictionary::new(["crane", "squid"]);
        let mut game = session("squid");

        assert_eq!(enter_line(&mut game, "cranesxyz", &dict).await, Outcome::Ignored);
        assert_eq!(game.guesses(), 0);
        assert_eq!(game.cursor(), crate::game::Cursor::default());
        assert!(!game.rows()[0].is_submitted());
    }

    #[tokio::test]
    async fn embedded_dictionary_accepts_everyday_guesses() {
        let dict = WordListDictionary::embedded();
        for word in ["trade", "stare", "later", "saint", "tears", "roate", "jumpy"] {
            let mut game = session("squid");
            let outcome = enter_line(&mut game, word, &dict).await;
            assert!(matches!(outcome, Outcome::Submitted(Ok(_))), "{word}: {outcome:?}");
        }
    }

    #[tokio::test]
    async fn winning_line_ends_game() {
        let dict = WordListDictionary::new(["squid"]);
        let mut game = session("squid");

        enter_line(&mut game, "squid", &dict).await;

        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.summary().is_some());
    }
}
