//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, guesses_label, share_grid, tile};
use crate::commands::CheckResult;
use crate::core::Classification;
use crate::game::{GameSession, GameStatus, format_elapsed};
use crate::services::LeaderboardEntry;
use colored::Colorize;

/// Print the banner shown when a line-mode game starts
pub fn print_banner(word_length: usize, max_guesses: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                           WORDLE                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {word_length}-letter word in {max_guesses} tries.");
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word\n",
        tile('g', Some(Classification::Correct)),
        tile('y', Some(Classification::Misplaced)),
        tile('-', Some(Classification::Absent)),
    );
    println!("Commands: 'quit' to exit\n");
}

/// Print the result of checking one guess against a secret
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        colored_guess(result.guess.text(), &result.feedback),
        result.feedback.to_string().bright_black()
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "   {} correct, {} misplaced",
            result.feedback.count_correct().to_string().green(),
            result.feedback.count_misplaced().to_string().yellow()
        );
    }
}

/// Print every submitted row and the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows().iter().filter(|r| r.is_submitted()) {
        if let Some(feedback) = row.feedback() {
            println!("  {}", colored_guess(&row.text(), feedback));
        }
    }
    println!();
    for line in colored_keyboard(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession) {
    let Some(summary) = session.summary() else {
        return;
    };
    let time = format_elapsed(summary.elapsed);

    println!("{}", "═".repeat(64).bright_cyan());
    match summary.status {
        GameStatus::Won => {
            println!("  {}", "🎉 You win!".bright_green().bold());
            println!(
                "  Solved in {} ({})",
                guesses_label(summary.guesses).bright_cyan().bold(),
                time
            );
        }
        GameStatus::Lost | GameStatus::InProgress => {
            let secret = session
                .revealed_secret()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            println!(
                "  {} {}",
                "Game over. The word was".red().bold(),
                secret.bright_yellow().bold()
            );
            println!("  Time: {time}");
        }
    }
    println!("\n{}", share_grid(session.rows()));
    println!("{}", "═".repeat(64).bright_cyan());
}

/// Print leaderboard entries, fastest first
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("\n🏆 {}", "Leaderboard".bright_cyan().bold());
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "   {:>2}. {}  {}",
            rank + 1,
            entry.elapsed_display.bright_yellow(),
            guesses_label(entry.guesses)
        );
    }
    println!();
}
