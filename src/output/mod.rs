//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the `check` command.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_check_result, print_game_over, print_leaderboard,
};
