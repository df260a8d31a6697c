//! Interactive TUI interface

pub mod app;
pub mod keyboard;
mod rendering;

pub use app::{App, AppEvent, run_tui};
