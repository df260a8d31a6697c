//! TUI application state and logic
//!
//! Terminal input, dictionary verdicts and leaderboard updates all arrive as
//! [`AppEvent`]s on one channel, so the game session only ever has a single owner.

use super::keyboard::{key_at, key_name};
use crate::commands::start_session;
use crate::config::GameConfig;
use crate::game::{
    Action, GameEvent, GameSession, GameStatus, GameSummary, Notice, PendingGuess, RawInput,
    SubmitError, route,
};
use crate::services::{
    GameServices, LeaderboardEntry, LeaderboardFilter, ServiceError, report_win,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

const TICK_RATE: Duration = Duration::from_millis(100);
const LEADERBOARD_ROWS: usize = 8;
const MAX_MESSAGES: usize = 5;

/// Everything the main loop reacts to
#[derive(Debug)]
pub enum AppEvent {
    Terminal(Event),
    /// Redraw so the timer advances
    Tick,
    /// A dictionary check finished
    Checked(PendingGuess, Result<bool, ServiceError>),
    Leaderboard(Vec<LeaderboardEntry>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub best_time: Option<Duration>,
}

impl Statistics {
    pub fn record(&mut self, summary: &GameSummary) {
        self.total_games += 1;
        if summary.status != GameStatus::Won {
            self.current_streak = 0;
            return;
        }

        self.games_won += 1;
        self.current_streak += 1;
        if self.guess_distribution.len() <= summary.guesses {
            self.guess_distribution.resize(summary.guesses + 1, 0);
        }
        self.guess_distribution[summary.guesses] += 1;
        self.best_time = Some(
            self.best_time
                .map_or(summary.elapsed, |best| best.min(summary.elapsed)),
        );
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App {
    services: GameServices,
    config: GameConfig,
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub should_quit: bool,
    /// Where the on-screen keyboard was last drawn
    pub keyboard_area: Rect,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    #[must_use]
    pub fn new(
        services: GameServices,
        config: GameConfig,
        session: GameSession,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let mut app = Self {
            services,
            config,
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            leaderboard: Vec::new(),
            should_quit: false,
            keyboard_area: Rect::default(),
            events,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_guesses
            ),
            MessageStyle::Info,
        );
        app
    }

    pub async fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key).await;
            }
            AppEvent::Terminal(Event::Mouse(mouse)) => self.handle_mouse(mouse),
            AppEvent::Terminal(_) | AppEvent::Tick => {}
            AppEvent::Checked(pending, verdict) => {
                if let Err(SubmitError::Engine(err)) =
                    self.session.complete_submission(pending, verdict)
                {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
                self.drain_game_events();
            }
            AppEvent::Leaderboard(entries) => self.leaderboard = entries,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.status().is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game().await,
                _ => {}
            }
            return;
        }

        if let Some(action) = key_name(key.code).and_then(|name| route(RawInput::Key(&name))) {
            self.apply(action);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) =
            key_at(self.keyboard_area, mouse.column, mouse.row).and_then(|id| route(RawInput::Click(id)))
        {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        debug!(?action, "input");
        match action {
            Action::Append(letter) => {
                self.session.append_letter(letter);
            }
            Action::Delete => {
                self.session.delete_letter();
            }
            Action::Submit => match self.session.begin_submission() {
                Ok(pending) => self.spawn_check(pending),
                Err(SubmitError::Engine(err)) => {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
                Err(_) => {}
            },
        }
        self.drain_game_events();
    }

    fn spawn_check(&self, pending: PendingGuess) {
        let dictionary = Arc::clone(&self.services.dictionary);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let verdict = dictionary.check(pending.word().text()).await;
            if tx.send(AppEvent::Checked(pending, verdict)).is_err() {
                debug!("app closed before dictionary check finished");
            }
        });
    }

    /// Turn session events into messages and side effects
    ///
    /// Grid and keyboard changes need no handling; rendering reads them from the session.
    fn drain_game_events(&mut self) {
        for event in self.session.take_events() {
            match event {
                GameEvent::Notice(notice) => {
                    let style = match notice {
                        Notice::Won => MessageStyle::Success,
                        Notice::FillAllLetters | Notice::NotInDictionary | Notice::Lost { .. } => {
                            MessageStyle::Error
                        }
                    };
                    self.add_message(&notice.to_string(), style);
                }
                GameEvent::StatusChanged { summary, .. } => self.finish_game(&summary),
                GameEvent::LetterTyped { .. }
                | GameEvent::LetterDeleted { .. }
                | GameEvent::CellClassified { .. }
                | GameEvent::KeyRecoloured { .. } => {}
            }
        }
    }

    fn finish_game(&mut self, summary: &GameSummary) {
        self.stats.record(summary);
        if summary.status == GameStatus::Won {
            let entry = LeaderboardEntry::from_summary(summary);
            self.add_message(
                &format!("Time: {}", entry.elapsed_display),
                MessageStyle::Success,
            );
            let submitted = report_win(Arc::clone(&self.services.leaderboard), entry);
            self.refresh_leaderboard(Some(submitted));
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Fetch the top entries in the background, after `after` has finished
    pub fn refresh_leaderboard(
        &self,
        after: Option<tokio::task::JoinHandle<()>>,
    ) -> tokio::task::JoinHandle<()> {
        let leaderboard = Arc::clone(&self.services.leaderboard);
        let tx = self.events.clone();
        tokio::spawn(async move {
            if let Some(handle) = after
                && let Err(err) = handle.await
            {
                warn!(error = %err, "leaderboard submission task failed");
            }
            let filter = LeaderboardFilter {
                limit: Some(LEADERBOARD_ROWS),
                ..LeaderboardFilter::default()
            };
            match leaderboard.entries(filter).await {
                Ok(entries) => {
                    if tx.send(AppEvent::Leaderboard(entries)).is_err() {
                        debug!("app closed before leaderboard refresh finished");
                    }
                }
                Err(err) => warn!(error = %err, "could not load leaderboard"),
            }
        })
    }

    pub async fn new_game(&mut self) {
        match start_session(&self.services, self.config).await {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                error!(error = %err, "could not start a new game");
                self.add_message(&format!("Could not start a new game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if no secret can be drawn, terminal setup/cleanup fails, or
/// there's an I/O error during rendering.
pub async fn run_tui(services: GameServices, config: GameConfig) -> Result<()> {
    let session = start_session(&services, config).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    spawn_input(tx.clone());
    let app = App::new(services, config, session, tx);

    let res = run_app(&mut terminal, app, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    app.refresh_leaderboard(None);

    while !app.should_quit {
        let frame = terminal.draw(|f| super::rendering::ui(f, &app))?;
        app.keyboard_area = super::rendering::keyboard_area(frame.area);

        match rx.recv().await {
            Some(event) => app.update(event).await,
            None => break,
        }
    }

    Ok(())
}

/// Poll the terminal on a blocking thread
///
/// Stops once the receiving side is gone.
fn spawn_input(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        loop {
            let event = match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(event) => AppEvent::Terminal(event),
                    Err(err) => {
                        error!(error = %err, "reading terminal input failed");
                        break;
                    }
                },
                Ok(false) => AppEvent::Tick,
                Err(err) => {
                    error!(error = %err, "polling terminal input failed");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    });
}
