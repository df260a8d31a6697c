//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use super::keyboard::{self, KEYBOARD_HEIGHT};
use crate::core::Classification;
use crate::game::{GameStatus, format_elapsed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::rc::Rc;

fn split_screen(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(8),                  // Grid and side panel
            Constraint::Length(KEYBOARD_HEIGHT), // On-screen keyboard
            Constraint::Length(5),               // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(area)
}

/// Area the on-screen keyboard occupies for a given frame size
#[must_use]
pub fn keyboard_area(area: Rect) -> Rect {
    split_screen(area)[2]
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = split_screen(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile style for a classification; `None` is an unevaluated letter
fn tile_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Misplaced) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.config().word_length;
    let cursor = session.cursor();

    let mut lines = Vec::with_capacity(session.rows().len() * 2);
    for (index, row) in session.rows().iter().enumerate() {
        let spans: Vec<Span> = (0..width)
            .flat_map(|col| {
                let tile = match row.letter(col) {
                    Some(letter) => Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        tile_style(row.classification(col)),
                    ),
                    None if index == cursor.row && col == cursor.col => {
                        Span::styled(" _ ", Style::default().fg(Color::Cyan))
                    }
                    None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                };
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let title = if session.is_checking() {
        " Checking… "
    } else {
        " Board "
    };
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    render_game_info(f, app, chunks[0]);
    render_leaderboard(f, app, chunks[1]);
}

fn render_game_info(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (status, color) = match session.status() {
        GameStatus::InProgress => ("Playing", Color::Cyan),
        GameStatus::Won => ("Won", Color::Green),
        GameStatus::Lost => ("Lost", Color::Red),
    };

    let mut content = vec![
        Line::from(vec![
            Span::raw("Time:    "),
            Span::styled(
                format_elapsed(session.elapsed()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Guesses: {}/{}",
            session.guesses(),
            session.config().max_guesses
        )),
        Line::from(vec![
            Span::raw("Status:  "),
            Span::styled(status, Style::default().fg(color)),
        ]),
        Line::from(format!("Streak:  {}", app.stats.current_streak)),
    ];
    if let Some(best) = app.stats.best_time {
        content.push(Line::from(format!("Best:    {}", format_elapsed(best))));
    }
    if let Some(secret) = session.revealed_secret() {
        content.push(Line::from(vec![
            Span::raw("Word:    "),
            Span::styled(
                secret.text().to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let info = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.leaderboard.is_empty() {
        vec![ListItem::new("No wins yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.leaderboard
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                ListItem::new(format!(
                    "{:>2}. {}  {} {}",
                    rank + 1,
                    entry.elapsed_display,
                    entry.guesses,
                    if entry.guesses == 1 { "guess" } else { "guesses" }
                ))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (id, rect) in keyboard::layout(area) {
        let style = match id.as_bytes() {
            [letter] => match app.session.keyboard().get(*letter) {
                Some(class) => tile_style(Some(class)),
                None => Style::default().fg(Color::White),
            },
            _ => Style::default().fg(Color::Cyan),
        };

        let key = Paragraph::new(keyboard::key_label(id))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(key, rect);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.status().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Type or click letters | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
