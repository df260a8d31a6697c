//! On-screen keyboard layout and terminal key mapping
//!
//! Rendering and mouse hit-testing share [`layout`], so a click lands on exactly the
//! key that was drawn there.

use crate::game::{BACKSPACE, ENTER};
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

const TOP: [&str; 10] = ["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"];
const MIDDLE: [&str; 9] = ["a", "s", "d", "f", "g", "h", "j", "k", "l"];
const BOTTOM: [&str; 9] = [ENTER, "z", "x", "c", "v", "b", "n", "m", BACKSPACE];

/// Key ids per row, top to bottom
pub const KEY_ROWS: [&[&str]; 3] = [&TOP, &MIDDLE, &BOTTOM];

pub const KEY_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 8;
const KEY_GAP: u16 = 1;

/// Rows of keys times their height
pub const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * KEY_ROWS.len() as u16;

const fn key_width(id: &str) -> u16 {
    if id.len() > 1 { WIDE_KEY_WIDTH } else { KEY_WIDTH }
}

/// Text shown on a key
#[must_use]
pub fn key_label(id: &str) -> String {
    match id {
        ENTER => "ENTER".to_string(),
        BACKSPACE => "⌫".to_string(),
        letter => letter.to_uppercase(),
    }
}

/// Position of every key inside `area`, each row centered
///
/// Keys that would fall outside `area` are dropped.
#[must_use]
pub fn layout(area: Rect) -> Vec<(&'static str, Rect)> {
    let mut keys = Vec::new();

    for (row_index, row) in KEY_ROWS.iter().enumerate() {
        let row_width: u16 = row.iter().map(|id| key_width(id) + KEY_GAP).sum::<u16>() - KEY_GAP;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + row_index as u16 * KEY_HEIGHT;

        for &id in *row {
            let rect = Rect::new(x, y, key_width(id), KEY_HEIGHT);
            if rect.right() <= area.right() && rect.bottom() <= area.bottom() {
                keys.push((id, rect));
            }
            x += key_width(id) + KEY_GAP;
        }
    }

    keys
}

/// Key id under a terminal cell, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<&'static str> {
    let position = Position::new(column, row);
    layout(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(id, _)| id)
}

/// Browser-style key name for a terminal key code
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some(ENTER.to_string()),
        KeyCode::Backspace => Some(BACKSPACE.to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 20, 80, KEYBOARD_HEIGHT)
    }

    #[test]
    fn layout_places_every_key_when_it_fits() {
        let keys = layout(area());
        assert_eq!(keys.len(), 28);
        assert!(keys.iter().any(|&(id, _)| id == ENTER));
        assert!(keys.iter().any(|&(id, _)| id == BACKSPACE));
    }

    #[test]
    fn keys_do_not_overlap() {
        let keys = layout(area());
        for (i, (_, a)) in keys.iter().enumerate() {
            for (_, b) in &keys[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn click_hits_drawn_key() {
        for (id, rect) in layout(area()) {
            assert_eq!(key_at(area(), rect.x + 1, rect.y + 1), Some(id));
        }
    }

    #[test]
    fn click_outside_keys_misses() {
        assert_eq!(key_at(area(), 0, 20), None);
        assert_eq!(key_at(area(), 40, 5), None);
    }

    #[test]
    fn narrow_area_drops_overflowing_keys() {
        let keys = layout(Rect::new(0, 0, 20, KEYBOARD_HEIGHT));
        assert!(keys.len() < 28);
        assert!(keys.iter().all(|(_, r)| r.right() <= 20));
    }

    #[test]
    fn key_names_follow_browser_convention() {
        assert_eq!(key_name(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(key_name(KeyCode::Backspace).as_deref(), Some("Backspace"));
        assert_eq!(key_name(KeyCode::Char('Q')).as_deref(), Some("Q"));
        assert_eq!(key_name(KeyCode::Tab), None);
    }

    #[test]
    fn labels() {
        assert_eq!(key_label("q"), "Q");
        assert_eq!(key_label(ENTER), "ENTER");
    }
}
