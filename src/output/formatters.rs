//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, LetterPrecedenceMap};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Letter rows of the QWERTY keyboard, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile, coloured by its classification
#[must_use]
pub fn tile(letter: char, classification: Option<Classification>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match classification {
        Some(Classification::Correct) => text.black().on_green().bold(),
        Some(Classification::Misplaced) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.classifications())
        .map(|(letter, &class)| tile(letter, Some(class)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard with every letter coloured by its best classification so far
#[must_use]
pub fn colored_keyboard(keyboard: &LetterPrecedenceMap) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| tile(char::from(b), keyboard.get(b)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent * 2), keys.join(""))
        })
        .collect()
}

/// Emoji grid of the submitted rows, one line per guess
#[must_use]
pub fn share_grid(rows: &[Row]) -> String {
    rows.iter()
        .filter_map(Row::feedback)
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pluralized guess count
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwerty_covers_alphabet_once() {
        let mut letters: Vec<char> = QWERTY_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        assert!(tile('q', Some(Classification::Correct)).to_string().contains('Q'));
        assert!(tile('q', None).to_string().contains('Q'));
    }

    #[test]
    fn colored_guess_has_one_tile_per_letter() {
        let feedback = Feedback::from_str("GY--G").unwrap();
        let rendered = colored_guess("crane", &feedback);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(rendered.contains(letter));
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let rows = colored_keyboard(&LetterPrecedenceMap::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[2].contains('M'));
    }

    #[test]
    fn share_grid_skips_open_rows() {
        assert_eq!(share_grid(&[Row::default(), Row::default()]), "");
    }

    #[test]
    fn guesses_label_pluralizes() {
        assert_eq!(guesses_label(1), "1 guess");
        assert_eq!(guesses_label(4), "4 guesses");
    }
}
