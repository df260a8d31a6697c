//! Input routing
//!
//! Maps raw key presses and on-screen key clicks to the three logical game actions.
//! Key names follow the browser `KeyboardEvent.key` convention ("Enter", "Backspace", "a").

/// Key name that submits the current row
pub const ENTER: &str = "Enter";

/// Key name that deletes the last letter
pub const BACKSPACE: &str = "Backspace";

/// A logical game action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a lowercase letter to the current row
    Append(char),
    /// Remove the last letter of the current row
    Delete,
    /// Submit the current row as a guess
    Submit,
}

/// Raw input from the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Physical key press, by key name
    Key(&'a str),
    /// On-screen keyboard click, by key id
    Click(&'a str),
}

/// Route a raw input event to an action
///
/// Key presses and clicks share one table. Anything that is not Enter, Backspace or a
/// single ASCII letter is ignored.
///
/// # Examples
/// ```
/// use wordle_game::game::{route, Action, RawInput};
///
/// assert_eq!(route(RawInput::Key("Q")), Some(Action::Append('q')));
/// assert_eq!(route(RawInput::Click("Enter")), Some(Action::Submit));
/// assert_eq!(route(RawInput::Key("Shift")), None);
/// ```
#[must_use]
pub fn route(input: RawInput<'_>) -> Option<Action> {
    let (RawInput::Key(name) | RawInput::Click(name)) = input;
    route_key(name)
}

/// Route a key name
#[must_use]
pub fn route_key(name: &str) -> Option<Action> {
    match name {
        ENTER => Some(Action::Submit),
        BACKSPACE => Some(Action::Delete),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => route_char(ch),
                _ => None,
            }
        }
    }
}

/// Route a single typed character; only ASCII letters produce an action
#[must_use]
pub fn route_char(ch: char) -> Option<Action> {
    ch.is_ascii_alphabetic()
        .then(|| Action::Append(ch.to_ascii_lowercase()))
}
