//! Game flow: input routing, the per-game state machine and its clock

pub mod clock;
pub mod events;
pub mod input;
pub mod session;

pub use clock::{Stopwatch, format_elapsed};
pub use events::{GameEvent, GameSummary, Notice};
pub use input::{Action, BACKSPACE, ENTER, RawInput, route, route_char, route_key};
pub use session::{Cursor, GameSession, GameStatus, Outcome, PendingGuess, Row, SubmitError};
