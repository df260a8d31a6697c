//! Game state machine
//!
//! A `GameSession` owns everything about one game: the secret, the grid of rows, the
//! cursor, the keyboard highlights and the win/loss status. Views read its accessors
//! and drain [`GameEvent`]s; they never mutate state directly.

use super::clock::Stopwatch;
use super::events::{GameEvent, GameSummary, Notice};
use super::input::Action;
use crate::config::GameConfig;
use crate::core::{Classification, Feedback, LetterPrecedenceMap, Word};
use crate::error::GameError;
use crate::services::{Dictionary, ServiceError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Next writable cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One guess attempt in the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: Vec<u8>,
    feedback: Option<Feedback>,
}

impl Row {
    #[must_use]
    pub fn letter(&self, col: usize) -> Option<char> {
        self.letters.get(col).copied().map(char::from)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().copied().map(char::from).collect()
    }

    /// Feedback, once the row has been accepted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn classification(&self, col: usize) -> Option<Classification> {
        self.feedback
            .as_ref()
            .and_then(|f| f.classifications().get(col).copied())
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }
}

/// Why a submission did not produce feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("incomplete guess")]
    IncompleteGuess,
    #[error("not in the dictionary")]
    UnknownWord,
    #[error("a dictionary check is already in flight")]
    InFlight,
    #[error("the game is over")]
    GameOver,
    #[error(transparent)]
    Engine(#[from] GameError),
}

impl SubmitError {
    /// Rejections the player can fix by editing the row
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompleteGuess | Self::UnknownWord)
    }
}

/// A full row handed to the dictionary, awaiting its verdict
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGuess {
    row: usize,
    word: Word,
}

impl PendingGuess {
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }
}

/// Result of handling one routed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current row changed
    Edited,
    /// The action did not apply in the current state
    Ignored,
    Submitted(Result<Feedback, SubmitError>),
}

/// State of a single game
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    secret: Word,
    rows: Vec<Row>,
    cursor: Cursor,
    guesses: usize,
    status: GameStatus,
    keyboard: LetterPrecedenceMap,
    checking: bool,
    stopwatch: Stopwatch,
    notice: Option<Notice>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a game against `secret`; the clock starts now
    ///
    /// # Errors
    /// Returns `GameError::SecretLength` if the secret does not match `config.word_length`.
    pub fn new(config: GameConfig, secret: Word) -> Result<Self, GameError> {
        if secret.len() != config.word_length {
            return Err(GameError::SecretLength {
                expected: config.word_length,
                actual: secret.len(),
            });
        }

        debug!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            "new game"
        );

        Ok(Self {
            rows: vec![Row::default(); config.max_guesses],
            config,
            secret,
            cursor: Cursor::default(),
            guesses: 0,
            status: GameStatus::InProgress,
            keyboard: LetterPrecedenceMap::new(),
            checking: false,
            stopwatch: Stopwatch::start(),
            notice: None,
            events: Vec::new(),
        })
    }

    /// Dispatch a routed action
    pub async fn handle(&mut self, action: Action, dictionary: &dyn Dictionary) -> Outcome {
        match action {
            Action::Append(letter) => edit_outcome(self.append_letter(letter)),
            Action::Delete => edit_outcome(self.delete_letter()),
            Action::Submit => match self.submit_guess(dictionary).await {
                Err(SubmitError::InFlight | SubmitError::GameOver) => Outcome::Ignored,
                result => Outcome::Submitted(result),
            },
        }
    }

    /// Write a letter at the cursor
    ///
    /// No-op (returns `false`) when the game is over, a check is in flight, the row is
    /// full, or `letter` is not an ASCII letter.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !self.accepting_input() || !letter.is_ascii_alphabetic() {
            return false;
        }
        if self.cursor.col >= self.config.word_length {
            return false;
        }

        let Cursor { row, col } = self.cursor;
        let letter = letter.to_ascii_lowercase();
        match self.current_row_mut() {
            Ok(current) => current.letters.push(letter as u8),
            Err(err) => {
                error!(error = %err, "append outside the grid");
                return false;
            }
        }
        self.cursor.col += 1;
        self.events.push(GameEvent::LetterTyped { row, col, letter });
        true
    }

    /// Remove the letter before the cursor
    ///
    /// No-op (returns `false`) when the row is empty, the game is over, or a check is in flight.
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepting_input() || self.cursor.col == 0 {
            return false;
        }

        match self.current_row_mut() {
            Ok(current) => {
                current.letters.pop();
            }
            Err(err) => {
                error!(error = %err, "delete outside the grid");
                return false;
            }
        }
        self.cursor.col -= 1;
        self.events.push(GameEvent::LetterDeleted {
            row: self.cursor.row,
            col: self.cursor.col,
        });
        true
    }

    /// Submit the current row: check it against the dictionary, then evaluate it
    ///
    /// # Errors
    /// - `IncompleteGuess` if the row is not full
    /// - `UnknownWord` if the dictionary rejects the word or cannot be reached; the row
    ///   stays editable
    /// - `InFlight` / `GameOver` if the submission does not apply right now
    /// - `Engine` on a contract violation
    pub async fn submit_guess(
        &mut self,
        dictionary: &dyn Dictionary,
    ) -> Result<Feedback, SubmitError> {
        let pending = self.begin_submission()?;
        let verdict = dictionary.check(pending.word.text()).await;
        self.complete_submission(pending, verdict)
    }

    /// First half of a submission: validate the row and mark a check as in flight
    ///
    /// Until [`complete_submission`](Self::complete_submission) is called, edits and
    /// further submissions are ignored.
    ///
    /// # Errors
    /// See [`submit_guess`](Self::submit_guess).
    pub fn begin_submission(&mut self) -> Result<PendingGuess, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }
        if self.checking {
            debug!("submission ignored, check already in flight");
            return Err(SubmitError::InFlight);
        }
        if self.cursor.col < self.config.word_length {
            self.set_notice(Notice::FillAllLetters);
            return Err(SubmitError::IncompleteGuess);
        }

        let row = self.cursor.row;
        let text = self
            .rows
            .get(row)
            .map(Row::text)
            .ok_or(GameError::InvalidRow { row })?;
        let word = Word::with_length(text, self.config.word_length).map_err(|err| {
            error!(row, error = %err, "row does not hold a word");
            GameError::InvalidRow { row }
        })?;

        self.checking = true;
        debug!(row, guess = %word, "checking guess");
        Ok(PendingGuess { row, word })
    }

    /// Second half of a submission: apply the dictionary's verdict
    ///
    /// A collaborator failure counts as an unknown word.
    ///
    /// # Errors
    /// See [`submit_guess`](Self::submit_guess).
    pub fn complete_submission(
        &mut self,
        pending: PendingGuess,
        verdict: Result<bool, ServiceError>,
    ) -> Result<Feedback, SubmitError> {
        let was_checking = std::mem::replace(&mut self.checking, false);

        if !was_checking || self.status.is_over() || pending.row != self.cursor.row {
            let err = GameError::StaleSubmission {
                submitted: pending.row,
                current: self.cursor.row,
            };
            error!(error = %err, "dropping dictionary verdict");
            return Err(err.into());
        }

        match verdict {
            Ok(true) => {}
            Ok(false) => {
                debug!(guess = %pending.word, "guess not in dictionary");
                self.set_notice(Notice::NotInDictionary);
                return Err(SubmitError::UnknownWord);
            }
            Err(err) => {
                warn!(guess = %pending.word, error = %err, "dictionary check failed");
                self.set_notice(Notice::NotInDictionary);
                return Err(SubmitError::UnknownWord);
            }
        }

        let feedback = Feedback::evaluate(&self.secret, &pending.word).map_err(|err| {
            error!(error = %err, "guess evaluation failed");
            SubmitError::from(err)
        })?;

        self.accept(&pending, &feedback);
        Ok(feedback)
    }

    fn accept(&mut self, pending: &PendingGuess, feedback: &Feedback) {
        let PendingGuess { row, word } = pending;
        let row = *row;

        for (col, (&letter, &classification)) in word
            .as_bytes()
            .iter()
            .zip(feedback.classifications())
            .enumerate()
        {
            self.events.push(GameEvent::CellClassified {
                row,
                col,
                letter: char::from(letter),
                classification,
            });
        }
        self.rows[row].feedback = Some(feedback.clone());

        for (letter, classification) in self.keyboard.merge_feedback(word, feedback) {
            self.events.push(GameEvent::KeyRecoloured {
                letter: char::from(letter),
                classification,
            });
        }

        self.guesses += 1;
        self.cursor.row += 1;
        self.cursor.col = 0;
        info!(row, guess = %word, feedback = %feedback, "guess accepted");

        if *word == self.secret {
            self.cursor.row = self.config.max_guesses;
            self.finish(GameStatus::Won, Notice::Won);
        } else if self.cursor.row == self.config.max_guesses {
            let secret = self.secret.text().to_string();
            self.finish(GameStatus::Lost, Notice::Lost { secret });
        } else {
            self.notice = None;
        }
    }

    fn finish(&mut self, status: GameStatus, notice: Notice) {
        self.status = status;
        let elapsed = self.stopwatch.stop();
        info!(?status, guesses = self.guesses, ?elapsed, "game over");
        self.set_notice(notice);
        self.events.push(GameEvent::StatusChanged {
            status,
            summary: GameSummary {
                status,
                guesses: self.guesses,
                elapsed,
            },
        });
    }

    fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice.clone());
        self.events.push(GameEvent::Notice(notice));
    }

    const fn accepting_input(&self) -> bool {
        !self.status.is_over() && !self.checking && self.cursor.row < self.config.max_guesses
    }

    fn current_row_mut(&mut self) -> Result<&mut Row, GameError> {
        let Cursor { row, col } = self.cursor;
        self.rows
            .get_mut(row)
            .ok_or(GameError::CursorOutOfRange { row, col })
    }

    /// Drain events emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Accepted guesses so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &LetterPrecedenceMap {
        &self.keyboard
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether a dictionary check is in flight
    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.checking
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    /// Final result, once the game is over
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.status.is_over().then(|| GameSummary {
            status: self.status,
            guesses: self.guesses,
            elapsed: self.stopwatch.elapsed(),
        })
    }
}

const fn edit_outcome(edited: bool) -> Outcome {
    if edited {
        Outcome::Edited
    } else {
        Outcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Correct, Misplaced};
    use crate::services::WordListDictionary;

    struct FailingDictionary;

    #[async_trait::async_trait]
    impl Dictionary for FailingDictionary {
        async fn check(&self, _word: &str) -> Result<bool, ServiceError> {
            Err(ServiceError::Unavailable("offline".to_string()))
        }
    }

    fn session(secret: &str) -> GameSession {
        GameSession::new(GameConfig::default(), Word::new(secret).unwrap()).unwrap()
    }

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(["squid", "crane", "slate", "assay", "sissy", "water", "light"])
    }

    fn type_word(game: &mut GameSession, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    #[test]
    fn new_rejects_secret_of_wrong_length() {
        let result = GameSession::new(GameConfig::default(), Word::new("squids").unwrap());
        assert!(matches!(
            result,
            Err(GameError::SecretLength {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn initial_state() {
        let game = session("squid");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 0 });
        assert_eq!(game.guesses(), 0);
        assert!(game.keyboard().is_empty());
        assert_eq!(game.rows().len(), 6);
        assert!(game.revealed_secret().is_none());
        assert!(game.summary().is_none());
    }

    #[test]
    fn append_writes_lowercase_and_advances() {
        let mut game = session("squid");
        assert!(game.append_letter('S'));
        assert_eq!(game.rows()[0].text(), "s");
        assert_eq!(game.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(
            game.take_events(),
            vec![GameEvent::LetterTyped {
                row: 0,
                col: 0,
                letter: 's'
            }]
        );
    }

    #[test]
    fn append_ignores_non_letters() {
        let mut game = session("squid");
        assert!(!game.append_letter('3'));
        assert!(!game.append_letter(' '));
        assert_eq!(game.cursor().col, 0);
    }

    #[test]
    fn full_row_does_not_overflow() {
        let mut game = session("squid");
        type_word(&mut game, "crane");
        assert!(!game.append_letter('x'));
        assert_eq!(game.rows()[0].text(), "crane");
        assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });
    }

    #[test]
    fn delete_on_empty_row_is_noop() {
        let mut game = session("squid");
        assert!(!game.delete_letter());
        assert_eq!(game.cursor(), Cursor::default());
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn append_then_delete_restores_row() {
        let mut game = session("squid");
        type_word(&mut game, "cr");
        let before = game.rows()[0].clone();
        let cursor = game.cursor();

        assert!(game.append_letter('a'));
        assert!(game.delete_letter());

        assert_eq!(game.rows()[0], before);
        assert_eq!(game.cursor(), cursor);
    }

    #[tokio::test]
    async fn incomplete_guess_is_rejected_without_state_change() {
        let mut game = session("squid");
        type_word(&mut game, "cra");
        game.take_events();

        let result = game.submit_guess(&dictionary()).await;

        assert_eq!(result, Err(SubmitError::IncompleteGuess));
        assert_eq!(game.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.notice(), Some(&Notice::FillAllLetters));
        assert_eq!(
            game.take_events(),
            vec![GameEvent::Notice(Notice::FillAllLetters)]
        );
    }

    #[tokio::test]
    async fn unknown_word_leaves_row_editable() {
        let mut game = session("squid");
        type_word(&mut game, "zzzzz");

        let result = game.submit_guess(&dictionary()).await;

        assert_eq!(result, Err(SubmitError::UnknownWord));
        assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(game.rows()[0].text(), "zzzzz");
        assert_eq!(game.guesses(), 0);
        assert_eq!(game.notice(), Some(&Notice::NotInDictionary));
        assert!(!game.is_checking());
        assert!(game.delete_letter());
    }

    #[tokio::test]
    async fn dictionary_failure_counts_as_unknown_word() {
        let mut game = session("squid");
        type_word(&mut game, "crane");

        let result = game.submit_guess(&FailingDictionary).await;

        assert_eq!(result, Err(SubmitError::UnknownWord));
        assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });
    }

    #[tokio::test]
    async fn accepted_guess_advances_row_and_colours_keys() {
        let mut game = session("slate");
        type_word(&mut game, "crane");
        game.take_events();

        let feedback = game.submit_guess(&dictionary()).await.unwrap();

        assert_eq!(feedback.to_string(), "--G-G");
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(game.guesses(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.rows()[0].is_submitted());
        assert_eq!(game.rows()[0].classification(2), Some(Correct));
        assert_eq!(game.keyboard().get(b'a'), Some(Correct));
        assert_eq!(game.keyboard().get(b'c'), Some(Absent));
        assert!(game.notice().is_none());

        let events = game.take_events();
        let classified = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CellClassified { .. }))
            .count();
        let recoloured = events
            .iter()
            .filter(|e| matches!(e, GameEvent::KeyRecoloured { .. }))
            .count();
        assert_eq!(classified, 5);
        assert_eq!(recoloured, 5);
    }

    #[tokio::test]
    async fn keyboard_keeps_best_highlight_across_guesses() {
        let mut game = session("slate");
        type_word(&mut game, "light");
        game.submit_guess(&dictionary()).await.unwrap();
        assert_eq!(game.keyboard().get(b'l'), Some(Misplaced));

        type_word(&mut game, "slate");
        game.submit_guess(&dictionary()).await.unwrap();
        assert_eq!(game.keyboard().get(b'l'), Some(Correct));
        assert_eq!(game.keyboard().get(b't'), Some(Correct));
    }

    #[tokio::test]
    async fn winning_guess_ends_game() {
        let mut game = session("squid");
        type_word(&mut game, "squid");
        game.take_events();

        let feedback = game.submit_guess(&dictionary()).await.unwrap();

        assert!(feedback.is_perfect());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.cursor().row, 6);
        assert_eq!(game.notice(), Some(&Notice::Won));
        assert_eq!(game.revealed_secret().map(Word::text), Some("squid"));

        let events = game.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::StatusChanged {
                status: GameStatus::Won,
                summary: GameSummary { guesses: 1, .. }
            }
        )));

        assert!(!game.append_letter('a'));
        assert_eq!(
            game.submit_guess(&dictionary()).await,
            Err(SubmitError::GameOver)
        );
    }

    #[tokio::test]
    async fn six_misses_lose_the_game() {
        let mut game = session("squid");
        for _ in 0..6 {
            type_word(&mut game, "crane");
            game.submit_guess(&dictionary()).await.unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.cursor().row, 6);
        assert_eq!(game.guesses(), 6);
        assert_eq!(
            game.notice(),
            Some(&Notice::Lost {
                secret: "squid".to_string()
            })
        );
        assert!(!game.append_letter('a'));
        assert!(!game.delete_letter());
    }

    #[test]
    fn second_submission_while_checking_is_ignored() {
        let mut game = session("squid");
        type_word(&mut game, "crane");

        let pending = game.begin_submission().unwrap();
        assert!(game.is_checking());
        assert_eq!(pending.row(), 0);
        assert_eq!(pending.word().text(), "crane");

        assert_eq!(game.begin_submission(), Err(SubmitError::InFlight));
        assert!(!game.delete_letter());
        assert!(!game.append_letter('x'));

        let feedback = game.complete_submission(pending, Ok(true)).unwrap();
        assert_eq!(feedback.len(), 5);
        assert!(!game.is_checking());
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn stale_verdict_is_a_contract_violation() {
        let mut game = session("squid");
        type_word(&mut game, "crane");
        let pending = game.begin_submission().unwrap();
        game.complete_submission(pending, Ok(true)).unwrap();

        let stale = PendingGuess {
            row: 0,
            word: Word::new("crane").unwrap(),
        };
        let result = game.complete_submission(stale, Ok(true));
        assert!(matches!(
            result,
            Err(SubmitError::Engine(GameError::StaleSubmission {
                submitted: 0,
                current: 1
            }))
        ));
    }

    #[test]
    fn verdict_without_pending_check_is_rejected() {
        let mut game = session("squid");
        type_word(&mut game, "crane");
        let unrequested = PendingGuess {
            row: 0,
            word: Word::new("crane").unwrap(),
        };

        let result = game.complete_submission(unrequested, Ok(true));

        assert!(matches!(
            result,
            Err(SubmitError::Engine(GameError::StaleSubmission { .. }))
        ));
        assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });
    }

    #[tokio::test]
    async fn handle_dispatches_actions() {
        let mut game = session("squid");
        let dict = dictionary();

        assert_eq!(game.handle(Action::Delete, &dict).await, Outcome::Ignored);
        for ch in "squid".chars() {
            assert_eq!(game.handle(Action::Append(ch), &dict).await, Outcome::Edited);
        }
        let outcome = game.handle(Action::Submit, &dict).await;
        assert!(matches!(outcome, Outcome::Submitted(Ok(ref f)) if f.is_perfect()));
        assert_eq!(game.handle(Action::Submit, &dict).await, Outcome::Ignored);
    }

    #[test]
    fn recoverable_errors() {
        assert!(SubmitError::IncompleteGuess.is_recoverable());
        assert!(SubmitError::UnknownWord.is_recoverable());
        assert!(!SubmitError::InFlight.is_recoverable());
        assert!(
            !SubmitError::Engine(GameError::InvalidRow { row: 0 }).is_recoverable()
        );
    }
}
