//! Turn-based game session
//!
//! A `GameSession` owns all per-game state: the secret, board, cursor, key
//! statuses and game-over flag. Every action runs to completion before the
//! next one, and a submitted guess is scored atomically.

use super::board::{Board, Cursor, MAX_GUESSES};
use super::error::{GameError, Precondition};
use super::keyboard::{KeyStatusMap, KeyUpdate};
use super::selector::WordSelector;
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use std::fmt::Write as _;

/// What a valid guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Continue,
}

/// Result of a scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Row the guess was played on (0-based)
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Keys whose status went up, in guess order
    pub key_updates: Vec<KeyUpdate>,
    pub outcome: Outcome,
}

/// End-of-game summary, available once the game is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finale {
    pub won: bool,
    pub secret: Word,
    pub guesses_used: usize,
}

/// A single game from first letter to win or loss
///
/// Borrows its dictionary for the whole session and owns its selector, so
/// `restart` can draw the next secret.
#[derive(Debug)]
pub struct GameSession<'a, S: WordSelector> {
    dictionary: &'a Dictionary,
    selector: S,
    secret: Word,
    board: Board,
    cursor: Cursor,
    keys: KeyStatusMap,
    game_over: bool,
    last_outcome: Option<Outcome>,
}

impl<'a, S: WordSelector> GameSession<'a, S> {
    /// Start a session with a freshly selected secret
    ///
    /// # Errors
    /// Propagates the selector's error, e.g. `GameError::EmptyDictionary`.
    pub fn start(dictionary: &'a Dictionary, mut selector: S) -> Result<Self, GameError> {
        let secret = selector.select(dictionary)?;
        tracing::debug!(secret = %secret, "session started");

        Ok(Self {
            dictionary,
            selector,
            secret,
            board: Board::new(),
            cursor: Cursor::default(),
            keys: KeyStatusMap::new(),
            game_over: false,
            last_outcome: None,
        })
    }

    /// Reset all state and draw a new secret
    ///
    /// # Errors
    /// Propagates the selector's error; the session is unchanged in that case.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let secret = self.selector.select(self.dictionary)?;
        tracing::debug!(secret = %secret, "session restarted");

        self.secret = secret;
        self.board = Board::new();
        self.cursor = Cursor::default();
        self.keys = KeyStatusMap::new();
        self.game_over = false;
        self.last_outcome = None;
        Ok(())
    }

    /// Type a letter into the next free tile of the active row
    ///
    /// # Errors
    /// - `InvalidLetter` if `letter` is not A-Z (either case)
    /// - `PreconditionViolation(GameOver)` once the game has ended
    /// - `RowFull` if all five tiles are filled
    pub fn enter_letter(&mut self, letter: char) -> Result<(), GameError> {
        self.ensure_active()?;

        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.cursor.row_is_full() {
            return Err(GameError::RowFull);
        }

        let Cursor { row, tile } = self.cursor;
        self.board
            .set_letter(row, tile, letter.to_ascii_lowercase() as u8);
        self.cursor.tile += 1;
        Ok(())
    }

    /// Remove the last letter of the active row
    ///
    /// Returns the removed letter (uppercase), or `None` at the start of a row.
    ///
    /// # Errors
    /// Returns `PreconditionViolation(GameOver)` once the game has ended.
    pub fn delete_letter(&mut self) -> Result<Option<char>, GameError> {
        self.ensure_active()?;

        if self.cursor.tile == 0 {
            return Ok(None);
        }

        self.cursor.tile -= 1;
        let removed = self.board.clear(self.cursor.row, self.cursor.tile);
        Ok(removed.map(|b| char::from(b.to_ascii_uppercase())))
    }

    /// Score the active row
    ///
    /// On `InvalidWord` nothing changes: the row keeps its letters and stays
    /// editable.
    ///
    /// # Errors
    /// - `PreconditionViolation(GameOver)` once the game has ended
    /// - `PreconditionViolation(RowIncomplete)` if the row is not full
    /// - `InvalidWord` if the row's word is not in the dictionary
    ///
    /// # Panics
    /// Panics if a full row does not hold five letters, which would mean the
    /// board and cursor have diverged.
    pub fn submit_guess(&mut self) -> Result<GuessResult, GameError> {
        self.ensure_active()?;

        if !self.cursor.row_is_full() {
            return Err(GameError::PreconditionViolation(
                Precondition::RowIncomplete {
                    filled: self.cursor.tile,
                },
            ));
        }

        let row = self.cursor.row;
        let guess = self
            .board
            .row_word(row)
            .expect("full row holds five letters");

        if !self.dictionary.contains(&guess) {
            tracing::debug!(row, guess = %guess, "guess rejected: not in word list");
            return Err(GameError::InvalidWord(guess));
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.board.apply_feedback(row, feedback);
        let key_updates = self.keys.apply(&guess, feedback);

        let outcome = if guess == self.secret {
            Outcome::Win
        } else if row == MAX_GUESSES - 1 {
            Outcome::Lose
        } else {
            Outcome::Continue
        };

        match outcome {
            Outcome::Continue => {
                self.cursor = Cursor {
                    row: row + 1,
                    tile: 0,
                };
            }
            Outcome::Win | Outcome::Lose => self.game_over = true,
        }
        self.last_outcome = Some(outcome);

        tracing::info!(
            row,
            guess = %guess,
            feedback = %feedback.to_emoji(),
            ?outcome,
            "guess scored"
        );

        Ok(GuessResult {
            row,
            guess,
            feedback,
            key_updates,
            outcome,
        })
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.keys
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the most recent valid guess
    #[inline]
    #[must_use]
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.board.scored_rows().count()
    }

    /// Letters typed into the active row so far (uppercase)
    #[must_use]
    pub fn current_input(&self) -> String {
        if self.game_over {
            return String::new();
        }

        self.board
            .row(self.cursor.row)
            .iter()
            .filter_map(|cell| cell.letter())
            .collect()
    }

    /// The secret, only once the game is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Word> {
        if self.game_over {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// End-of-game summary, `None` while the game is running
    #[must_use]
    pub fn finale(&self) -> Option<Finale> {
        let secret = self.revealed_secret()?.clone();

        Some(Finale {
            won: self.last_outcome == Some(Outcome::Win),
            secret,
            guesses_used: self.guesses_used(),
        })
    }

    /// Spoiler-free result grid, e.g. "3/6" followed by one emoji row per guess
    ///
    /// Lost games show "X/6". `None` while the game is running.
    #[must_use]
    pub fn share_grid(&self) -> Option<String> {
        let finale = self.finale()?;

        let mut grid = if finale.won {
            format!("{}/{MAX_GUESSES}\n", finale.guesses_used)
        } else {
            format!("X/{MAX_GUESSES}\n")
        };
        for feedback in self.board.scored_rows() {
            let _ = write!(grid, "\n{}", feedback.to_emoji());
        }
        Some(grid)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        assert!(
            self.cursor.row < MAX_GUESSES && self.cursor.tile <= WORD_LENGTH,
            "cursor out of range: {:?}",
            self.cursor
        );

        if self.game_over {
            Err(GameError::PreconditionViolation(Precondition::GameOver))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::game::{RandomSelector, ScriptedSelector};

    const WORDS: [&str; 12] = [
        "allow", "loyal", "speed", "erase", "crane", "slate", "abbey", "robot", "floor",
        "world", "trace", "crate",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::new(WORDS).unwrap()
    }

    fn session<'a>(
        dictionary: &'a Dictionary,
        secret: &str,
    ) -> GameSession<'a, ScriptedSelector> {
        GameSession::start(dictionary, ScriptedSelector::new([secret]).unwrap()).unwrap()
    }

    fn type_word<S: WordSelector>(session: &mut GameSession<'_, S>, word: &str) {
        for c in word.chars() {
            session.enter_letter(c).unwrap();
        }
    }

    fn play<S: WordSelector>(session: &mut GameSession<'_, S>, word: &str) -> GuessResult {
        type_word(session, word);
        session.submit_guess().unwrap()
    }

    #[test]
    fn start_with_empty_script_fails() {
        let dictionary = dictionary();
        let entries: [&str; 0] = [];
        let result = GameSession::start(&dictionary, ScriptedSelector::new(entries).unwrap());
        assert!(matches!(result, Err(GameError::EmptyDictionary)));
    }

    #[test]
    fn enter_letter_advances_cursor() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        game.enter_letter('c').unwrap();
        game.enter_letter('R').unwrap();

        assert_eq!(game.cursor(), Cursor { row: 0, tile: 2 });
        assert_eq!(game.board().cell(0, 0).letter(), Some('C'));
        assert_eq!(game.current_input(), "CR");
    }

    #[test]
    fn enter_letter_rejects_non_letters() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        assert_eq!(game.enter_letter('3'), Err(GameError::InvalidLetter('3')));
        assert_eq!(game.enter_letter('é'), Err(GameError::InvalidLetter('é')));
        assert_eq!(game.cursor().tile, 0);
    }

    #[test]
    fn enter_letter_on_full_row() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        type_word(&mut game, "crane");

        assert_eq!(game.enter_letter('x'), Err(GameError::RowFull));
        assert_eq!(game.current_input(), "CRANE");
    }

    #[test]
    fn delete_letter_clears_last_tile() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        type_word(&mut game, "cra");

        assert_eq!(game.delete_letter(), Ok(Some('A')));
        assert_eq!(game.cursor().tile, 2);
        assert!(!game.board().cell(0, 2).is_filled());
    }

    #[test]
    fn delete_letter_at_row_start_is_noop() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        assert_eq!(game.delete_letter(), Ok(None));
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn delete_letter_does_not_reach_previous_row() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        play(&mut game, "crane");

        assert_eq!(game.delete_letter(), Ok(None));
        assert_eq!(game.board().cell(0, 4).letter(), Some('E'));
    }

    #[test]
    fn submit_incomplete_row() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        type_word(&mut game, "cran");

        assert_eq!(
            game.submit_guess(),
            Err(GameError::PreconditionViolation(
                Precondition::RowIncomplete { filled: 4 }
            ))
        );
    }

    #[test]
    fn invalid_word_changes_nothing() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        play(&mut game, "crane");
        type_word(&mut game, "xyzzy");

        let board = game.board().clone();
        let cursor = game.cursor();
        let keys = game.key_statuses().clone();

        let err = game.submit_guess().unwrap_err();

        assert_eq!(err, GameError::InvalidWord(Word::new("xyzzy").unwrap()));
        assert_eq!(game.board(), &board);
        assert_eq!(game.cursor(), cursor);
        assert_eq!(game.key_statuses(), &keys);
        assert!(!game.is_game_over());

        // Row stays editable
        assert_eq!(game.delete_letter(), Ok(Some('Y')));
    }

    #[test]
    fn correct_guess_wins() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        let result = play(&mut game, "ALLOW");

        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.feedback.statuses(), &[Correct; 5]);
        assert!(game.is_game_over());
        assert_eq!(
            game.finale(),
            Some(Finale {
                won: true,
                secret: Word::new("allow").unwrap(),
                guesses_used: 1,
            })
        );
    }

    #[test]
    fn every_dictionary_word_wins_against_itself() {
        let dictionary = dictionary();
        for word in WORDS {
            let mut game = session(&dictionary, word);
            let result = play(&mut game, word);
            assert_eq!(result.outcome, Outcome::Win, "{word}");
            assert!(result.feedback.is_perfect());
        }
    }

    #[test]
    fn wrong_guess_continues_on_next_row() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        let result = play(&mut game, "loyal");

        assert_eq!(result.row, 0);
        assert_eq!(result.outcome, Outcome::Continue);
        assert_eq!(
            result.feedback.statuses(),
            &[Present, Present, Absent, Present, Present]
        );
        assert_eq!(game.cursor(), Cursor { row: 1, tile: 0 });
        assert_eq!(game.board().cell(0, 2).status(), Some(Absent));
        assert_eq!(game.last_outcome(), Some(Outcome::Continue));
        assert_eq!(game.revealed_secret(), None);
        assert_eq!(game.finale(), None);
    }

    #[test]
    fn six_misses_lose() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        for (i, word) in ["crane", "slate", "speed", "erase", "robot"].iter().enumerate() {
            assert_eq!(play(&mut game, word).outcome, Outcome::Continue, "row {i}");
        }
        let last = play(&mut game, "trace");

        assert_eq!(last.row, 5);
        assert_eq!(last.outcome, Outcome::Lose);
        assert!(game.is_game_over());
        assert_eq!(game.revealed_secret().map(Word::text), Some("allow"));

        let finale = game.finale().unwrap();
        assert!(!finale.won);
        assert_eq!(finale.guesses_used, 6);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");

        for word in ["crane", "slate", "speed", "erase", "robot"] {
            play(&mut game, word);
        }

        assert_eq!(play(&mut game, "allow").outcome, Outcome::Win);
    }

    #[test]
    fn no_input_after_game_over() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crane");
        play(&mut game, "crane");

        let over = Err(GameError::PreconditionViolation(Precondition::GameOver));
        assert_eq!(game.enter_letter('a'), over);
        assert_eq!(
            game.delete_letter(),
            Err(GameError::PreconditionViolation(Precondition::GameOver))
        );
        assert_eq!(
            game.submit_guess(),
            Err(GameError::PreconditionViolation(Precondition::GameOver))
        );
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn key_statuses_never_downgrade() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crane");

        let mut previous = game.key_statuses().clone();
        for word in ["trace", "crate", "slate", "speed", "erase"] {
            play(&mut game, word);
            let current = game.key_statuses();
            for (letter, status) in previous.iter() {
                assert!(
                    current.get(letter) >= Some(status),
                    "{letter} went from {status:?} to {:?}",
                    current.get(letter)
                );
            }
            previous = current.clone();
        }
    }

    #[test]
    fn guess_result_reports_key_updates() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crane");

        let first = play(&mut game, "crate");
        assert_eq!(first.key_updates.len(), 5);

        // C/R/A/E already correct, T already absent
        let second = play(&mut game, "trace");
        assert!(second.key_updates.is_empty());
    }

    #[test]
    fn restart_resets_everything() {
        let dictionary = dictionary();
        let selector = ScriptedSelector::new(["allow", "speed"]).unwrap();
        let mut game = GameSession::start(&dictionary, selector).unwrap();
        play(&mut game, "allow");
        assert!(game.is_game_over());

        game.restart().unwrap();

        assert!(!game.is_game_over());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.cursor(), Cursor::default());
        assert_eq!(game.key_statuses(), &KeyStatusMap::new());
        assert_eq!(game.last_outcome(), None);
        assert_eq!(game.secret.text(), "speed");
    }

    #[test]
    fn restart_can_draw_a_different_secret() {
        let dictionary = dictionary();
        let mut game = GameSession::start(&dictionary, RandomSelector::seeded(1)).unwrap();
        let first = game.secret.clone();

        let differs = (0..50).any(|_| {
            game.restart().unwrap();
            game.secret != first
        });
        assert!(differs);
    }

    #[test]
    fn share_grid_after_win() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "crane");
        assert_eq!(game.share_grid(), None);

        play(&mut game, "trace");
        play(&mut game, "crane");

        assert_eq!(
            game.share_grid().unwrap(),
            "2/6\n\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_after_loss() {
        let dictionary = dictionary();
        let mut game = session(&dictionary, "allow");
        for word in ["crane", "slate", "speed", "erase", "robot", "trace"] {
            play(&mut game, word);
        }

        let grid = game.share_grid().unwrap();
        assert!(grid.starts_with("X/6\n"));
        assert_eq!(grid.lines().count(), 8);
    }
}
