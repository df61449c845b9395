//! Board grid and cursor
//!
//! The board is 6 rows of 5 cells. Letters are stored lowercase and exposed
//! uppercase for display.

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};

/// Number of guesses per session (board rows)
pub const MAX_GUESSES: usize = 6;

/// One tile: an optional letter and, once scored, its status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<u8>,
    status: Option<LetterStatus>,
}

impl Cell {
    /// Uppercase letter, if filled
    #[inline]
    #[must_use]
    pub fn letter(self) -> Option<char> {
        self.letter.map(|b| char::from(b.to_ascii_uppercase()))
    }

    /// Status, if the row has been scored
    #[inline]
    #[must_use]
    pub const fn status(self) -> Option<LetterStatus> {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_filled(self) -> bool {
        self.letter.is_some()
    }
}

/// Next cell to fill
///
/// `row` is in `0..MAX_GUESSES`, `tile` in `0..=WORD_LENGTH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub tile: usize,
}

impl Cursor {
    #[inline]
    #[must_use]
    pub const fn row_is_full(self) -> bool {
        self.tile == WORD_LENGTH
    }
}

/// The 6x5 grid of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WORD_LENGTH]; MAX_GUESSES],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// Panics if `row` or `col` is out of range
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// # Panics
    /// Panics if `row` is out of range
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &[Cell; WORD_LENGTH] {
        &self.cells[row]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WORD_LENGTH]> {
        self.cells.iter()
    }

    /// Feedback of every scored row, in play order
    pub fn scored_rows(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.cells.iter().map_while(|row| {
            let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
            for (slot, cell) in statuses.iter_mut().zip(row) {
                *slot = cell.status?;
            }
            Some(Feedback::new(statuses))
        })
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: u8) {
        debug_assert!(letter.is_ascii_lowercase());
        self.cells[row][col] = Cell {
            letter: Some(letter),
            status: None,
        };
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) -> Option<u8> {
        std::mem::take(&mut self.cells[row][col]).letter
    }

    /// Assemble the word in `row`, if all five tiles are filled
    pub(crate) fn row_word(&self, row: usize) -> Option<Word> {
        let mut bytes = [0u8; WORD_LENGTH];
        for (byte, cell) in bytes.iter_mut().zip(&self.cells[row]) {
            *byte = cell.letter?;
        }
        Word::from_bytes(bytes).ok()
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: Feedback) {
        for (cell, &status) in self.cells[row].iter_mut().zip(feedback.statuses()) {
            cell.status = Some(status);
        }
    }
}
