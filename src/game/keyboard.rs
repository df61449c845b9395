//! Best-known status per keyboard letter

use crate::core::{Feedback, LetterStatus, Word};

/// A key whose status changed after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUpdate {
    /// Uppercase letter
    pub letter: char,
    pub status: LetterStatus,
}

/// Status of every letter A-Z, upgraded monotonically `Absent < Present < Correct`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatusMap {
    keys: [Option<LetterStatus>; 26],
}

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter (either case); `None` if unseen or not a letter
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        slot(letter).and_then(|i| self.keys[i])
    }

    /// Raise a letter's status; returns `true` if it changed
    ///
    /// Lower or equal statuses are ignored, so a key never downgrades.
    pub fn upgrade(&mut self, letter: char, status: LetterStatus) -> bool {
        let Some(i) = slot(letter) else {
            return false;
        };

        match self.keys[i] {
            Some(current) if current >= status => false,
            _ => {
                self.keys[i] = Some(status);
                true
            }
        }
    }

    /// Apply a scored guess, returning one update per key that changed
    pub fn apply(&mut self, guess: &Word, feedback: Feedback) -> Vec<KeyUpdate> {
        let mut updates: Vec<KeyUpdate> = Vec::new();

        for (&byte, &status) in guess.chars().iter().zip(feedback.statuses()) {
            let letter = char::from(byte.to_ascii_uppercase());
            if !self.upgrade(letter, status) {
                continue;
            }

            // A repeated letter may upgrade twice in one guess; report the final status
            match updates.iter_mut().find(|u| u.letter == letter) {
                Some(update) => update.status = status,
                None => updates.push(KeyUpdate { letter, status }),
            }
        }

        updates
    }

    /// Seen letters with their status, A to Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('A'..='Z')
            .zip(&self.keys)
            .filter_map(|(letter, status)| status.map(|s| (letter, s)))
    }
}

fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
}
