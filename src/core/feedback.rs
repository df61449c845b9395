//! Per-letter feedback for a guess
//!
//! Feedback is computed in two passes over a working copy of the secret:
//! 1. Exact position matches are marked correct and their secret letter is consumed
//! 2. Remaining positions consume the first unconsumed occurrence of their letter,
//!    left to right, and are marked present; otherwise absent
//!
//! Consuming on match is what makes repeated letters score correctly: a letter
//! never scores more often than the secret contains it.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Status of a single letter
///
/// Ordered `Absent < Present < Correct`, the order in which key statuses upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name, as used in status tags
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the secret)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap raw statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(feedback.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);
        let mut statuses: [Option<LetterStatus>; WORD_LENGTH] = [None; WORD_LENGTH];

        // First pass: exact matches
        for (i, status) in statuses.iter_mut().enumerate() {
            if remaining[i] == Some(guess[i]) {
                *status = Some(LetterStatus::Correct);
                remaining[i] = None;
            }
        }

        // Second pass: first unconsumed occurrence anywhere else
        for (i, status) in statuses.iter_mut().enumerate() {
            if status.is_some() {
                continue;
            }

            let letter = Some(guess[i]);
            *status = Some(match remaining.iter_mut().find(|slot| **slot == letter) {
                Some(slot) => {
                    *slot = None;
                    LetterStatus::Present
                }
                None => LetterStatus::Absent,
            });
        }

        Self(statuses.map(|s| s.unwrap_or(LetterStatus::Absent)))
    }

    /// Statuses by position
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the positions with the given status
    #[must_use]
    pub fn count(self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, secret: &str) -> [LetterStatus; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        *Feedback::calculate(&guess, &secret).statuses()
    }

    #[test]
    fn status_ordering_upgrades_towards_correct() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn feedback_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&word, &word);

        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn feedback_self_is_always_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::calculate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn feedback_real_wordle_example() {
        // R is absent because SLATE has no R
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn feedback_loyal_against_allow() {
        // No position lines up, so every shared letter is present; the two L's
        // in the guess consume the two L's in the secret
        assert_eq!(
            score("loyal", "allow"),
            [Present, Present, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_erase_against_speed() {
        // SPEED has two E's, so both E's in ERASE find one to consume
        assert_eq!(
            score("erase", "speed"),
            [Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_exact_match_takes_priority_over_earlier_present() {
        // ABBEY has one E at position 3; SPEED's second E takes it exactly,
        // leaving nothing for the first E
        assert_eq!(
            score("speed", "abbey"),
            [Absent, Absent, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_guess_letter_scores_once() {
        // Only one O in the secret and the exact match takes it
        assert_eq!(
            score("robot", "world"),
            [Present, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_present_and_correct_of_same_letter() {
        // FLOOR has two O's; ROBOT's second O is exact, its first O takes the other
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_never_overcounts_letters() {
        let words = ["allow", "loyal", "speed", "erase", "robot", "floor", "abbey", "eerie"];
        for guess in words {
            for secret in words {
                let g = Word::new(guess).unwrap();
                let s = Word::new(secret).unwrap();
                let feedback = Feedback::calculate(&g, &s);

                for &letter in g.chars() {
                    let scored = g
                        .chars()
                        .iter()
                        .zip(feedback.statuses())
                        .filter(|&(&c, &status)| c == letter && status != Absent)
                        .count();
                    assert_eq!(
                        scored,
                        g.count_of(letter).min(s.count_of(letter)),
                        "{guess} vs {secret}, letter {}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.count(Present), 2);
    }

    #[test]
    fn status_names() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Present.name(), "present");
        assert_eq!(Absent.name(), "absent");
    }
}
