//! Game error taxonomy

use crate::core::{Word, WordError};
use std::fmt;

/// Why an action was refused in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The session has ended; restart to keep playing
    GameOver,
    /// `submit_guess` needs all five tiles of the row filled
    RowIncomplete { filled: usize },
}

/// Errors raised by dictionary loading and by the session state machine
///
/// `EmptyDictionary` and `MalformedWord` are fatal at startup. The rest are
/// recoverable and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyDictionary,
    MalformedWord {
        entry: usize,
        word: String,
        reason: WordError,
    },
    InvalidWord(Word),
    InvalidLetter(char),
    RowFull,
    PreconditionViolation(Precondition),
}

impl GameError {
    /// Whether the error prevents any session from starting
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyDictionary | Self::MalformedWord { .. })
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "the game is over"),
            Self::RowIncomplete { filled } => {
                write!(f, "the row has {filled} of 5 letters")
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "dictionary contains no words"),
            Self::MalformedWord {
                entry,
                word,
                reason,
            } => write!(f, "malformed dictionary entry {entry} ({word:?}): {reason}"),
            Self::InvalidWord(word) => write!(f, "{word} is not in the word list"),
            Self::InvalidLetter(c) => write!(f, "{c:?} is not a letter A-Z"),
            Self::RowFull => write!(f, "the row is already full"),
            Self::PreconditionViolation(p) => write!(f, "action not allowed: {p}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedWord { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
