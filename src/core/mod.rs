//! Core domain types for Wordle
//!
//! Pure word and feedback types with zero external dependencies.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
