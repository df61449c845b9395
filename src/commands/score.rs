//! One-shot scoring command
//!
//! Scores a guess against a chosen secret without running a session.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether a session would accept the guess
    pub in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// Both must be five-letter words; only the guess is checked against the
/// dictionary, and only to report it.
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
pub fn score_guess(
    dictionary: &Dictionary,
    secret: &str,
    guess: &str,
) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        feedback: Feedback::calculate(&guess, &secret),
        in_dictionary: dictionary.contains(&guess),
        secret,
        guess,
    })
}
