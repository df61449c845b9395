//! Word list loading utilities
//!
//! Reads a dictionary from a file, one word per line.

use super::Dictionary;
use crate::core::Word;
use crate::game::GameError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines and lines starting with `#` are skipped. Every other line must
/// be a five-letter word; the first one that isn't rejects the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or wraps the `GameError` from
/// [`parse_word_list`].
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let dictionary = parse_word_list(&content)
        .with_context(|| format!("invalid word list {}", path.display()))?;

    tracing::debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
    Ok(dictionary)
}

/// Parse word list text into a dictionary
///
/// `MalformedWord::entry` is the 1-based line number of the offending line.
///
/// # Errors
/// - `GameError::MalformedWord` for the first malformed line
/// - `GameError::EmptyDictionary` if no words remain after skipping blanks and comments
pub fn parse_word_list(content: &str) -> Result<Dictionary, GameError> {
    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            Word::new(line).map_err(|reason| GameError::MalformedWord {
                entry: line_number,
                word: line.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Dictionary::from_words(words)
}
