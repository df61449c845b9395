//! Validated, immutable set of five-letter words

use crate::core::Word;
use crate::game::GameError;
use rustc_hash::FxHashSet;

use super::DICTIONARY;

/// The words a session may draw as its secret and accept as guesses
///
/// Construction is strict: one malformed entry rejects the whole list.
/// Duplicates (including case variants) collapse to a single entry, keeping
/// the first occurrence's position.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// # Errors
    /// - `GameError::MalformedWord` for the first entry that is not exactly five
    ///   ASCII letters (`entry` is 1-based)
    /// - `GameError::EmptyDictionary` if there are no entries
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "SLATE", "crane"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("slate").unwrap()));
    ///
    /// assert!(Dictionary::new(["crane", "toolong"]).is_err());
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let entry = entry.as_ref();
                Word::new(entry).map_err(|reason| GameError::MalformedWord {
                    entry: i + 1,
                    word: entry.to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_words(words)
    }

    /// Build a dictionary from already-validated words
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| lookup.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        Ok(Self { words, lookup })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is broken, which the build script rejects.
    pub fn embedded() -> Result<Self, GameError> {
        Self::new(DICTIONARY)
    }

    /// Check membership (case-insensitive, since `Word` is normalized)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn dictionary_normalizes_and_dedupes() {
        let dictionary = Dictionary::new(["Crane", "slate", "CRANE"]).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crane");
        assert_eq!(dictionary.words()[1].text(), "slate");
    }

    #[test]
    fn dictionary_membership_is_case_insensitive() {
        let dictionary = Dictionary::new(["allow"]).unwrap();

        assert!(dictionary.contains(&Word::new("ALLOW").unwrap()));
        assert!(!dictionary.contains(&Word::new("loyal").unwrap()));
    }

    #[test]
    fn dictionary_rejects_empty() {
        let entries: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(entries).unwrap_err(),
            GameError::EmptyDictionary
        );
    }

    #[test]
    fn dictionary_rejects_whole_list_on_malformed_entry() {
        let err = Dictionary::new(["crane", "slate", "abc", "irate"]).unwrap_err();

        assert_eq!(
            err,
            GameError::MalformedWord {
                entry: 3,
                word: "abc".to_string(),
                reason: WordError::InvalidLength(3),
            }
        );
    }

    #[test]
    fn dictionary_rejects_non_alphabetic_entry() {
        let err = Dictionary::new(["cr4ne"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedWord {
                reason: WordError::InvalidCharacters,
                ..
            }
        ));
    }
}
