//! Secret word selection
//!
//! Selection sits behind [`WordSelector`] so sessions can be driven by a
//! seeded RNG or a fixed script instead of OS randomness.

use super::GameError;
use crate::core::{Word, WordError};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Chooses the secret word for each new session
pub trait WordSelector {
    /// Pick a secret from `dictionary`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if there is nothing to pick.
    fn select(&mut self, dictionary: &Dictionary) -> Result<Word, GameError>;
}

/// Pick a word uniformly at random
///
/// # Errors
/// Returns `GameError::EmptyDictionary` if the dictionary has no words.
pub fn pick_secret_word<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Word, GameError> {
    dictionary
        .words()
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyDictionary)
}

/// Uniform random selection
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of secrets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> WordSelector for RandomSelector<R> {
    fn select(&mut self, dictionary: &Dictionary) -> Result<Word, GameError> {
        pick_secret_word(dictionary, &mut self.rng)
    }
}

/// Cycles through a fixed list of secrets
///
/// Each word must be in the dictionary it is used with, otherwise `select`
/// fails with `GameError::InvalidWord`.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    words: Vec<Word>,
    next: usize,
}

impl ScriptedSelector {
    /// # Errors
    /// Returns `WordError` for the first entry that is not a five-letter word.
    pub fn new<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { words, next: 0 })
    }
}

impl WordSelector for ScriptedSelector {
    fn select(&mut self, dictionary: &Dictionary) -> Result<Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        let word = self.words[self.next % self.words.len()].clone();
        self.next += 1;

        if dictionary.contains(&word) {
            Ok(word)
        } else {
            Err(GameError::InvalidWord(word))
        }
    }
}
