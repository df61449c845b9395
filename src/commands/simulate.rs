//! Self-play simulation
//!
//! Plays many sessions end to end with a simple player that always guesses a
//! word consistent with the feedback so far. Games run in parallel; each game
//! owns its session and the dictionary is shared read-only.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameSession, MAX_GUESSES, Outcome, RandomSelector};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// One finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: Word,
    pub guesses: usize,
    pub won: bool,
}

/// Aggregate statistics of a simulation
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    /// `distribution[n - 1]` counts games won in `n` guesses
    pub distribution: [usize; MAX_GUESSES],
    pub average_guesses: f64,
    pub hardest: Vec<Word>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.total_games - self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Run `config.games` independent games
///
/// Game `i` uses seed `config.seed + i` for both its secret and its player,
/// so results are reproducible regardless of scheduling.
///
/// # Errors
///
/// Returns the first `GameError` raised by any session.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_one(dictionary, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");

    let duration = start.elapsed();
    Ok(summarize(&records, duration))
}

/// Play one game with the consistent-candidate player
///
/// # Errors
///
/// Returns any `GameError` from the session.
///
/// # Panics
///
/// Panics if the session reports a final outcome without being over.
pub fn play_one(dictionary: &Dictionary, seed: u64) -> Result<GameRecord, GameError> {
    let mut session = GameSession::start(dictionary, RandomSelector::seeded(seed))?;
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));
    let mut candidates: Vec<&Word> = dictionary.words().iter().collect();

    loop {
        let guess: Word = candidates
            .choose(&mut rng)
            .map(|&word| word.clone())
            .ok_or(GameError::EmptyDictionary)?;

        for &letter in guess.chars() {
            session.enter_letter(char::from(letter))?;
        }
        let result = session.submit_guess()?;

        match result.outcome {
            Outcome::Continue => {
                candidates.retain(|c| Feedback::calculate(&guess, c) == result.feedback);
            }
            Outcome::Win | Outcome::Lose => {
                let finale = session.finale().expect("session is over after win or loss");
                return Ok(GameRecord {
                    secret: finale.secret,
                    guesses: finale.guesses_used,
                    won: finale.won,
                });
            }
        }
    }
}

fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution = [0usize; MAX_GUESSES];
    let mut wins = 0;
    let mut winning_guesses = 0;

    for record in records.iter().filter(|r| r.won) {
        wins += 1;
        winning_guesses += record.guesses;
        distribution[record.guesses - 1] += 1;
    }

    let mut hardest: Vec<Word> = records
        .iter()
        .filter(|r| !r.won)
        .map(|r| r.secret.clone())
        .collect();
    hardest.sort();
    hardest.dedup();

    let total_games = records.len();

    SimulationResult {
        total_games,
        wins,
        distribution,
        average_guesses: if wins == 0 {
            0.0
        } else {
            winning_guesses as f64 / wins as f64
        },
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(games, seed)
        }
    }

    #[test]
    fn simulation_runs() {
        let dictionary = Dictionary::embedded().unwrap();
        let result = run_simulation(&dictionary, &config(20, 1)).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.wins + result.losses(), 20);
        assert_eq!(result.distribution.iter().sum::<usize>(), result.wins);
        assert!(result.hardest.len() <= result.losses());
    }

    #[test]
    fn simulation_metrics_consistency() {
        let dictionary = Dictionary::embedded().unwrap();
        let result = run_simulation(&dictionary, &config(30, 9)).unwrap();

        if result.wins > 0 {
            assert!(result.average_guesses >= 1.0);
            assert!(result.average_guesses <= MAX_GUESSES as f64);
        }
        assert!((0.0..=100.0).contains(&result.win_rate()));
    }

    #[test]
    fn simulation_is_reproducible() {
        let dictionary = Dictionary::embedded().unwrap();
        let a = play_one(&dictionary, 77).unwrap();
        let b = play_one(&dictionary, 77).unwrap();

        assert_eq!(a.secret, b.secret);
        assert_eq!(a.guesses, b.guesses);
        assert_eq!(a.won, b.won);
    }

    #[test]
    fn single_word_dictionary_wins_first_try() {
        let dictionary = Dictionary::new(["crane"]).unwrap();
        let record = play_one(&dictionary, 0).unwrap();

        assert!(record.won);
        assert_eq!(record.guesses, 1);
    }

    #[test]
    fn small_dictionary_always_wins() {
        // Three candidates can always be narrowed down within six guesses
        let dictionary = Dictionary::new(["crane", "slate", "trace"]).unwrap();
        let result = run_simulation(&dictionary, &config(25, 5)).unwrap();

        assert_eq!(result.wins, 25);
        assert!(result.hardest.is_empty());
    }

    #[test]
    fn empty_simulation() {
        let dictionary = Dictionary::new(["crane"]).unwrap();
        let result = run_simulation(&dictionary, &config(0, 0)).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.win_rate(), 0.0);
    }
}
