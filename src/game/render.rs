//! Render events for presentation layers
//!
//! The engine scores a guess in one step. Presentation layers that want to
//! reveal tiles one by one schedule these events however they like; the
//! engine never waits on them.

use super::session::{GuessResult, Outcome};
use crate::core::LetterStatus;
use std::time::Duration;

/// Delay between consecutive tile flips
pub const TILE_STAGGER: Duration = Duration::from_millis(100);

/// Time a tile spends flipping before its status shows
pub const FLIP_DURATION: Duration = Duration::from_millis(250);

/// Delay before the outcome of a guess is shown
pub const OUTCOME_DELAY: Duration = Duration::from_millis(1000);

/// Show `status` on tile (`row`, `position`) once `delay` has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileReveal {
    pub row: usize,
    pub position: usize,
    /// Uppercase letter
    pub letter: char,
    pub status: LetterStatus,
    pub delay: Duration,
}

/// Ordered reveal schedule for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub reveals: Vec<TileReveal>,
    pub outcome: Outcome,
    pub outcome_delay: Duration,
}

impl RenderPlan {
    /// Schedule for a scored guess, left to right
    #[must_use]
    pub fn for_guess(result: &GuessResult) -> Self {
        let reveals = result
            .guess
            .chars()
            .iter()
            .zip(result.feedback.statuses())
            .enumerate()
            .map(|(position, (&letter, &status))| TileReveal {
                row: result.row,
                position,
                letter: char::from(letter.to_ascii_uppercase()),
                status,
                delay: TILE_STAGGER * position as u32 + FLIP_DURATION,
            })
            .collect();

        Self {
            reveals,
            outcome: result.outcome,
            outcome_delay: OUTCOME_DELAY,
        }
    }

    /// Time until the last event (tile or outcome) fires
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.reveals
            .iter()
            .map(|r| r.delay)
            .fold(self.outcome_delay, Duration::max)
    }
}

impl GuessResult {
    /// Reveal schedule for this guess
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::for_guess(self)
    }
}
