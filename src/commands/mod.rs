//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreResult, score_guess};
pub use simple::{play_lines, run_simple};
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_one, run_simulation};
