//! Game engine
//!
//! The session state machine, secret selection, and the pure result data that
//! presentation layers consume.

mod board;
mod error;
mod keyboard;
mod render;
mod selector;
mod session;

pub use board::{Board, Cell, Cursor, MAX_GUESSES};
pub use error::{GameError, Precondition};
pub use keyboard::{KeyStatusMap, KeyUpdate};
pub use render::{FLIP_DURATION, OUTCOME_DELAY, RenderPlan, TILE_STAGGER, TileReveal};
pub use selector::{RandomSelector, ScriptedSelector, WordSelector, pick_secret_word};
pub use session::{Finale, GameSession, GuessResult, Outcome};
