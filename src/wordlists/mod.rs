//! Word lists for the game
//!
//! Provides the embedded dictionary and validated `Dictionary` construction.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
