//! Wordle Game
//!
//! A Wordle game engine: guess a secret five-letter word in six tries, with
//! per-letter feedback that handles repeated letters the way the real game does.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameSession, Outcome, ScriptedSelector};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::new(["crane", "trace", "slate"]).unwrap();
//! let selector = ScriptedSelector::new(["crane"]).unwrap();
//! let mut session = GameSession::start(&dictionary, selector).unwrap();
//!
//! for letter in "trace".chars() {
//!     session.enter_letter(letter).unwrap();
//! }
//! let result = session.submit_guess().unwrap();
//! assert_eq!(result.outcome, Outcome::Continue);
//! println!("{}", result.feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
