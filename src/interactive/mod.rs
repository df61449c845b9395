//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, PendingReveal, Statistics, run_tui};
