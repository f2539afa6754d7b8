//! Presentation layer for trivia-board
//!
//! This crate contains CLI definitions, board rendering,
//! build progress reporters, and the interactive game loop.

pub mod cli;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use game::GameRepl;
pub use output::{console::ConsoleFormatter, formatter::GameRenderer};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
