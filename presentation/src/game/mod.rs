//! Interactive game module
//!
//! Provides a readline-based game loop driving a [`GameSession`](trivia_domain::GameSession).

mod repl;

pub use repl::GameRepl;
