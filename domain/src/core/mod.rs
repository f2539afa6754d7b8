//! Core domain concepts shared across all subdomains.
//!
//! - [`error::GameError`]: misuse of the board or the game state machine

pub mod error;
