//! Output rendering for the board, clues and verdicts

pub mod console;
pub mod formatter;
