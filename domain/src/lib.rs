//! Domain layer for trivia-board
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Board
//!
//! A board is an ordered set of categories, each holding a fixed column of
//! clues. The [`ClueStore`] owns every clue and is built once per game.
//!
//! ## Game Session
//!
//! The [`GameSession`] tracks the running score and the active clue:
//!
//! - **Idle**: no clue is open, the player may pick one
//! - **ClueShown**: a clue is open and waits for an answer
//! - **AnswerRevealed**: the verdict is on screen until dismissed

pub mod answer;
pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use answer::normalizer::{judge, normalize};
pub use board::{
    entities::{Category, CategoryHandle, Clue, ClueId, ParseClueIdError},
    payload::{CategoryId, CategoryPayload, CluePayload},
    store::{ClueStore, DEFAULT_VALUE_STEP},
};
pub use core::error::GameError;
pub use game::{
    phase::{GameOperation, GamePhase},
    session::GameSession,
    verdict::AnswerVerdict,
};
