//! Domain error types

use crate::board::entities::ClueId;
use crate::game::phase::{GameOperation, GamePhase};
use thiserror::Error;

/// Errors raised by the clue store and the game session.
///
/// All of them describe a caller contract violation (an unknown clue, a clue
/// picked twice, an operation issued out of phase). None are fatal: the
/// session is left exactly as it was before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Clue not found: {0}")]
    ClueNotFound(ClueId),

    #[error("Clue already used: {0}")]
    ClueAlreadyUsed(ClueId),

    #[error("No active clue (phase: {phase})")]
    NoActiveClue { phase: GamePhase },

    #[error("Cannot {operation} while in phase {phase}")]
    InvalidStateTransition {
        phase: GamePhase,
        operation: GameOperation,
    },
}

impl GameError {
    /// Check if this error is a phase violation rather than a bad clue id
    pub fn is_phase_error(&self) -> bool {
        matches!(
            self,
            GameError::NoActiveClue { .. } | GameError::InvalidStateTransition { .. }
        )
    }
}
