//! Game session (Entity)
//!
//! Holds the board, the running score and the active-clue state machine:
//!
//! ```text
//! Idle ──select_clue──▶ ClueShown ──submit_answer──▶ AnswerRevealed
//!  ▲                                                   │      │
//!  └──────────────────────dismiss──────────────────────┘      │
//!                 ClueShown ◀──────select_clue────────────────┘
//! ```
//!
//! Every operation is synchronous. A failed operation leaves the session
//! untouched.

use super::phase::{GameOperation, GamePhase};
use super::verdict::AnswerVerdict;
use crate::answer::normalizer::judge;
use crate::board::entities::{Clue, ClueId};
use crate::board::store::ClueStore;
use crate::core::error::GameError;

/// Active-clue state; the clue id only exists in phases that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveState {
    Idle,
    ClueShown(ClueId),
    AnswerRevealed(ClueId),
}

/// One player's game over a single board
#[derive(Debug, Clone)]
pub struct GameSession {
    store: ClueStore,
    score: i64,
    state: ActiveState,
}

impl GameSession {
    pub fn new(store: ClueStore) -> Self {
        Self {
            store,
            score: 0,
            state: ActiveState::Idle,
        }
    }

    /// The board this session plays on
    pub fn store(&self) -> &ClueStore {
        &self.store
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        match self.state {
            ActiveState::Idle => GamePhase::Idle,
            ActiveState::ClueShown(_) => GamePhase::ClueShown,
            ActiveState::AnswerRevealed(_) => GamePhase::AnswerRevealed,
        }
    }

    /// The clue currently on display, if any
    pub fn active_clue(&self) -> Option<&Clue> {
        let id = self.active_clue_id()?;
        self.store.get_clue(id).ok()
    }

    pub fn active_clue_id(&self) -> Option<ClueId> {
        match self.state {
            ActiveState::Idle => None,
            ActiveState::ClueShown(id) | ActiveState::AnswerRevealed(id) => Some(id),
        }
    }

    /// True once every clue on the board has been used
    pub fn is_board_cleared(&self) -> bool {
        self.store.remaining() == 0
    }

    /// Open a clue.
    ///
    /// Allowed from `Idle` and `AnswerRevealed`. The clue is marked used the
    /// moment it becomes active, so it can never be shown twice.
    pub fn select_clue(&mut self, id: ClueId) -> Result<&Clue, GameError> {
        if let ActiveState::ClueShown(_) = self.state {
            return Err(GameError::InvalidStateTransition {
                phase: self.phase(),
                operation: GameOperation::SelectClue,
            });
        }

        if self.store.get_clue(id)?.is_used() {
            return Err(GameError::ClueAlreadyUsed(id));
        }

        self.store.mark_used(id)?;
        self.state = ActiveState::ClueShown(id);
        self.store.get_clue(id)
    }

    /// Judge an answer for the active clue.
    ///
    /// A correct answer adds the clue's value to the score; an incorrect one
    /// leaves the score unchanged.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerVerdict, GameError> {
        let ActiveState::ClueShown(id) = self.state else {
            return Err(GameError::NoActiveClue {
                phase: self.phase(),
            });
        };

        let clue = self.store.get_clue(id)?;
        let correct = judge(raw, clue.answer());
        let awarded = if correct { clue.value() } else { 0 };
        let canonical_answer = clue.answer().to_string();

        self.score += i64::from(awarded);
        self.state = ActiveState::AnswerRevealed(id);

        Ok(AnswerVerdict {
            clue_id: id,
            correct,
            canonical_answer,
            awarded,
            score: self.score,
        })
    }

    /// Close the revealed answer and return to `Idle`.
    pub fn dismiss(&mut self) -> Result<(), GameError> {
        match self.state {
            ActiveState::AnswerRevealed(_) => {
                self.state = ActiveState::Idle;
                Ok(())
            }
            _ => Err(GameError::InvalidStateTransition {
                phase: self.phase(),
                operation: GameOperation::Dismiss,
            }),
        }
    }
}
