//! Phases of the active-clue state machine

use serde::{Deserialize, Serialize};

/// Phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No clue is open; the player may pick one
    Idle,
    /// A clue is open and waits for an answer
    ClueShown,
    /// The verdict for the active clue is on display
    AnswerRevealed,
}

impl GamePhase {
    pub fn as_str(&self) -> &str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::ClueShown => "clue_shown",
            GamePhase::AnswerRevealed => "answer_revealed",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::ClueShown => "clue shown",
            GamePhase::AnswerRevealed => "answer revealed",
        }
    }

    /// Whether a clue is active in this phase
    pub fn has_active_clue(&self) -> bool {
        !matches!(self, GamePhase::Idle)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Operations a renderer can issue against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOperation {
    SelectClue,
    SubmitAnswer,
    Dismiss,
}

impl std::fmt::Display for GameOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameOperation::SelectClue => "select a clue",
            GameOperation::SubmitAnswer => "submit an answer",
            GameOperation::Dismiss => "dismiss",
        };
        write!(f, "{}", name)
    }
}
