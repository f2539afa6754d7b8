//! Result of judging an answer

use crate::board::entities::ClueId;
use serde::{Deserialize, Serialize};

/// Outcome of [`GameSession::submit_answer`](super::session::GameSession::submit_answer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVerdict {
    /// The clue that was answered
    pub clue_id: ClueId,
    /// Whether the normalized answers matched
    pub correct: bool,
    /// Canonical answer text, for display
    pub canonical_answer: String,
    /// Points added to the score (0 when incorrect)
    pub awarded: u32,
    /// Score after this answer
    pub score: i64,
}
