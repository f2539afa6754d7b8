//! Renderer trait

use trivia_domain::{AnswerVerdict, Clue, ClueStore, GameSession};

/// Turns board and session state into text for display
///
/// The game loop only reads state through this trait, so a different
/// front end can replace the console output without touching the loop.
pub trait GameRenderer: Send + Sync {
    /// The board with every clue's value, used clues blanked out
    fn render_board(&self, store: &ClueStore) -> String;

    /// The prompt for a freshly selected clue
    fn render_clue(&self, category_title: &str, clue: &Clue) -> String;

    /// The judged answer
    fn render_verdict(&self, verdict: &AnswerVerdict) -> String;

    fn render_score(&self, score: i64) -> String;

    /// Summary once every clue has been played
    fn render_game_over(&self, session: &GameSession) -> String;
}
