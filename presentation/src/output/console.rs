//! Console output formatter for the board

use crate::output::formatter::GameRenderer;
use colored::Colorize;
use trivia_domain::{AnswerVerdict, Clue, ClueStore, GameSession};

/// Width of one board column in characters
const COLUMN_WIDTH: usize = 18;

const COLUMN_SEPARATOR: &str = " | ";

/// Formats board state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the board as columns, one per category
    pub fn format_board(store: &ClueStore) -> String {
        let categories = store.categories();
        if categories.is_empty() {
            return format!("{}\n", "(empty board)".dimmed());
        }

        let mut output = String::new();

        let headers: Vec<String> = categories
            .iter()
            .map(|c| {
                let title = fit(&c.title().to_uppercase(), COLUMN_WIDTH);
                format!("{:^width$}", title, width = COLUMN_WIDTH)
                    .cyan()
                    .bold()
                    .to_string()
            })
            .collect();
        output.push_str(&headers.join(COLUMN_SEPARATOR));
        output.push('\n');

        let rule = vec!["-".repeat(COLUMN_WIDTH); categories.len()];
        output.push_str(&rule.join(COLUMN_SEPARATOR));
        output.push('\n');

        let rows = categories
            .iter()
            .map(|c| c.clue_ids().len())
            .max()
            .unwrap_or(0);

        for row in 0..rows {
            let cells: Vec<String> = categories
                .iter()
                .map(|category| {
                    let clue = category
                        .clue_ids()
                        .get(row)
                        .and_then(|id| store.get_clue(*id).ok());
                    match clue {
                        Some(clue) if clue.is_used() => {
                            format!("{:^width$}", "--", width = COLUMN_WIDTH)
                                .dimmed()
                                .to_string()
                        }
                        Some(clue) => {
                            let cell = format!("[{}] ${}", clue.id(), clue.value());
                            format!("{:^width$}", cell, width = COLUMN_WIDTH)
                                .yellow()
                                .to_string()
                        }
                        None => " ".repeat(COLUMN_WIDTH),
                    }
                })
                .collect();
            output.push_str(&cells.join(COLUMN_SEPARATOR));
            output.push('\n');
        }

        output
    }

    /// Format the prompt for a selected clue
    pub fn format_clue(category_title: &str, clue: &Clue) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── {} for ${} ──", category_title.to_uppercase(), clue.value())
                .yellow()
                .bold(),
            clue.question()
        )
    }

    /// Format the verdict for a submitted answer
    pub fn format_verdict(verdict: &AnswerVerdict) -> String {
        if verdict.correct {
            format!(
                "{} {}\n",
                "Correct!".green().bold(),
                format!("+${}", verdict.awarded).green()
            )
        } else {
            format!(
                "{} The correct answer was: {}\n",
                "Incorrect.".red().bold(),
                display_answer(&verdict.canonical_answer).bold()
            )
        }
    }

    pub fn format_score(score: i64) -> String {
        format!("{} ${}", "Score:".cyan().bold(), score)
    }

    /// Format the end-of-game summary
    pub fn format_game_over(session: &GameSession) -> String {
        let line = "=".repeat(40);
        format!(
            "\n{}\n{:^40}\n{:^40}\n{}\n",
            line.cyan(),
            "Board cleared!".bold(),
            format!("Final score: ${}", session.score()),
            line.cyan()
        )
    }
}

impl GameRenderer for ConsoleFormatter {
    fn render_board(&self, store: &ClueStore) -> String {
        Self::format_board(store)
    }

    fn render_clue(&self, category_title: &str, clue: &Clue) -> String {
        Self::format_clue(category_title, clue)
    }

    fn render_verdict(&self, verdict: &AnswerVerdict) -> String {
        Self::format_verdict(verdict)
    }

    fn render_score(&self, score: i64) -> String {
        Self::format_score(score)
    }

    fn render_game_over(&self, session: &GameSession) -> String {
        Self::format_game_over(session)
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with `…`
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}

/// Canonical answers may carry italics markup; show them without it
fn display_answer(answer: &str) -> String {
    answer.replace("<i>", "").replace("</i>", "")
}
