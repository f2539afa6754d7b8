//! REPL (Read-Eval-Print Loop) for playing a board

use crate::ConsoleFormatter;
use crate::output::formatter::GameRenderer;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::time::Duration;
use tracing::{debug, info};
use trivia_domain::{ClueId, GamePhase, GameSession};

/// Interactive game REPL
///
/// Owns the session and drives it from user input. The reveal timer lives
/// here: after a verdict is shown the REPL waits `reveal_delay` and then
/// dismisses the clue.
pub struct GameRepl {
    session: GameSession,
    renderer: Box<dyn GameRenderer>,
    reveal_delay: Duration,
}

impl GameRepl {
    /// Create a new GameRepl rendering to the console
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            renderer: Box::new(ConsoleFormatter),
            reveal_delay: Duration::from_secs(2),
        }
    }

    /// Set how long a revealed answer stays up before it is dismissed
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Replace the console renderer
    pub fn with_renderer(mut self, renderer: Box<dyn GameRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            let prompt = match self.session.phase() {
                GamePhase::ClueShown => "answer> ",
                GamePhase::Idle | GamePhase::AnswerRevealed => "pick> ",
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    if !line.is_empty() {
                        let _ = rl.add_history_entry(line);
                    }

                    if self.session.phase() == GamePhase::ClueShown {
                        self.process_answer(line).await;
                    } else if !line.is_empty() {
                        self.process_pick(line);
                    }

                    if self.session.phase() == GamePhase::Idle && self.session.is_board_cleared()
                    {
                        println!("{}", self.renderer.render_game_over(&self.session));
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        info!("Game ended with score {}", self.session.score());
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                Trivia Board                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Pick a clue by its id (e.g. 0-3), then type your answer.");
        println!("Type /help for commands.");
        println!();
        println!("{}", self.renderer.render_board(self.session.store()));
        println!("{}", self.renderer.render_score(self.session.score()));
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("{}", self.renderer.render_score(self.session.score()));
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  <cat>-<clue>     - Pick a clue, e.g. 0-3");
                println!("  /board, /b       - Show the board");
                println!("  /score, /s       - Show your score");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit the game");
                println!();
                false
            }
            "/board" | "/b" => {
                println!();
                println!("{}", self.renderer.render_board(self.session.store()));
                false
            }
            "/score" | "/s" => {
                println!("{}", self.renderer.render_score(self.session.score()));
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn process_pick(&mut self, input: &str) {
        let id: ClueId = match input.parse() {
            Ok(id) => id,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        };

        if let Err(e) = self.session.select_clue(id) {
            debug!("Rejected pick {}: {}", id, e);
            println!("{}", e.to_string().red());
            return;
        }
        debug!("Clue {} selected", id);

        let title = self
            .session
            .store()
            .categories()
            .get(id.category())
            .map(|c| c.title())
            .unwrap_or_default();
        if let Some(clue) = self.session.active_clue() {
            println!("{}", self.renderer.render_clue(title, clue));
        }
    }

    async fn process_answer(&mut self, input: &str) {
        let verdict = match self.session.submit_answer(input) {
            Ok(verdict) => verdict,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        };
        debug!(
            "Clue {} answered: correct={}, awarded={}",
            verdict.clue_id, verdict.correct, verdict.awarded
        );

        println!("{}", self.renderer.render_verdict(&verdict));
        println!("{}", self.renderer.render_score(verdict.score));

        tokio::time::sleep(self.reveal_delay).await;
        if let Err(e) = self.session.dismiss() {
            println!("{}", e.to_string().red());
            return;
        }

        if !self.session.is_board_cleared() {
            println!();
            println!("{}", self.renderer.render_board(self.session.store()));
        }
    }
}
