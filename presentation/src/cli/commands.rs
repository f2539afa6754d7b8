//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-board
#[derive(Parser, Debug)]
#[command(name = "trivia-board")]
#[command(author, version, about = "Single-player trivia board in the terminal")]
#[command(long_about = r#"
Trivia Board fetches a set of categories, lays their clues out on a board,
and lets you pick clues in any order. Answers are judged leniently: case,
spacing, quotes, italics markup and a leading "a"/"an" are ignored.

Pick a clue by typing its id (e.g. 2-4), then type your answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trivia.toml       Project-level config
3. ~/.config/trivia-board/config.toml   Global config

Example:
  trivia-board
  trivia-board -c 302 -c 486 -c 1838 --clues 3
  trivia-board --offline categories.json --seed 7
"#)]
pub struct Cli {
    /// Category ids to play (can be specified multiple times)
    #[arg(short, long = "category", value_name = "ID")]
    pub categories: Vec<u64>,

    /// Number of clues per category
    #[arg(long, value_name = "N")]
    pub clues: Option<usize>,

    /// Base URL of a jService-compatible API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Load categories from a local JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub offline: Option<PathBuf>,

    /// Seed for the clue shuffle (same seed, same board)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// How long a revealed answer stays on screen, in milliseconds
    #[arg(long, value_name = "MS")]
    pub reveal_delay: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
