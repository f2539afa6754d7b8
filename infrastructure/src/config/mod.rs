//! Configuration file loading for trivia-board
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./trivia.toml` or `./.trivia.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/trivia-board/config.toml`
//! 4. Fallback: `~/.config/trivia-board/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileSourceConfig, SourceKind,
};
pub use loader::ConfigLoader;
