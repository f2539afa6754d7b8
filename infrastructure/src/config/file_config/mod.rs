//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod source;

pub use game::{DEFAULT_CATEGORIES, FileGameConfig};
pub use source::{DEFAULT_BASE_URL, FileSourceConfig, SourceKind};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use trivia_application::BoardParams;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.categories cannot be empty")]
    EmptyCategories,

    #[error("game.clues_per_category cannot be 0")]
    ZeroCluesPerCategory,

    #[error("game.value_step cannot be 0")]
    ZeroValueStep,

    #[error("source.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("source.path is required when source.kind = \"file\"")]
    MissingSourcePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Board and gameplay settings
    pub game: FileGameConfig,
    /// Category source settings
    pub source: FileSourceConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.categories.is_empty() {
            return Err(ConfigValidationError::EmptyCategories);
        }
        if self.game.clues_per_category == 0 {
            return Err(ConfigValidationError::ZeroCluesPerCategory);
        }
        if self.game.value_step == 0 {
            return Err(ConfigValidationError::ZeroValueStep);
        }
        match self.source.kind {
            SourceKind::Http if self.source.base_url.trim().is_empty() => {
                Err(ConfigValidationError::EmptyBaseUrl)
            }
            SourceKind::File if self.source.path.is_none() => {
                Err(ConfigValidationError::MissingSourcePath)
            }
            _ => Ok(()),
        }
    }

    /// Board assembly parameters derived from `[game]` and `[source]`
    pub fn board_params(&self) -> BoardParams {
        BoardParams::default()
            .with_clues_per_category(self.game.clues_per_category)
            .with_value_step(self.game.value_step)
            .with_fetch_timeout(self.source.timeout())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.game.reveal_delay_ms)
    }
}
