//! Game configuration from TOML (`[game]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [game]
//! categories = [302, 486, 1838, 518]
//! clues_per_category = 5
//! value_step = 100
//! reveal_delay_ms = 2000
//! ```

use serde::{Deserialize, Serialize};
use trivia_application::DEFAULT_CLUES_PER_CATEGORY;
use trivia_domain::{CategoryId, DEFAULT_VALUE_STEP};

/// Categories used when none are configured
pub const DEFAULT_CATEGORIES: [u64; 4] = [302, 486, 1838, 518];

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Category ids in board column order
    pub categories: Vec<CategoryId>,
    /// Clues kept per category
    pub clues_per_category: usize,
    /// Value of the first clue in each column
    pub value_step: u32,
    /// How long a revealed answer stays on screen before it is dismissed
    pub reveal_delay_ms: u64,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.into_iter().map(CategoryId::new).collect(),
            clues_per_category: DEFAULT_CLUES_PER_CATEGORY,
            value_step: DEFAULT_VALUE_STEP,
            reveal_delay_ms: 2000,
        }
    }
}
