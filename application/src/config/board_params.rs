//! Board parameters: how a board is assembled from fetched categories.

use std::time::Duration;
use trivia_domain::DEFAULT_VALUE_STEP;

/// Default number of clues per category column
pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;

/// Board assembly parameters.
///
/// Controls the column height, the value ladder, how long a single category
/// fetch may take and whether the clue shuffle is seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardParams {
    /// Number of clues kept per category after shuffling.
    pub clues_per_category: usize,
    /// Value of the first clue; clue `n` is worth `(n + 1) * value_step`.
    pub value_step: u32,
    /// Upper bound for each category fetch. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// Seed for the clue shuffle. `None` draws from OS entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            clues_per_category: DEFAULT_CLUES_PER_CATEGORY,
            value_step: DEFAULT_VALUE_STEP,
            fetch_timeout: None,
            shuffle_seed: None,
        }
    }
}

impl BoardParams {
    // ==================== Builder Methods ====================

    pub fn with_clues_per_category(mut self, count: usize) -> Self {
        self.clues_per_category = count;
        self
    }

    pub fn with_value_step(mut self, step: u32) -> Self {
        self.value_step = step;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }
}
