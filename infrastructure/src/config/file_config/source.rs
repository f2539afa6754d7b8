//! Category source configuration from TOML (`[source]` section)
//!
//! ```toml
//! [source]
//! kind = "http"                  # or "file"
//! base_url = "https://jservice.io"
//! timeout_secs = 10              # 0 disables the timeout
//! # path = "categories.json"     # required when kind = "file"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Public jService-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://jservice.io";

/// Where categories come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// jService-compatible HTTP API
    #[default]
    Http,
    /// Local JSON file
    File,
}

/// Raw source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    pub kind: SourceKind,
    /// Base URL of the HTTP API
    pub base_url: String,
    /// Per-category fetch timeout in seconds; `0` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Category file for `kind = "file"`
    pub path: Option<PathBuf>,
}

impl FileSourceConfig {
    /// Per-category fetch timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Http,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(10),
            path: None,
        }
    }
}
