//! Local JSON category source
//!
//! Reads a file holding an array of jService-style category objects, each
//! with its `id`, for playing without network access:
//!
//! ```json
//! [
//!   { "id": 302, "title": "state capitals", "clues": [
//!     { "question": "...", "answer": "..." }
//!   ] }
//! ]
//! ```

use super::wire::ApiCategory;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use trivia_application::{CategoryFetcher, FetchError};
use trivia_domain::{CategoryId, CategoryPayload};

/// Errors raised while loading a category file
#[derive(Error, Debug)]
pub enum FileSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Category at index {index} in {path} has no id")]
    MissingId { path: PathBuf, index: usize },
}

/// Serves categories from an in-memory copy of a JSON file
#[derive(Debug, Clone, Default)]
pub struct FileCategoryFetcher {
    categories: HashMap<CategoryId, CategoryPayload>,
}

impl FileCategoryFetcher {
    /// Load every category in `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FileSourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FileSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let fetcher = Self::from_json(&content, path)?;
        info!(
            "Loaded {} categories from {}",
            fetcher.categories.len(),
            path.display()
        );
        Ok(fetcher)
    }

    fn from_json(content: &str, path: &Path) -> Result<Self, FileSourceError> {
        let entries: Vec<ApiCategory> =
            serde_json::from_str(content).map_err(|source| FileSourceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut categories = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let id = entry.id.ok_or_else(|| FileSourceError::MissingId {
                path: path.to_path_buf(),
                index,
            })?;
            categories.insert(id, CategoryPayload::from(entry));
        }
        Ok(Self { categories })
    }

    /// Build a fetcher from payloads already in memory
    pub fn from_payloads(payloads: impl IntoIterator<Item = (CategoryId, CategoryPayload)>) -> Self {
        Self {
            categories: payloads.into_iter().collect(),
        }
    }

    /// Ids available in this source, sorted
    pub fn category_ids(&self) -> Vec<CategoryId> {
        let mut ids: Vec<_> = self.categories.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl CategoryFetcher for FileCategoryFetcher {
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, FetchError> {
        debug!("Reading category {} from file source", id);
        self.categories
            .get(&id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use trivia_domain::CluePayload;

    const SAMPLE: &str = r#"[
        {"id": 1, "title": "rivers", "clues": [
            {"question": "Longest river in Africa", "answer": "the Nile"},
            {"question": "Flows through Vienna", "answer": "<i>Danube</i>"}
        ]},
        {"id": 2, "title": "planets", "clues": []}
    ]"#;

    #[tokio::test]
    async fn test_load_and_fetch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let fetcher = FileCategoryFetcher::from_path(file.path()).unwrap();
        assert_eq!(
            fetcher.category_ids(),
            vec![CategoryId::new(1), CategoryId::new(2)]
        );

        let payload = fetcher.fetch_category(CategoryId::new(1)).await.unwrap();
        assert_eq!(payload.title, "rivers");
        assert_eq!(
            payload.clues[1],
            CluePayload::new("Flows through Vienna", "<i>Danube</i>")
        );
    }

    #[tokio::test]
    async fn test_unknown_category_not_found() {
        let fetcher = FileCategoryFetcher::from_json(SAMPLE, Path::new("sample.json")).unwrap();
        let err = fetcher
            .fetch_category(CategoryId::new(99))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::NotFound(CategoryId::new(99)));
    }

    #[test]
    fn test_missing_file() {
        let err = FileCategoryFetcher::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FileSourceError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = FileCategoryFetcher::from_json("{ not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, FileSourceError::Parse { .. }));
    }

    #[test]
    fn test_category_without_id() {
        let err = FileCategoryFetcher::from_json(
            r#"[{"title": "anonymous", "clues": []}]"#,
            Path::new("anon.json"),
        )
        .unwrap_err();
        assert!(matches!(err, FileSourceError::MissingId { index: 0, .. }));
    }

    #[tokio::test]
    async fn test_from_payloads() {
        let fetcher = FileCategoryFetcher::from_payloads([(
            CategoryId::new(5),
            CategoryPayload::new("inline", vec![CluePayload::new("q", "a")]),
        )]);
        let payload = fetcher.fetch_category(CategoryId::new(5)).await.unwrap();
        assert_eq!(payload.title, "inline");
    }
}
