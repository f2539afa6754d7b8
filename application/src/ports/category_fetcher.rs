//! Category fetcher port
//!
//! Defines the interface for retrieving raw category data from a source.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{CategoryId, CategoryPayload};

/// Errors that can occur while fetching a category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Source of category payloads
///
/// Implementations (adapters) live in the infrastructure layer. Retry and
/// backoff, if any, are the adapter's concern; the board builder calls each
/// id exactly once.
#[async_trait]
pub trait CategoryFetcher: Send + Sync {
    /// Fetch the title and full clue list of one category
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, FetchError>;
}
