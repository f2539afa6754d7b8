//! jService-compatible HTTP category source

use super::wire::ApiCategory;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use trivia_application::{CategoryFetcher, FetchError};
use trivia_domain::{CategoryId, CategoryPayload};

const USER_AGENT: &str = concat!("TriviaBoard/", env!("CARGO_PKG_VERSION"));

/// Fetches categories from `GET {base_url}/api/category?id={id}`
pub struct HttpCategoryFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCategoryFetcher {
    /// Create a fetcher for the given API root.
    ///
    /// `request_timeout` bounds each HTTP request at the transport level.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a fetcher around an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!(
            "{}/api/category?id={}",
            self.base_url.trim_end_matches('/'),
            id
        )
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_decode() {
        FetchError::InvalidPayload(error.to_string())
    } else {
        FetchError::Connection(error.to_string())
    }
}

#[async_trait]
impl CategoryFetcher for HttpCategoryFetcher {
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload, FetchError> {
        let url = self.category_url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let category: ApiCategory = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidPayload(format!("category {}: {}", id, e)))?;

        Ok(category.into())
    }
}
