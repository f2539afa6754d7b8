//! Category source adapters
//!
//! Implementations of the [`CategoryFetcher`](trivia_application::CategoryFetcher) port:
//!
//! - [`http::HttpCategoryFetcher`]: jService-compatible HTTP API
//! - [`file::FileCategoryFetcher`]: categories from a local JSON file

pub mod file;
pub mod http;
mod wire;
