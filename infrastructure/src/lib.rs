//! Infrastructure layer for trivia-board
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sources;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileSourceConfig, SourceKind,
};
pub use sources::{
    file::{FileCategoryFetcher, FileSourceError},
    http::HttpCategoryFetcher,
};
