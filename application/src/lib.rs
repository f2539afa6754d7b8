//! Application layer for trivia-board
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BoardParams, DEFAULT_CLUES_PER_CATEGORY};
pub use ports::{
    category_fetcher::{CategoryFetcher, FetchError},
    progress::{BuildProgressNotifier, NoProgress},
};
pub use use_cases::build_board::{
    BuildBoardError, BuildBoardInput, BuildBoardUseCase, CategoryFetchFailure,
};
