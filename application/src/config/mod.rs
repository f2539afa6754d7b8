//! Application-level configuration.
//!
//! - [`BoardParams`]: board assembly (column height, value ladder, fetch timeout)

pub mod board_params;

pub use board_params::{BoardParams, DEFAULT_CLUES_PER_CATEGORY};
