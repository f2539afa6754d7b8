//! Board subdomain: categories, clues and the clue store.
//!
//! - [`payload`]: raw category data as delivered by a fetcher
//! - [`entities`]: clues and categories placed on the board
//! - [`store::ClueStore`]: the authoritative clue database for one game

pub mod entities;
pub mod payload;
pub mod store;
