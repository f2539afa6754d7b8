//! Game subdomain: the active-clue state machine and scoring.

pub mod phase;
pub mod session;
pub mod verdict;
