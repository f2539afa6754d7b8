//! Answer judging.
//!
//! Player input and canonical answers are both passed through
//! [`normalizer::normalize`] and compared for strict equality.

pub mod normalizer;
