//! Progress reporting while the board is built

pub mod reporter;
