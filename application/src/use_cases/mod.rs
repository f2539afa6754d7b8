//! Use cases (application services)

pub mod build_board;
