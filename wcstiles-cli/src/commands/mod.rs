//! CLI command implementations.

pub mod common;
pub mod tiles;
pub mod url;
