//! Candy Tiles (workspace facade crate).
//!
//! Re-exports the rules engine crates under one `candy_tiles::{core,level,types}`
//! path and hosts the pieces the `candy-tiles` binary is built from.

pub mod cli;
pub mod render;

pub use candy_tiles_core as core;
pub use candy_tiles_level as level;
pub use candy_tiles_types as types;
