//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: run detection, gravity, and spawning,
//! plus a [`Board`] that strings them together into a playable step.
//! It has **no I/O** and no global grid dimensions, making it:
//!
//! - **Deterministic**: Same seed produces identical spawns
//! - **Testable**: Every rule is a function from one layout to the next
//! - **Portable**: Can run behind any view layer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: grid dimensions, index arithmetic, adjacency
//! - [`matching`]: per-cell membership in lines of 3+
//! - [`gravity`]: settle pieces into empty tiled cells
//! - [`spawn`]: random candies for the remaining gaps
//! - [`tiles`]: destructible tile wear
//! - [`board`]: owned grid state and the swap/cascade cycle
//! - [`config`]: engine configuration from defaults or environment
//!
//! # Pipeline
//!
//! One player step runs:
//!
//! - **Adjacency check** gates the swap gesture
//! - **Match detection** decides whether the swap stands
//! - **Removal**, **gravity**, and **spawn** refill the grid
//! - **Match detection** again, repeating while new matches appear (cascades)
//!
//! The free functions never mutate their inputs; each returns a new layout.
//!
//! # Example
//!
//! ```
//! use candy_tiles_core::{detect_matches, reposition_items, spawn_items, GridDims};
//! use candy_tiles_core::types::{Color, Item, ItemKey, ItemKind, TileKind};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dims = GridDims::new(3, 2);
//! let tiles = vec![Some(TileKind::Normal); dims.len()];
//! let red = Some(Item::new(ItemKind::Candy(Color::Red), ItemKey(1)));
//! let items = vec![None, None, None, red, red, red];
//!
//! let matches = detect_matches(&dims, &items);
//! assert_eq!(matches.matched_indices(), vec![3, 4, 5]);
//!
//! let cleared = candy_tiles_core::remove_matched(&items, &matches);
//! let settled = reposition_items(&dims, &cleared, &tiles);
//! assert!(settled.moves.is_empty());
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let refilled = spawn_items(&dims, &settled.items, &tiles, &mut rng);
//! assert!(refilled.iter().all(|c| c.is_some()));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod matching;
pub mod spawn;
pub mod tiles;

pub use candy_tiles_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CascadeReport, CascadeWave, SwapOutcome};
pub use config::EngineConfig;
pub use error::{LayoutError, SwapError};
pub use gravity::{reposition_items, ItemMove, Reposition};
pub use grid::GridDims;
pub use matching::{detect_matches, remove_matched, run_counts, MatchData, MatchResult, RunCounts};
pub use spawn::{next_key, random_candy, random_color, spawn_items};
pub use tiles::{damage_tiles, TileDamage};
