//! Level module - JSON level layouts and board snapshots
//!
//! A level file describes the starting grid:
//!
//! ```text
//! {
//!   "columns": 3,
//!   "rows": 2,
//!   "tiles": ["normal", "destructible", null, "normal", "normal", "normal"],
//!   "items": [{"type":"candy","color":"red"}, null, null, {"type":"chocolate"}, null, null]
//! }
//! ```
//!
//! - `tiles`: `null` for a hole, `"normal"`, `"destructible"`, or `"damaged"`
//!   (a destructible tile that already cracked)
//! - `items`: `null` for an empty cell, or an object with a `type` of `candy`,
//!   `supercandy`, `chocolate`, or `obstacle`, and a `color` for the first two
//!
//! Loaded pieces get fresh instance keys. [`Snapshot`] serializes a board back
//! into the same shape, which is what the CLI prints in `--json` mode.
//!
//! - See [`format`] for the file structures and conversions
//! - See [`report`] for the serialized cascade report

pub mod format;
pub mod report;

pub use candy_tiles_core as core;
pub use candy_tiles_types as types;

pub use format::{load_level, parse_level, ColorLower, ItemSpec, ItemTag, LevelFile, Snapshot, TileTag};
pub use report::{CascadeReportMessage, MoveMessage, SwapMessage, WaveMessage};
