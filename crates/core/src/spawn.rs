//! Spawn module - fresh candies for empty tiled cells
//!
//! Colors are drawn uniformly from [`PALETTE`]. Every spawned piece gets an
//! [`ItemKey`] from a process-wide counter, so keys never repeat across calls,
//! boards, or threads. Keys exist for view-layer identity only.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::grid::GridDims;
use crate::types::{Cell, Color, Item, ItemKey, ItemKind, Tile, PALETTE};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Allocate an instance key no other call has returned
pub fn next_key() -> ItemKey {
    ItemKey(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
}

/// Uniform pick from the palette
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// A plain candy with a random color and a fresh key
pub fn random_candy<R: Rng + ?Sized>(rng: &mut R) -> Item {
    Item::new(ItemKind::Candy(random_color(rng)), next_key())
}

/// Fill every tiled, empty cell with a random candy. The input is left untouched.
///
/// # Panics
///
/// Panics if `items` or `tiles` do not have `dims.len()` cells.
pub fn spawn_items<R: Rng + ?Sized>(
    dims: &GridDims,
    items: &[Cell],
    tiles: &[Tile],
    rng: &mut R,
) -> Vec<Cell> {
    assert_eq!(
        items.len(),
        dims.len(),
        "spawn_items: item array has {} cells, grid needs {}",
        items.len(),
        dims.len()
    );
    assert_eq!(
        tiles.len(),
        dims.len(),
        "spawn_items: tile array has {} cells, grid needs {}",
        tiles.len(),
        dims.len()
    );

    items
        .iter()
        .zip(tiles)
        .map(|(item, tile)| match (item, tile) {
            (None, Some(_)) => Some(random_candy(rng)),
            _ => *item,
        })
        .collect()
}
