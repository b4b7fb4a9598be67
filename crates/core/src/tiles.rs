//! Tiles module - destructible tile wear
//!
//! A destructible tile under a matched piece cracks on the first match and is
//! destroyed on the second, leaving a normal tile behind. Tile presence never
//! changes here; holes stay holes.

use crate::matching::MatchResult;
use crate::types::{Tile, TileKind};

/// Tile layout after one wave of matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDamage {
    pub tiles: Vec<Tile>,
    /// Indices whose destructible tile was destroyed this wave
    pub destroyed: Vec<usize>,
}

/// Apply one wave of matches to the tile layout. The input is left untouched.
pub fn damage_tiles(tiles: &[Tile], matches: &MatchResult) -> TileDamage {
    let mut out = tiles.to_vec();
    let mut destroyed = Vec::new();

    for m in matches.cells.iter().filter(|m| m.matched) {
        let Some(slot) = out.get_mut(m.index) else {
            continue;
        };
        match slot {
            Some(TileKind::Destructible { damaged: false }) => {
                *slot = Some(TileKind::Destructible { damaged: true });
            }
            Some(TileKind::Destructible { damaged: true }) => {
                *slot = Some(TileKind::Normal);
                destroyed.push(m.index);
            }
            Some(TileKind::Normal) | None => {}
        }
    }

    TileDamage {
        tiles: out,
        destroyed,
    }
}
