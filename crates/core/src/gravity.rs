//! Gravity module - settle pieces downward into empty tiled cells
//!
//! Cells are visited from the highest index to the lowest (bottom row first).
//! Each tiled, empty cell pulls down the nearest piece above it in the same
//! column, looking past empty cells and holes. Because every cell below has
//! already settled by the time a cell is visited, a single pass resolves any
//! number of stacked gaps.

use crate::grid::GridDims;
use crate::types::{Cell, Tile};

/// A piece that fell during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMove {
    /// Source index the piece fell from
    pub index: usize,
    /// Cells traveled downward
    pub tiles_to_move: usize,
}

impl ItemMove {
    /// Index the piece landed on
    pub fn target(&self, dims: &GridDims) -> usize {
        self.index + self.tiles_to_move * dims.columns
    }
}

/// New layout after gravity plus one record per fallen piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reposition {
    pub items: Vec<Cell>,
    /// In the order pieces were moved (lowest destination first)
    pub moves: Vec<ItemMove>,
}

/// Nearest occupied tiled cell above `index`, with the distance to it
fn item_above(dims: &GridDims, items: &[Cell], tiles: &[Tile], index: usize) -> Option<(usize, usize)> {
    let mut distance = 1;
    let mut cursor = index.checked_sub(dims.columns);
    while let Some(above) = cursor {
        if tiles[above].is_some() && items[above].is_some() {
            return Some((above, distance));
        }
        cursor = above.checked_sub(dims.columns);
        distance += 1;
    }
    None
}

/// Let pieces fall into empty tiled cells. The input is left untouched.
///
/// Cells nothing can fall into stay empty for the spawner to fill.
///
/// # Panics
///
/// Panics if `items` or `tiles` do not have `dims.len()` cells.
pub fn reposition_items(dims: &GridDims, items: &[Cell], tiles: &[Tile]) -> Reposition {
    assert_eq!(
        items.len(),
        dims.len(),
        "reposition_items: item array has {} cells, grid needs {}",
        items.len(),
        dims.len()
    );
    assert_eq!(
        tiles.len(),
        dims.len(),
        "reposition_items: tile array has {} cells, grid needs {}",
        tiles.len(),
        dims.len()
    );

    let mut out = items.to_vec();
    let mut moves = Vec::new();

    for index in (0..out.len()).rev() {
        if tiles[index].is_none() || out[index].is_some() {
            continue;
        }
        if let Some((source, distance)) = item_above(dims, &out, tiles, index) {
            out[index] = out[source].take();
            moves.push(ItemMove {
                index: source,
                tiles_to_move: distance,
            });
        }
    }

    Reposition { items: out, moves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Item, ItemKey, ItemKind, TileKind};

    fn candy(key: u64) -> Cell {
        Some(Item::new(ItemKind::Candy(Color::Red), ItemKey(key)))
    }

    #[test]
    fn test_full_grid_does_not_move() {
        let dims = GridDims::new(2, 2);
        let items = vec![candy(1), candy(2), candy(3), candy(4)];
        let tiles = vec![Some(TileKind::Normal); 4];
        let result = reposition_items(&dims, &items, &tiles);
        assert_eq!(result.items, items);
        assert!(result.moves.is_empty());
    }

    #[test]
    fn test_single_gap_pulls_piece_down_one() {
        let dims = GridDims::new(1, 3);
        let items = vec![candy(1), candy(2), None];
        let tiles = vec![Some(TileKind::Normal); 3];
        let result = reposition_items(&dims, &items, &tiles);
        assert_eq!(result.items, vec![None, candy(1), candy(2)]);
        assert_eq!(
            result.moves,
            vec![
                ItemMove {
                    index: 1,
                    tiles_to_move: 1
                },
                ItemMove {
                    index: 0,
                    tiles_to_move: 1
                },
            ]
        );
    }

    #[test]
    fn test_piece_falls_through_hole() {
        // column: piece, hole, empty
        let dims = GridDims::new(1, 3);
        let items = vec![candy(1), None, None];
        let tiles = vec![Some(TileKind::Normal), None, Some(TileKind::Normal)];
        let result = reposition_items(&dims, &items, &tiles);
        assert_eq!(result.items, vec![None, None, candy(1)]);
        assert_eq!(result.moves[0].target(&dims), 2);
        assert_eq!(result.moves[0].tiles_to_move, 2);
    }

    #[test]
    fn test_columns_are_independent() {
        let dims = GridDims::new(2, 2);
        let items = vec![candy(1), None, None, candy(4)];
        let tiles = vec![Some(TileKind::Normal); 4];
        let result = reposition_items(&dims, &items, &tiles);
        assert_eq!(result.items, vec![None, None, candy(1), candy(4)]);
        assert_eq!(result.moves.len(), 1);
    }

    #[test]
    #[should_panic(expected = "tile array")]
    fn test_tile_length_mismatch_panics() {
        let dims = GridDims::new(2, 2);
        reposition_items(&dims, &[None; 4], &[None; 3]);
    }
}
