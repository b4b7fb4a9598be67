//! Board module - owns one grid and drives the match/fall/spawn cycle
//!
//! The board holds the tile layout, the item layout, and the RNG used for
//! spawns. A swap gesture runs the whole step:
//!
//! 1. Reject anything that is not a swap of two neighboring, tiled, swappable pieces
//! 2. Swap, then scan for matches
//! 3. No match: swap back and report [`SwapOutcome::Reverted`]
//! 4. Match: remove, wear tiles, settle, spawn, scan again until stable
//!
//! The swap check uses [`GridDims::are_neighbors`], not the raw
//! [`GridDims::is_adjacent`], so a row-end cell cannot swap with the first cell
//! of the next row.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::error::{LayoutError, SwapError};
use crate::gravity::{reposition_items, ItemMove};
use crate::grid::GridDims;
use crate::matching::{detect_matches, remove_matched, MatchResult};
use crate::spawn::spawn_items;
use crate::tiles::damage_tiles;
use crate::types::{Cell, Tile, TileKind};

/// Everything that happened in one cascade wave
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeWave {
    /// Pieces removed by this wave, ascending
    pub matched: Vec<usize>,
    /// Destructible tiles destroyed by this wave
    pub destroyed_tiles: Vec<usize>,
    pub moves: Vec<ItemMove>,
    /// Cells that received a fresh candy
    pub spawned: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub waves: Vec<CascadeWave>,
    /// True when the wave limit stopped resolution with matches still on the board
    pub truncated: bool,
}

impl CascadeReport {
    pub fn removed_count(&self) -> usize {
        self.waves.iter().map(|w| w.matched.len()).sum()
    }
}

/// Result of an accepted swap gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Nothing matched; the pieces are back where they started
    Reverted,
    Resolved(CascadeReport),
}

#[derive(Debug, Clone)]
pub struct Board {
    dims: GridDims,
    tiles: Vec<Tile>,
    items: Vec<Cell>,
    rng: StdRng,
    max_cascade_waves: usize,
}

impl Board {
    /// Build a board from an external layout, validating its shape
    pub fn new(config: &EngineConfig, tiles: Vec<Tile>, items: Vec<Cell>) -> Result<Self, LayoutError> {
        let dims = config.dims;
        validate_layout(&dims, &tiles, &items)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            dims,
            tiles,
            items,
            rng,
            max_cascade_waves: config.max_cascade_waves,
        })
    }

    /// A board with a normal tile in every cell and no pieces
    pub fn empty(config: &EngineConfig) -> Result<Self, LayoutError> {
        let len = checked_len(&config.dims)?;
        Self::new(config, vec![Some(TileKind::Normal); len], vec![None; len])
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn items(&self) -> &[Cell] {
        &self.items
    }

    /// Get the item at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.items.get(index).copied()
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Place or clear a piece
    /// Returns false if out of bounds or if the cell has no tile
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.tiles.get(index) {
            Some(Some(_)) => {
                self.items[index] = cell;
                true
            }
            _ => false,
        }
    }

    /// Spawn into every empty tiled cell. Returns how many cells were filled.
    pub fn fill(&mut self) -> usize {
        let before = self.empty_tiled_count();
        self.items = spawn_items(&self.dims, &self.items, &self.tiles, &mut self.rng);
        before
    }

    pub fn matches(&self) -> MatchResult {
        detect_matches(&self.dims, &self.items)
    }

    fn empty_tiled_count(&self) -> usize {
        self.items
            .iter()
            .zip(&self.tiles)
            .filter(|(item, tile)| item.is_none() && tile.is_some())
            .count()
    }

    fn check_swappable(&self, index: usize) -> Result<(), SwapError> {
        let len = self.dims.len();
        if index >= len {
            return Err(SwapError::OutOfRange { index, len });
        }
        if self.tiles[index].is_none() {
            return Err(SwapError::NoTile { index });
        }
        match self.items[index] {
            None => Err(SwapError::Empty { index }),
            Some(item) if !item.kind.is_swappable() => Err(SwapError::NotSwappable { index }),
            Some(_) => Ok(()),
        }
    }

    /// Attempt a player swap between `a` and `b`.
    ///
    /// Errors leave the board untouched. An accepted swap either reverts (no
    /// match) or resolves every cascade it triggers.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<SwapOutcome, SwapError> {
        self.check_swappable(a)?;
        self.check_swappable(b)?;
        if !self.dims.are_neighbors(a, b) {
            return Err(SwapError::NotNeighbors { a, b });
        }

        self.items.swap(a, b);
        if !self.matches().any_match {
            self.items.swap(a, b);
            return Ok(SwapOutcome::Reverted);
        }

        Ok(SwapOutcome::Resolved(self.resolve_cascade()))
    }

    /// One wave: remove matches, wear tiles, settle, spawn.
    /// Returns None when the board has no matches.
    pub fn step(&mut self) -> Option<CascadeWave> {
        let matches = self.matches();
        if !matches.any_match {
            return None;
        }

        let removed = remove_matched(&self.items, &matches);
        let damage = damage_tiles(&self.tiles, &matches);
        self.tiles = damage.tiles;

        let settled = reposition_items(&self.dims, &removed, &self.tiles);
        let spawned: Vec<usize> = settled
            .items
            .iter()
            .zip(&self.tiles)
            .enumerate()
            .filter(|(_, (item, tile))| item.is_none() && tile.is_some())
            .map(|(index, _)| index)
            .collect();
        self.items = spawn_items(&self.dims, &settled.items, &self.tiles, &mut self.rng);

        Some(CascadeWave {
            matched: matches.matched_indices(),
            destroyed_tiles: damage.destroyed,
            moves: settled.moves,
            spawned,
        })
    }

    /// Run waves until the board is stable or the wave limit is hit
    pub fn resolve_cascade(&mut self) -> CascadeReport {
        let mut report = CascadeReport::default();
        while report.waves.len() < self.max_cascade_waves {
            match self.step() {
                Some(wave) => report.waves.push(wave),
                None => return report,
            }
        }
        report.truncated = self.matches().any_match;
        report
    }
}

/// Cell count of a non-empty grid whose size fits in `usize`
fn checked_len(dims: &GridDims) -> Result<usize, LayoutError> {
    if dims.is_empty() {
        return Err(LayoutError::EmptyGrid {
            columns: dims.columns,
            rows: dims.rows,
        });
    }
    dims.checked_len().ok_or(LayoutError::DimensionsOverflow {
        columns: dims.columns,
        rows: dims.rows,
    })
}

fn validate_layout(dims: &GridDims, tiles: &[Tile], items: &[Cell]) -> Result<(), LayoutError> {
    let len = checked_len(dims)?;
    if tiles.len() != len {
        return Err(LayoutError::LengthMismatch {
            array: "tile",
            actual: tiles.len(),
            expected: len,
        });
    }
    if items.len() != len {
        return Err(LayoutError::LengthMismatch {
            array: "item",
            actual: items.len(),
            expected: len,
        });
    }
    if let Some(index) = items
        .iter()
        .zip(tiles)
        .position(|(item, tile)| item.is_some() && tile.is_none())
    {
        return Err(LayoutError::ItemOnHole { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Item, ItemKey, ItemKind};

    fn candy(color: Color) -> Cell {
        Some(Item::new(ItemKind::Candy(color), ItemKey(0)))
    }

    fn config(columns: usize, rows: usize) -> EngineConfig {
        EngineConfig {
            dims: GridDims::new(columns, rows),
            seed: Some(3),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_layout_validation() {
        let cfg = config(2, 2);
        let tiles = vec![Some(TileKind::Normal); 4];

        assert!(matches!(
            Board::new(&cfg, tiles.clone(), vec![None; 3]),
            Err(LayoutError::LengthMismatch { array: "item", .. })
        ));

        let mut holey = tiles.clone();
        holey[1] = None;
        let mut items = vec![None; 4];
        items[1] = candy(Color::Red);
        assert_eq!(
            Board::new(&cfg, holey, items).unwrap_err(),
            LayoutError::ItemOnHole { index: 1 }
        );

        assert!(matches!(
            Board::empty(&config(0, 4)),
            Err(LayoutError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let columns = usize::MAX / 2 + 2;
        let cfg = config(columns, 2);
        // the product wraps to 2 without the check
        let tiles = vec![Some(TileKind::Normal); 2];
        assert_eq!(
            Board::new(&cfg, tiles, vec![None; 2]).unwrap_err(),
            LayoutError::DimensionsOverflow { columns, rows: 2 }
        );
        assert_eq!(
            Board::empty(&cfg).unwrap_err(),
            LayoutError::DimensionsOverflow { columns, rows: 2 }
        );
    }

    #[test]
    fn test_set_refuses_holes() {
        let cfg = config(2, 1);
        let mut board = Board::new(&cfg, vec![Some(TileKind::Normal), None], vec![None; 2]).unwrap();
        assert!(board.set(0, candy(Color::Red)));
        assert!(!board.set(1, candy(Color::Red)));
        assert!(!board.set(2, candy(Color::Red)));
        assert_eq!(board.get(0), Some(candy(Color::Red)));
        assert_eq!(board.get(5), None);
    }

    #[test]
    fn test_fill_counts_cells() {
        let cfg = config(3, 3);
        let mut tiles = vec![Some(TileKind::Normal); 9];
        tiles[4] = None;
        let mut board = Board::new(&cfg, tiles, vec![None; 9]).unwrap();
        assert_eq!(board.fill(), 8);
        assert_eq!(board.get(4), Some(None));
        assert_eq!(board.fill(), 0);
    }

    #[test]
    fn test_swap_errors_leave_board_untouched() {
        // R B R
        // C X .
        let cfg = config(3, 2);
        let items = vec![
            candy(Color::Red),
            candy(Color::Blue),
            candy(Color::Red),
            Some(Item::new(ItemKind::Chocolate, ItemKey(0))),
            Some(Item::new(ItemKind::Obstacle, ItemKey(0))),
            None,
        ];
        let mut board = Board::new(&cfg, vec![Some(TileKind::Normal); 6], items.clone()).unwrap();

        assert_eq!(board.try_swap(0, 2), Err(SwapError::NotNeighbors { a: 0, b: 2 }));
        // last cell of row 0 and first cell of row 1
        assert_eq!(board.try_swap(2, 3), Err(SwapError::NotNeighbors { a: 2, b: 3 }));
        assert_eq!(board.try_swap(1, 4), Err(SwapError::NotSwappable { index: 4 }));
        assert_eq!(board.try_swap(2, 5), Err(SwapError::Empty { index: 5 }));
        assert_eq!(board.try_swap(6, 5), Err(SwapError::OutOfRange { index: 6, len: 6 }));
        assert_eq!(board.items(), items.as_slice());

        assert_eq!(board.try_swap(0, 3), Ok(SwapOutcome::Reverted));
        assert_eq!(board.items(), items.as_slice());
    }

    #[test]
    fn test_swap_into_match_resolves() {
        // R B R
        // . R .
        let cfg = config(3, 2);
        let mut tiles = vec![Some(TileKind::Normal); 6];
        tiles[3] = None;
        tiles[5] = None;
        let items = vec![
            candy(Color::Red),
            candy(Color::Blue),
            candy(Color::Red),
            None,
            candy(Color::Red),
            None,
        ];
        let mut board = Board::new(&cfg, tiles, items).unwrap();

        let outcome = board.try_swap(1, 4).unwrap();
        let SwapOutcome::Resolved(report) = outcome else {
            panic!("expected the swap to resolve, got {:?}", outcome);
        };
        assert_eq!(report.waves[0].matched, vec![0, 1, 2]);
        // nothing can fall: the only piece below row 0 is the swapped-in blue
        assert_eq!(board.get(4).flatten().and_then(|i| i.kind.color()), Some(Color::Blue));
        assert!(board.items()[..3].iter().all(|c| c.is_some()));
        assert!(!board.matches().any_match || report.truncated);
    }

    #[test]
    fn test_wave_limit_marks_truncation() {
        let cfg = EngineConfig {
            max_cascade_waves: 0,
            ..config(3, 1)
        };
        let mut board = Board::new(&cfg, vec![Some(TileKind::Normal); 3], vec![candy(Color::Red); 3]).unwrap();
        let report = board.resolve_cascade();
        assert!(report.waves.is_empty());
        assert!(report.truncated);
    }
}
