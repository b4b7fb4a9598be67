//! Matching module - per-cell run membership
//!
//! For every plain candy, counts how many same-colored candies continue in a
//! straight line in each of the four directions. A cell is matched when it sits
//! inside or at the end of a line of three or more:
//!
//! - it has a same-colored neighbor both above and below, or
//! - both to the left and to the right, or
//! - two or more in a row on any one side.
//!
//! Out-of-range cells, empty cells, and non-matchable pieces all end a walk the
//! same way a different color does.

use crate::grid::GridDims;
use crate::types::{Cell, Color, Direction};

/// Same-colored run lengths around one cell, not counting the cell itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunCounts {
    pub up: usize,
    pub right: usize,
    pub down: usize,
    pub left: usize,
}

impl RunCounts {
    pub fn get(&self, dir: Direction) -> usize {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Membership in a horizontal or vertical line of 3+
    pub fn is_match(&self) -> bool {
        (self.up > 0 && self.down > 0)
            || (self.left > 0 && self.right > 0)
            || Direction::ALL.iter().any(|d| self.get(*d) > 1)
    }
}

/// Match flag for one candy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchData {
    pub index: usize,
    pub matched: bool,
}

/// Result of a full-grid scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    pub any_match: bool,
    /// One entry per matchable piece, ascending by index
    pub cells: Vec<MatchData>,
}

impl MatchResult {
    /// Indices flagged as matched, ascending
    pub fn matched_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|m| m.matched)
            .map(|m| m.index)
            .collect()
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.cells
            .binary_search_by_key(&index, |m| m.index)
            .map(|pos| self.cells[pos].matched)
            .unwrap_or(false)
    }
}

fn run_length(dims: &GridDims, items: &[Cell], index: usize, color: Color, dir: Direction) -> usize {
    let mut count = 0;
    let mut cursor = index;
    while let Some(next) = dims.step(cursor, dir) {
        if items[next].and_then(|item| item.match_color()) != Some(color) {
            break;
        }
        count += 1;
        cursor = next;
    }
    count
}

fn counts_at(dims: &GridDims, items: &[Cell], index: usize) -> Option<RunCounts> {
    let color = items.get(index)?.and_then(|item| item.match_color())?;
    Some(RunCounts {
        up: run_length(dims, items, index, color, Direction::Up),
        right: run_length(dims, items, index, color, Direction::Right),
        down: run_length(dims, items, index, color, Direction::Down),
        left: run_length(dims, items, index, color, Direction::Left),
    })
}

/// Run lengths around `index`, or None if the cell holds no matchable piece
///
/// # Panics
///
/// Panics if `items.len()` differs from `dims.len()`.
pub fn run_counts(dims: &GridDims, items: &[Cell], index: usize) -> Option<RunCounts> {
    assert_eq!(
        items.len(),
        dims.len(),
        "run_counts: item array has {} cells, grid {}x{} needs {}",
        items.len(),
        dims.columns,
        dims.rows,
        dims.len()
    );
    counts_at(dims, items, index)
}

/// Scan every matchable piece and flag the ones that belong to a line of 3+.
///
/// # Panics
///
/// Panics if `items.len()` differs from `dims.len()`.
pub fn detect_matches(dims: &GridDims, items: &[Cell]) -> MatchResult {
    assert_eq!(
        items.len(),
        dims.len(),
        "detect_matches: item array has {} cells, grid {}x{} needs {}",
        items.len(),
        dims.columns,
        dims.rows,
        dims.len()
    );

    let cells: Vec<MatchData> = (0..items.len())
        .filter_map(|index| {
            counts_at(dims, items, index).map(|counts| MatchData {
                index,
                matched: counts.is_match(),
            })
        })
        .collect();

    MatchResult {
        any_match: cells.iter().any(|m| m.matched),
        cells,
    }
}

/// Copy of `items` with every matched piece cleared
pub fn remove_matched(items: &[Cell], matches: &MatchResult) -> Vec<Cell> {
    let mut out = items.to_vec();
    for m in matches.cells.iter().filter(|m| m.matched) {
        out[m.index] = None;
    }
    out
}
