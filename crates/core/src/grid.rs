//! Grid module - dimensions and index arithmetic
//!
//! A grid is addressed by a flat, row-major index. [`GridDims`] carries the
//! column and row counts so every operation knows the shape of the grid it is
//! handed; there are no global dimension constants.
//! Coordinates: (row, column), both zero-based; row 0 is the top of the grid.

use arrayvec::ArrayVec;

use crate::types::{Direction, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Column and row counts of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub columns: usize,
    pub rows: usize,
}

impl GridDims {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// Total number of cells, or None when `columns * rows` overflows
    pub const fn checked_len(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    #[inline(always)]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Calculate flat index from (row, column)
    /// Returns None if out of bounds
    #[inline(always)]
    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Zero-based (row, column) of a flat index
    #[inline(always)]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Adjacency check on raw index offsets.
    ///
    /// True iff `b` is `a` shifted by one of `-columns`, `+1`, `+columns`, `-1`.
    /// Row boundaries are not checked: the last cell of a row reports the first
    /// cell of the next row as adjacent. Use [`GridDims::are_neighbors`] when
    /// that matters.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a.checked_sub(self.columns) == Some(b)
            || a.checked_add(1) == Some(b)
            || a.checked_add(self.columns) == Some(b)
            || a.checked_sub(1) == Some(b)
    }

    /// Which raw offset relates `a` to `b`, with the same wraparound rules as
    /// [`GridDims::is_adjacent`]
    pub fn direction_between(&self, a: usize, b: usize) -> Option<Direction> {
        if a.checked_sub(self.columns) == Some(b) {
            Some(Direction::Up)
        } else if a.checked_add(1) == Some(b) {
            Some(Direction::Right)
        } else if a.checked_add(self.columns) == Some(b) {
            Some(Direction::Down)
        } else if a.checked_sub(1) == Some(b) {
            Some(Direction::Left)
        } else {
            None
        }
    }

    /// One step from `index` in `dir`, or None when the step leaves the grid
    #[inline]
    pub fn step(&self, index: usize, dir: Direction) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let (row, column) = self.coords(index);
        match dir {
            Direction::Up => row.checked_sub(1).map(|r| r * self.columns + column),
            Direction::Down => self.index(row + 1, column),
            Direction::Left => column.checked_sub(1).map(|c| row * self.columns + c),
            Direction::Right => self.index(row, column + 1),
        }
    }

    /// In-bounds orthogonal neighbors of `index`, in [`Direction::ALL`] order
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            if let Some(n) = self.step(index, dir) {
                out.push(n);
            }
        }
        out
    }

    /// Strict adjacency: both indices in range and sharing an edge
    pub fn are_neighbors(&self, a: usize, b: usize) -> bool {
        self.contains(b) && self.neighbors(a).contains(&b)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let dims = GridDims::default();
        assert_eq!(dims.index(0, 0), Some(0));
        assert_eq!(dims.index(0, 8), Some(8));
        assert_eq!(dims.index(1, 0), Some(9));
        assert_eq!(dims.index(8, 8), Some(80));
        assert_eq!(dims.index(9, 0), None);
        assert_eq!(dims.index(0, 9), None);
    }

    #[test]
    fn test_coords_match_one_based_mapping() {
        // row = ceil((i + 1) / C), column = i + 1 - (row - 1) * C, both 1-based
        let dims = GridDims::new(7, 4);
        for i in 0..dims.len() {
            let row1 = (i + 1).div_ceil(dims.columns);
            let col1 = i + 1 - (row1 - 1) * dims.columns;
            assert_eq!(dims.coords(i), (row1 - 1, col1 - 1));
        }
    }

    #[test]
    fn test_checked_len_reports_overflow() {
        assert_eq!(GridDims::new(9, 9).checked_len(), Some(81));
        assert_eq!(GridDims::new(usize::MAX / 2 + 2, 2).checked_len(), None);
        assert!(GridDims::new(usize::MAX, 0).is_empty());
    }

    #[test]
    fn test_is_adjacent_four_offsets() {
        let dims = GridDims::default();
        assert!(dims.is_adjacent(40, 31));
        assert!(dims.is_adjacent(40, 41));
        assert!(dims.is_adjacent(40, 49));
        assert!(dims.is_adjacent(40, 39));
        assert!(!dims.is_adjacent(40, 40));
        assert!(!dims.is_adjacent(40, 50));
        assert!(!dims.is_adjacent(40, 42));
    }

    #[test]
    fn test_is_adjacent_wraps_across_rows() {
        let dims = GridDims::default();
        // 8 is the last cell of row 0, 9 the first of row 1
        assert!(dims.is_adjacent(8, 9));
        assert!(dims.is_adjacent(9, 8));
        assert!(!dims.are_neighbors(8, 9));
        assert!(!dims.are_neighbors(9, 8));
    }

    #[test]
    fn test_is_adjacent_near_zero() {
        let dims = GridDims::default();
        assert!(!dims.is_adjacent(0, usize::MAX));
        assert!(dims.is_adjacent(0, 1));
        assert!(dims.is_adjacent(0, 9));
    }

    #[test]
    fn test_direction_between() {
        let dims = GridDims::default();
        assert_eq!(dims.direction_between(40, 31), Some(Direction::Up));
        assert_eq!(dims.direction_between(40, 41), Some(Direction::Right));
        assert_eq!(dims.direction_between(40, 49), Some(Direction::Down));
        assert_eq!(dims.direction_between(40, 39), Some(Direction::Left));
        assert_eq!(dims.direction_between(40, 0), None);
    }

    #[test]
    fn test_neighbors_at_corners() {
        let dims = GridDims::new(3, 2);
        assert_eq!(dims.neighbors(0).as_slice(), &[1, 3]);
        assert_eq!(dims.neighbors(2).as_slice(), &[5, 1]);
        assert_eq!(dims.neighbors(4).as_slice(), &[1, 5, 3]);
        assert!(dims.neighbors(6).is_empty());
    }
}
