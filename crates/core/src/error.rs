//! Error types for layout validation and swap gestures
//!
//! The pure grid operations assert their preconditions instead of returning
//! errors; these types cover the checks a [`Board`](crate::Board) performs on
//! data it receives from outside.

use thiserror::Error;

/// A tile/item layout that cannot back a board
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LayoutError {
    #[error("grid dimensions must be non-zero, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("grid of {columns}x{rows} cells is too large to address")]
    DimensionsOverflow { columns: usize, rows: usize },

    #[error("{array} array has {actual} cells, grid needs {expected}")]
    LengthMismatch {
        array: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("piece at index {index} sits on a hole")]
    ItemOnHole { index: usize },
}

/// A swap gesture the board refused before touching any state
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SwapError {
    #[error("index {index} is outside a grid of {len} cells")]
    OutOfRange { index: usize, len: usize },

    #[error("cells {a} and {b} do not share an edge")]
    NotNeighbors { a: usize, b: usize },

    #[error("cell {index} has no tile")]
    NoTile { index: usize },

    #[error("cell {index} is empty")]
    Empty { index: usize },

    #[error("piece at {index} cannot be swapped")]
    NotSwappable { index: usize },
}
