//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, making them usable
//! from the rules engine, the level loader, and any view layer.
//!
//! # Grid Layout
//!
//! A grid is a flat, row-major array of `columns * rows` cells:
//!
//! - **Index 0** is the top-left cell
//! - **Index `columns - 1`** is the top-right cell
//! - Moving one row down adds `columns` to the index
//!
//! Two parallel arrays describe a grid: the [`Tile`] array (where pieces may
//! live) and the [`Cell`] array (which piece, if any, lives there).
//!
//! # Examples
//!
//! ```
//! use candy_tiles_types::{Color, Item, ItemKey, ItemKind, TileKind, PALETTE};
//!
//! let candy = Item::new(ItemKind::Candy(Color::Red), ItemKey(1));
//! assert!(candy.is_matchable());
//! assert_eq!(candy.match_color(), Some(Color::Red));
//!
//! let chocolate = Item::new(ItemKind::Chocolate, ItemKey(2));
//! assert!(!chocolate.is_matchable());
//!
//! assert_eq!(Color::from_str("purple"), Some(Color::Purple));
//! assert_eq!(PALETTE.len(), 6);
//! assert!(TileKind::Normal.is_normal());
//! ```

/// Default grid width in cells (9 columns)
pub const DEFAULT_COLUMNS: usize = 9;

/// Default grid height in cells (9 rows)
pub const DEFAULT_ROWS: usize = 9;

/// Upper bound on cascade waves resolved after a single swap
pub const DEFAULT_MAX_CASCADE_WAVES: usize = 64;

/// Displacement of a swapped piece, in percent of a cell
pub const SWAP_OFFSET_PERCENT: i32 = 100;

/// Candy colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// The fixed spawn palette. Spawning picks uniformly from this array.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
];

impl Color {
    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_tiles_types::Color;
    ///
    /// assert_eq!(Color::from_str("Red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("BLUE"), Some(Color::Blue));
    /// assert_eq!(Color::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "purple" => Some(Color::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }

    /// Single-character label used by text renderings of a grid
    pub fn glyph(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Purple => 'P',
        }
    }
}

/// What a piece is.
///
/// Only [`ItemKind::Candy`] takes part in run detection. Every other kind is
/// consulted as a match-breaker and nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Plain colored piece
    Candy(Color),
    /// Special piece; keeps its color for display but never matches
    SuperCandy(Color),
    Chocolate,
    /// Immovable blocker; falls with gravity but cannot be swapped
    Obstacle,
}

impl ItemKind {
    /// Parse the kind tag used by level files (case-insensitive)
    ///
    /// Colored kinds need a color; `Chocolate` and `Obstacle` ignore it.
    pub fn from_parts(kind: &str, color: Option<Color>) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "candy" => color.map(ItemKind::Candy),
            "supercandy" => color.map(ItemKind::SuperCandy),
            "chocolate" => Some(ItemKind::Chocolate),
            "obstacle" => Some(ItemKind::Obstacle),
            _ => None,
        }
    }

    /// Kind tag without the color
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Candy(_) => "candy",
            ItemKind::SuperCandy(_) => "supercandy",
            ItemKind::Chocolate => "chocolate",
            ItemKind::Obstacle => "obstacle",
        }
    }

    /// Display color, if the kind has one
    pub fn color(&self) -> Option<Color> {
        match self {
            ItemKind::Candy(c) | ItemKind::SuperCandy(c) => Some(*c),
            ItemKind::Chocolate | ItemKind::Obstacle => None,
        }
    }

    pub fn is_matchable(&self) -> bool {
        matches!(self, ItemKind::Candy(_))
    }

    /// Whether a player may pick this piece up in a swap gesture
    pub fn is_swappable(&self) -> bool {
        !matches!(self, ItemKind::Obstacle)
    }
}

/// View-layer identity of a piece. Never consulted by game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

/// A piece occupying a tiled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub kind: ItemKind,
    pub key: ItemKey,
}

impl Item {
    pub fn new(kind: ItemKind, key: ItemKey) -> Self {
        Self { kind, key }
    }

    pub fn is_matchable(&self) -> bool {
        self.kind.is_matchable()
    }

    /// Color this piece contributes to runs (`None` for non-matchable kinds)
    pub fn match_color(&self) -> Option<Color> {
        match self.kind {
            ItemKind::Candy(c) => Some(c),
            _ => None,
        }
    }
}

/// Cell on the grid (None = empty, Some = occupied by a piece)
pub type Cell = Option<Item>;

/// Kind of a present tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Normal,
    /// Cracks on the first match over it and turns `Normal` on the second
    Destructible { damaged: bool },
}

impl TileKind {
    pub fn is_normal(&self) -> bool {
        matches!(self, TileKind::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Normal => "normal",
            TileKind::Destructible { .. } => "destructible",
        }
    }
}

/// Tile slot (None = hole in the board, Some = cell that can hold a piece)
pub type Tile = Option<TileKind>;

/// The four cardinal offsets, in the order adjacency checks try them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// `(top, left)` displacement in percent of a cell for a piece moving
    /// one step in this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_tiles_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset_percent(), (-100, 0));
    /// assert_eq!(Direction::Right.offset_percent(), (0, 100));
    /// ```
    pub fn offset_percent(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-SWAP_OFFSET_PERCENT, 0),
            Direction::Right => (0, SWAP_OFFSET_PERCENT),
            Direction::Down => (SWAP_OFFSET_PERCENT, 0),
            Direction::Left => (0, -SWAP_OFFSET_PERCENT),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}
