//! Format module - serde structures for level files
//!
//! The engine's own types stay free of serde; the lowercase mirror enums here
//! carry the wire names and convert with `From`.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{next_key, Board, EngineConfig, GridDims};
use crate::types::{Cell, Color, Item, ItemKind, Tile, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileTag {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "destructible")]
    Destructible,
    #[serde(rename = "damaged")]
    Damaged,
}

impl From<TileKind> for TileTag {
    fn from(value: TileKind) -> Self {
        match value {
            TileKind::Normal => Self::Normal,
            TileKind::Destructible { damaged: false } => Self::Destructible,
            TileKind::Destructible { damaged: true } => Self::Damaged,
        }
    }
}

impl From<TileTag> for TileKind {
    fn from(value: TileTag) -> Self {
        match value {
            TileTag::Normal => TileKind::Normal,
            TileTag::Destructible => TileKind::Destructible { damaged: false },
            TileTag::Damaged => TileKind::Destructible { damaged: true },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorLower {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "purple")]
    Purple,
}

impl From<Color> for ColorLower {
    fn from(value: Color) -> Self {
        match value {
            Color::Red => Self::Red,
            Color::Orange => Self::Orange,
            Color::Yellow => Self::Yellow,
            Color::Green => Self::Green,
            Color::Blue => Self::Blue,
            Color::Purple => Self::Purple,
        }
    }
}

impl From<ColorLower> for Color {
    fn from(value: ColorLower) -> Self {
        match value {
            ColorLower::Red => Color::Red,
            ColorLower::Orange => Color::Orange,
            ColorLower::Yellow => Color::Yellow,
            ColorLower::Green => Color::Green,
            ColorLower::Blue => Color::Blue,
            ColorLower::Purple => Color::Purple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemTag {
    #[serde(rename = "candy")]
    Candy,
    #[serde(rename = "supercandy")]
    SuperCandy,
    #[serde(rename = "chocolate")]
    Chocolate,
    #[serde(rename = "obstacle")]
    Obstacle,
}

/// One occupied cell in a level file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    #[serde(rename = "type")]
    pub kind: ItemTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorLower>,
}

impl ItemSpec {
    /// Engine kind, or None when a colored kind is missing its color
    pub fn to_kind(&self) -> Option<ItemKind> {
        let color = self.color.map(Color::from);
        match self.kind {
            ItemTag::Candy => color.map(ItemKind::Candy),
            ItemTag::SuperCandy => color.map(ItemKind::SuperCandy),
            ItemTag::Chocolate => Some(ItemKind::Chocolate),
            ItemTag::Obstacle => Some(ItemKind::Obstacle),
        }
    }
}

impl From<ItemKind> for ItemSpec {
    fn from(value: ItemKind) -> Self {
        let kind = match value {
            ItemKind::Candy(_) => ItemTag::Candy,
            ItemKind::SuperCandy(_) => ItemTag::SuperCandy,
            ItemKind::Chocolate => ItemTag::Chocolate,
            ItemKind::Obstacle => ItemTag::Obstacle,
        };
        Self {
            kind,
            color: value.color().map(ColorLower::from),
        }
    }
}

/// A level file, and the snapshot format a board serializes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub columns: usize,
    pub rows: usize,
    pub tiles: Vec<Option<TileTag>>,
    pub items: Vec<Option<ItemSpec>>,
}

/// Board state in level-file shape
pub type Snapshot = LevelFile;

impl LevelFile {
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.columns, self.rows)
    }

    /// Engine tile and item arrays. Every piece gets a fresh key.
    pub fn layout(&self) -> Result<(Vec<Tile>, Vec<Cell>)> {
        let tiles = self.tiles.iter().map(|t| t.map(TileKind::from)).collect();
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, spec)| match spec {
                None => Ok(None),
                Some(spec) => spec
                    .to_kind()
                    .map(|kind| Some(Item::new(kind, next_key())))
                    .ok_or_else(|| anyhow!("level: item {} ({:?}) needs a color", index, spec.kind)),
            })
            .collect::<Result<Vec<Cell>>>()?;
        Ok((tiles, items))
    }

    /// Build a board; the file's dimensions replace the ones in `config`
    pub fn into_board(self, config: &EngineConfig) -> Result<Board> {
        let config = EngineConfig {
            dims: self.dims(),
            ..*config
        };
        let (tiles, items) = self.layout()?;
        let board = Board::new(&config, tiles, items).context("level: invalid layout")?;
        Ok(board)
    }

    pub fn from_board(board: &Board) -> Self {
        let dims = board.dims();
        Self {
            columns: dims.columns,
            rows: dims.rows,
            tiles: board.tiles().iter().map(|t| t.map(TileTag::from)).collect(),
            items: board
                .items()
                .iter()
                .map(|c| c.map(|item| ItemSpec::from(item.kind)))
                .collect(),
        }
    }
}

pub fn parse_level(json: &str) -> Result<LevelFile> {
    serde_json::from_str(json).context("level: malformed JSON")
}

pub fn load_level(path: &Path) -> Result<LevelFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("level: cannot read {}", path.display()))?;
    parse_level(&text)
}
