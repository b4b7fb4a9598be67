//! Text rendering of a board for the terminal.
//!
//! Each cell is two columns wide. Candies print their color glyph (`R`, `G`, ...),
//! super candies the lowercase glyph, chocolate `#`, obstacles `X`, empty tiled
//! cells `.`, and holes stay blank. With styling on, glyphs are colored and
//! destructible tiles get a background.

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Board;
use crate::types::{Cell, Color as CandyColor, ItemKind, Tile, TileKind};

fn candy_rgb(color: CandyColor) -> Color {
    match color {
        CandyColor::Red => Color::Rgb { r: 220, g: 50, b: 47 },
        CandyColor::Orange => Color::Rgb { r: 240, g: 140, b: 30 },
        CandyColor::Yellow => Color::Rgb { r: 235, g: 210, b: 60 },
        CandyColor::Green => Color::Rgb { r: 80, g: 190, b: 80 },
        CandyColor::Blue => Color::Rgb { r: 60, g: 120, b: 230 },
        CandyColor::Purple => Color::Rgb { r: 160, g: 80, b: 200 },
    }
}

fn tile_bg(tile: TileKind) -> Option<Color> {
    match tile {
        TileKind::Normal => None,
        TileKind::Destructible { damaged: false } => Some(Color::Rgb { r: 120, g: 90, b: 10 }),
        TileKind::Destructible { damaged: true } => Some(Color::Rgb { r: 70, g: 55, b: 20 }),
    }
}

/// Glyph for one cell
pub fn glyph(tile: Tile, cell: Cell) -> char {
    match (tile, cell) {
        (None, _) => ' ',
        (Some(_), None) => '.',
        (Some(_), Some(item)) => match item.kind {
            ItemKind::Candy(c) => c.glyph(),
            ItemKind::SuperCandy(c) => c.glyph().to_ascii_lowercase(),
            ItemKind::Chocolate => '#',
            ItemKind::Obstacle => 'X',
        },
    }
}

/// Render the board row by row. `styled` adds ANSI color sequences.
pub fn render_grid(board: &Board, styled: bool) -> Result<String> {
    let dims = board.dims();
    let mut buf: Vec<u8> = Vec::with_capacity(dims.len() * 4);

    for row in 0..dims.rows {
        for column in 0..dims.columns {
            let index = row * dims.columns + column;
            let tile = board.tiles()[index];
            let cell = board.items()[index];
            let ch = glyph(tile, cell);

            if !styled {
                buf.queue(Print(ch))?;
                buf.queue(Print(' '))?;
                continue;
            }

            if let Some(bg) = tile.and_then(tile_bg) {
                buf.queue(SetBackgroundColor(bg))?;
            }
            if let Some(color) = cell.and_then(|item| item.kind.color()) {
                buf.queue(SetForegroundColor(candy_rgb(color)))?;
            }
            buf.queue(Print(ch))?;
            buf.queue(ResetColor)?;
            buf.queue(Print(' '))?;
        }
        buf.queue(Print('\n'))?;
    }

    Ok(String::from_utf8(buf)?)
}

/// Index ruler printed above a grid in verbose mode
pub fn index_legend(columns: usize) -> String {
    let mut out = String::new();
    for column in 0..columns {
        out.push_str(&format!("{:<2}", column % 100));
    }
    out
}
