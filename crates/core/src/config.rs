//! Engine configuration
//!
//! Defaults describe the classic 9x9 board. Every value can be overridden from
//! the environment:
//!
//! - `CANDY_TILES_COLUMNS`: grid width (default: 9)
//! - `CANDY_TILES_ROWS`: grid height (default: 9)
//! - `CANDY_TILES_MAX_WAVES`: cascade waves resolved per swap (default: 64)
//! - `CANDY_TILES_SEED`: fixed RNG seed for reproducible spawns (default: random)

use crate::grid::GridDims;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_MAX_CASCADE_WAVES, DEFAULT_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub dims: GridDims,
    pub max_cascade_waves: usize,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dims: GridDims::new(DEFAULT_COLUMNS, DEFAULT_ROWS),
            max_cascade_waves: DEFAULT_MAX_CASCADE_WAVES,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source; unparsable values fall
    /// back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| -> Option<usize> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        };

        let columns = parse("CANDY_TILES_COLUMNS")
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_COLUMNS);
        let rows = parse("CANDY_TILES_ROWS")
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_ROWS);
        let max_cascade_waves = parse("CANDY_TILES_MAX_WAVES").unwrap_or(DEFAULT_MAX_CASCADE_WAVES);
        let seed = lookup("CANDY_TILES_SEED").and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            dims: GridDims::new(columns, rows),
            max_cascade_waves,
            seed,
        }
    }
}
