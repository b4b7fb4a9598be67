//! Command-line arguments for the `candy-tiles` binary
//!
//! ```text
//! candy-tiles [--level PATH] [--seed N] [--columns N] [--rows N] [--max-waves N]
//!             [--swap A B]... [--json] [--verbose]
//! ```
//!
//! Flags override the `CANDY_TILES_*` environment variables read by
//! [`EngineConfig::from_env`]. `CANDY_TILES_VERBOSE=1` turns on stderr diagnostics.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::{EngineConfig, GridDims};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub engine: EngineConfig,
    pub level: Option<PathBuf>,
    pub swaps: Vec<(usize, usize)>,
    pub json: bool,
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(engine: EngineConfig) -> Self {
        Self {
            engine,
            level: None,
            swaps: Vec::new(),
            json: false,
            verbose: false,
        }
    }
}

/// Whether `CANDY_TILES_VERBOSE` asks for diagnostics
pub fn verbose_from_env() -> bool {
    std::env::var("CANDY_TILES_VERBOSE")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String> {
    args.get(i)
        .ok_or_else(|| anyhow!("candy-tiles: missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("candy-tiles: invalid {} value: {}", flag, v))
}

/// Parse arguments (without the program name) on top of `base`
pub fn parse_args(args: &[String], base: CliConfig) -> Result<CliConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--level" => {
                i += 1;
                config.level = Some(PathBuf::from(value(args, i, "--level")?));
            }
            "--seed" => {
                i += 1;
                config.engine.seed = Some(number(args, i, "--seed")?);
            }
            "--columns" => {
                i += 1;
                let columns: usize = number(args, i, "--columns")?;
                config.engine.dims = GridDims::new(columns, config.engine.dims.rows);
            }
            "--rows" => {
                i += 1;
                let rows: usize = number(args, i, "--rows")?;
                config.engine.dims = GridDims::new(config.engine.dims.columns, rows);
            }
            "--max-waves" => {
                i += 1;
                config.engine.max_cascade_waves = number(args, i, "--max-waves")?;
            }
            "--swap" => {
                let a = number(args, i + 1, "--swap")?;
                let b = number(args, i + 2, "--swap")?;
                config.swaps.push((a, b));
                i += 2;
            }
            "--json" => config.json = true,
            "--verbose" | "-v" => config.verbose = true,
            other => {
                return Err(anyhow!("candy-tiles: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}
