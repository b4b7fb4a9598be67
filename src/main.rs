//! Candy Tiles runner (default binary).
//!
//! Loads a level (or generates a random full board), settles any matches it
//! starts with, plays the requested swaps, and prints what happened.

use std::io::{self, IsTerminal};

use anyhow::Result;
use serde::Serialize;

use candy_tiles::cli::{parse_args, verbose_from_env, CliConfig};
use candy_tiles::core::{Board, EngineConfig, SwapOutcome};
use candy_tiles::level::{load_level, CascadeReportMessage, Snapshot, SwapMessage};
use candy_tiles::render::{index_legend, render_grid};

#[derive(Serialize)]
struct SessionMessage {
    setup: CascadeReportMessage,
    swaps: Vec<SwapMessage>,
    board: Snapshot,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut base = CliConfig::new(EngineConfig::from_env());
    base.verbose = verbose_from_env();
    let config = parse_args(&args, base)?;
    run(&config)
}

fn build_board(config: &CliConfig) -> Result<Board> {
    match &config.level {
        Some(path) => {
            if config.verbose {
                eprintln!("[candy-tiles] loading level {}", path.display());
            }
            load_level(path)?.into_board(&config.engine)
        }
        None => {
            let mut board = Board::empty(&config.engine)?;
            let filled = board.fill();
            if config.verbose {
                let dims = board.dims();
                eprintln!(
                    "[candy-tiles] generated {}x{} board ({} cells)",
                    dims.columns, dims.rows, filled
                );
            }
            Ok(board)
        }
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let mut board = build_board(config)?;
    let dims = board.dims();
    let styled = !config.json && io::stdout().is_terminal();

    let setup = board.resolve_cascade();
    if config.verbose {
        eprintln!(
            "[candy-tiles] setup settled in {} waves ({} pieces removed)",
            setup.waves.len(),
            setup.removed_count()
        );
    }
    if setup.truncated {
        eprintln!(
            "[candy-tiles] setup stopped after {} waves with matches left",
            setup.waves.len()
        );
    }

    let mut swaps = Vec::with_capacity(config.swaps.len());
    for &(a, b) in &config.swaps {
        let result = board.try_swap(a, b);
        if config.verbose {
            match &result {
                Ok(SwapOutcome::Resolved(report)) => eprintln!(
                    "[candy-tiles] swap {} <-> {}: {} waves, {} removed",
                    a,
                    b,
                    report.waves.len(),
                    report.removed_count()
                ),
                Ok(SwapOutcome::Reverted) => {
                    eprintln!("[candy-tiles] swap {} <-> {}: no match, reverted", a, b)
                }
                Err(e) => eprintln!("[candy-tiles] swap {} <-> {} rejected: {}", a, b, e),
            }
        }
        swaps.push(SwapMessage::new(a, b, &result, &dims));
    }

    if config.json {
        let session = SessionMessage {
            setup: CascadeReportMessage::new(&setup, &dims),
            swaps,
            board: Snapshot::from_board(&board),
        };
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    for swap in &swaps {
        match &swap.error {
            Some(e) => println!("swap {} <-> {}: {} ({})", swap.from, swap.to, swap.status, e),
            None => println!("swap {} <-> {}: {}", swap.from, swap.to, swap.status),
        }
        if let Some(cascade) = &swap.cascade {
            for (n, wave) in cascade.waves.iter().enumerate() {
                println!(
                    "  wave {}: matched {:?}, {} fell, spawned {}",
                    n + 1,
                    wave.matched,
                    wave.moves.len(),
                    wave.spawned.len()
                );
            }
        }
    }
    if config.verbose {
        println!("{}", index_legend(dims.columns));
    }
    print!("{}", render_grid(&board, styled)?);
    Ok(())
}
