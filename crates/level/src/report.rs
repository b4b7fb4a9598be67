//! Report module - JSON form of swap results

use serde::Serialize;

use crate::core::{CascadeReport, CascadeWave, GridDims, ItemMove, SwapOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveMessage {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "tiles_to_move")]
    pub tiles_to_move: usize,
}

impl MoveMessage {
    pub fn new(m: &ItemMove, dims: &GridDims) -> Self {
        Self {
            from: m.index,
            to: m.target(dims),
            tiles_to_move: m.tiles_to_move,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveMessage {
    pub matched: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub destroyed_tiles: Vec<usize>,
    pub moves: Vec<MoveMessage>,
    pub spawned: Vec<usize>,
}

impl WaveMessage {
    pub fn new(wave: &CascadeWave, dims: &GridDims) -> Self {
        Self {
            matched: wave.matched.clone(),
            destroyed_tiles: wave.destroyed_tiles.clone(),
            moves: wave.moves.iter().map(|m| MoveMessage::new(m, dims)).collect(),
            spawned: wave.spawned.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeReportMessage {
    pub waves: Vec<WaveMessage>,
    pub truncated: bool,
}

impl CascadeReportMessage {
    pub fn new(report: &CascadeReport, dims: &GridDims) -> Self {
        Self {
            waves: report.waves.iter().map(|w| WaveMessage::new(w, dims)).collect(),
            truncated: report.truncated,
        }
    }
}

/// One swap attempt as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapMessage {
    pub from: usize,
    pub to: usize,
    /// `"resolved"`, `"reverted"`, or `"rejected"`
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cascade: Option<CascadeReportMessage>,
}

impl SwapMessage {
    pub fn new<E: ToString>(from: usize, to: usize, result: &Result<SwapOutcome, E>, dims: &GridDims) -> Self {
        let (status, error, cascade) = match result {
            Ok(SwapOutcome::Resolved(report)) => {
                ("resolved", None, Some(CascadeReportMessage::new(report, dims)))
            }
            Ok(SwapOutcome::Reverted) => ("reverted", None, None),
            Err(e) => ("rejected", Some(e.to_string()), None),
        };
        Self {
            from,
            to,
            status,
            error,
            cascade,
        }
    }
}
