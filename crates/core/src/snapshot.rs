use serde::Serialize;

use crate::pieces::Anchor;
use crate::state::ActivePiece;
use crate::types::{LockEvent, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub anchor: Anchor,
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs, with no rendering logic attached.
///
/// `stage` holds one string per row, top to bottom, one tag per cell:
/// `'0'` for empty, the kind letter for landed material or the active piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub stage: Vec<String>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub running: bool,
    pub phase: &'static str,
    pub last_lock: Option<LockEvent>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.running && self.active.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        crate::state::State::initial_state().snapshot()
    }
}
