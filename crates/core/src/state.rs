//! Game state module - the immutable game state machine
//!
//! A [`State`] is a value. Every command takes `&self` and returns the next
//! state, or `None` when the command has no legal effect (moving into a
//! wall, rotating into the stack, any motion while not running). Nothing is
//! mutated in place, so a caller can keep, compare or replay old states.
//!
//! Gravity is driven from outside: on each tick the caller tries
//! [`State::try_move_down`], then [`State::new_tetramino`] (lock the resting
//! piece and spawn the next one), then [`State::stop`] when the spawn is
//! blocked.

use crate::collision::{can_place, merge};
use crate::grid::Grid;
use crate::pieces::{cells_at, rotation_count, spawn_anchor, Anchor, PieceShape};
use crate::rng::{PieceQueue, SpawnOrder};
use crate::scoring::{clear_lines, ScoreTable};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, LockEvent, PieceKind};

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created by `initial_state()`, never started
    NotStarted,
    /// Gravity active
    Running,
    /// Game over or stopped; score is final
    Stopped,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not-started",
            Phase::Running => "running",
            Phase::Stopped => "stopped",
        }
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Index into the kind's rotation states, always reduced modulo their count
    pub rotation: usize,
    pub anchor: Anchor,
}

impl ActivePiece {
    /// New piece of `kind` at its spawn anchor, rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            anchor: spawn_anchor(kind),
        }
    }

    /// Absolute stage coordinates of the four minos
    pub fn cells(&self) -> PieceShape {
        cells_at(self.kind, self.rotation, self.anchor)
    }

    /// Whether the piece can occupy its cells on `grid`
    pub fn fits(&self, grid: &Grid) -> bool {
        can_place(grid, self.kind, self.rotation, self.anchor)
    }

    fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            anchor: (self.anchor.0 + d_row, self.anchor.1 + d_col),
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % rotation_count(self.kind),
            ..*self
        }
    }
}

/// Game balance policy carried by a state and kept across restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub spawn_order: SpawnOrder,
    pub score_table: ScoreTable,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
    /// Total rows cleared this game
    lines: u32,
    /// Pieces spawned this game
    pieces: u32,
    phase: Phase,
    queue: PieceQueue,
    rules: Rules,
    last_lock: Option<LockEvent>,
}

impl State {
    /// The state before the first `start()`, with default rules
    pub fn initial_state() -> Self {
        Self::with_rules(Rules::default())
    }

    /// The state before the first `start()`
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            score: 0,
            lines: 0,
            pieces: 0,
            phase: Phase::NotStarted,
            queue: PieceQueue::new(rules.spawn_order),
            rules,
            last_lock: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Landed cells in row-major order (the active piece is not included)
    pub fn stage(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Kind the next `new_tetramino()` will spawn
    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Most recent lock of this game
    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    /// Whether the active piece is sitting on the floor or the stack
    pub fn is_resting(&self) -> bool {
        self.active
            .map(|piece| !piece.shifted(1, 0).fits(&self.grid))
            .unwrap_or(false)
    }

    /// Replace the landed material, e.g. to set up a puzzle position.
    ///
    /// Returns `None` if the active piece would overlap the new material.
    pub fn with_grid(&self, grid: Grid) -> Option<State> {
        if let Some(piece) = self.active {
            if !piece.fits(&grid) {
                return None;
            }
        }
        Some(State {
            grid,
            ..self.clone()
        })
    }

    /// Reset to an empty stage and begin running.
    ///
    /// No piece is spawned; follow with `new_tetramino()`. The spawn queue
    /// carries over so a restart does not replay the previous sequence.
    pub fn start(&self) -> State {
        State {
            grid: Grid::new(),
            active: None,
            score: 0,
            lines: 0,
            pieces: 0,
            phase: Phase::Running,
            queue: self.queue.clone(),
            rules: self.rules,
            last_lock: None,
        }
    }

    /// End the game. The active piece is discarded, the score is kept.
    pub fn stop(&self) -> State {
        State {
            active: None,
            phase: Phase::Stopped,
            ..self.clone()
        }
    }

    /// Lock a resting active piece and spawn the next kind at its spawn
    /// anchor.
    ///
    /// Returns `None` when not running, when the active piece can still
    /// fall, or when the spawn position is blocked (game over: the caller
    /// follows with `stop()`).
    pub fn new_tetramino(&self) -> Option<State> {
        if !self.is_running() {
            return None;
        }

        let mut next = match self.active {
            Some(_) => self.lock_active()?,
            None => self.clone(),
        };

        let piece = ActivePiece::spawn(next.queue.draw());
        if !piece.fits(&next.grid) {
            return None;
        }

        next.active = Some(piece);
        next.pieces = next.pieces.wrapping_add(1);
        Some(next)
    }

    /// Merge the resting active piece into the stage, clear complete rows
    /// and add their score. The result has no active piece.
    pub fn lock_active(&self) -> Option<State> {
        let piece = self.active?;
        if !self.is_resting() {
            return None;
        }

        let merged = merge(&self.grid, piece.kind, piece.rotation, piece.anchor);
        let (grid, cleared) = clear_lines(&merged);
        let score_delta = self.rules.score_table.points_for(cleared);

        Some(State {
            grid,
            active: None,
            score: self.score.saturating_add(score_delta),
            lines: self.lines + cleared as u32,
            last_lock: Some(LockEvent {
                kind: piece.kind,
                lines_cleared: cleared as u32,
                score_delta,
            }),
            ..self.clone()
        })
    }

    pub fn try_move_left(&self) -> Option<State> {
        self.try_place(|piece| piece.shifted(0, -1))
    }

    pub fn try_move_right(&self) -> Option<State> {
        self.try_place(|piece| piece.shifted(0, 1))
    }

    /// Move one row down. `None` while running with an active piece means
    /// the piece is resting (see [`State::is_resting`]).
    pub fn try_move_down(&self) -> Option<State> {
        self.try_place(|piece| piece.shifted(1, 0))
    }

    /// Turn to the next rotation state about the unchanged anchor
    pub fn try_rotate(&self) -> Option<State> {
        self.try_place(ActivePiece::rotated)
    }

    fn try_place(&self, step: impl FnOnce(&ActivePiece) -> ActivePiece) -> Option<State> {
        if !self.is_running() {
            return None;
        }
        let moved = step(&self.active?);
        if !moved.fits(&self.grid) {
            return None;
        }
        Some(State {
            active: Some(moved),
            ..self.clone()
        })
    }

    /// Render-ready copy of this state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut stage = self.grid.tag_rows();
        if let Some(piece) = self.active {
            // An active piece always fits, so every mino is on the stage.
            // Tags are ASCII: byte offsets are column indexes.
            let mut tag = [0u8; 4];
            let tag: &str = piece.kind.tag().encode_utf8(&mut tag);
            for (row, col) in piece.cells() {
                let col = col as usize;
                stage[row as usize].replace_range(col..col + 1, tag);
            }
        }

        GameSnapshot {
            stage,
            active: self.active.map(ActiveSnapshot::from),
            score: self.score,
            lines: self.lines,
            pieces: self.pieces,
            running: self.is_running(),
            phase: self.phase.as_str(),
            last_lock: self.last_lock,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial_state()
    }
}
