//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game rules attached, so they can be used
//! by the state engine, the session boundary and any renderer alike.
//!
//! # Stage Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Gravity tick period |
//! | `DEFAULT_SEED` | 1 | Seed for the bag spawn order |
//! | `LINE_SCORES` | `[0, 100, 300, 500, 800]` | Points per rows cleared in one lock |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Command, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.tag(), 'T');
//!
//! assert_eq!(Command::from_str("move-left"), Some(Command::MoveLeft));
//! assert_eq!(Command::Tick.as_str(), "tick");
//!
//! assert_eq!(STAGE_WIDTH, 10);
//! assert_eq!(STAGE_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Stage width in cells (10 columns)
pub const STAGE_WIDTH: u8 = 10;

/// Stage height in cells (20 rows)
pub const STAGE_HEIGHT: u8 = 20;

/// Gravity tick period in milliseconds (one row per second)
pub const TICK_MS: u64 = 1000;

/// Default seed for the bag spawn order
pub const DEFAULT_SEED: u32 = 1;

/// Rendering tag of an empty cell
pub const EMPTY_TAG: char = '0';

/// Default points awarded for clearing N rows with a single lock.
///
/// Index is the number of rows cleared (0-4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Rendering tag for cells holding this kind's material
    pub fn tag(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Position in catalog order
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the stage
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Landed material of the specified piece kind
pub type Cell = Option<PieceKind>;

/// Rendering tag of a cell (`'0'` when empty)
pub fn cell_tag(cell: Cell) -> char {
    cell.map_or(EMPTY_TAG, |kind| kind.tag())
}

/// Core-side record of the most recent lock.
///
/// Kept on the game state so observers can report it after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// Abstract commands accepted by a game session
///
/// Raw input (keys, buttons, timers) is mapped to one of these before it
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece to its next rotation state
    Rotate,
    /// Periodic gravity step
    Tick,
    /// Reset and start a new game
    Start,
    /// End the current game
    Stop,
}

impl Command {
    /// Parse command from its kebab-case name
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("soft-drop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "move-left" => Some(Command::MoveLeft),
            "move-right" => Some(Command::MoveRight),
            "soft-drop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            _ => None,
        }
    }

    /// Convert to kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::SoftDrop => "soft-drop",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
            Command::Start => "start",
            Command::Stop => "stop",
        }
    }
}
