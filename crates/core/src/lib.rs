//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! timers, threads, I/O or rendering: a driver outside the crate feeds it
//! commands and ticks and renders the snapshots it hands back.
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 stage of landed material
//! - [`pieces`]: tetromino catalog, rotation states and spawn anchor
//! - [`collision`]: the `can_place` legality test and piece merging
//! - [`scoring`]: line clearing and the score table
//! - [`rng`]: spawn order policies (round-robin and seeded 7-bag)
//! - [`state`]: the immutable game state machine
//! - [`snapshot`]: render-ready view of a state
//!
//! # Rules
//!
//! - No wall kicks: a rotation either fits at the same anchor or fails
//! - A blocked downward move means the piece is resting; the next
//!   `new_tetramino()` locks it, clears rows and spawns the next piece
//! - A blocked spawn ends the game
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::State;
//!
//! let state = State::initial_state().start().new_tetramino().unwrap();
//! assert!(state.is_running());
//!
//! // Gravity step as the driver performs it on every tick
//! let state = state
//!     .try_move_down()
//!     .or_else(|| state.new_tetramino())
//!     .unwrap_or_else(|| state.stop());
//! assert_eq!(state.score(), 0);
//! ```

pub mod collision;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::{can_place, merge};
pub use error::{GridError, ScoreTableError};
pub use grid::Grid;
pub use pieces::{shape_cells, spawn_anchor, Anchor, PieceShape};
pub use rng::{PieceQueue, SimpleRng, SpawnOrder};
pub use scoring::{clear_lines, ScoreTable};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use state::{ActivePiece, Phase, Rules, State};
