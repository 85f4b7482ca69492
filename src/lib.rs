//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tick_tetris::{types,core,engine}` so
//! binaries, tests and benches depend on one path.

pub use tick_tetris_core as core;
pub use tick_tetris_engine as engine;
pub use tick_tetris_types as types;
