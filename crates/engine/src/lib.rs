//! Session boundary for the state engine.
//!
//! The core crate is a set of pure transitions. This crate is what drives
//! them in a live game:
//!
//! - [`config`]: `EngineConfig` read from `TETRIS_*` environment variables
//! - [`session`]: single-writer `Session` mapping abstract commands onto the
//!   core transitions, including the tick fallback chain
//! - [`runtime`]: tokio task serializing commands and gravity ticks, and
//!   publishing snapshots on a watch channel
//! - [`event_log`]: optional JSONL log of session events
//!
//! # Example
//!
//! ```
//! use tick_tetris_engine::{Outcome, Session};
//! use tick_tetris_engine::types::Command;
//!
//! let mut session = Session::default();
//! assert_eq!(session.apply(Command::Start), Outcome::Applied);
//! assert_eq!(session.apply(Command::Tick), Outcome::Applied);
//! ```

pub mod config;
pub mod event_log;
pub mod runtime;
pub mod session;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use config::{ConfigError, EngineConfig};
pub use runtime::run_session;
pub use session::{Outcome, Session, SessionEvent};
