//! Contract-violation errors raised by the core.
//!
//! Game rule violations (moving into a wall, rotating into the stack) are not
//! errors; they surface as `None` from the state transitions.

use thiserror::Error;

/// Direct grid query outside the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the stage")]
    OutOfBounds { row: i8, col: i8 },
}

/// Rejected score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreTableError {
    #[error("score for {rows} rows ({points}) is lower than for {prev_rows} rows ({prev_points})")]
    NotMonotonic {
        rows: usize,
        points: u32,
        prev_rows: usize,
        prev_points: u32,
    },
}
