//! Line clearing and scoring
//!
//! A row is complete when every column holds material. Clearing runs once
//! per lock: all complete rows are removed together and the score table is
//! consulted with the number of rows removed.

use arrayvec::ArrayVec;

use crate::error::ScoreTableError;
use crate::grid::Grid;
use crate::types::{LINE_SCORES, STAGE_HEIGHT};

/// Row indices of a clear, top to bottom
pub type ClearedRows = ArrayVec<usize, { STAGE_HEIGHT as usize }>;

/// Points awarded per number of rows cleared by a single lock.
///
/// Entries are non-decreasing, so clearing more rows never scores less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreTable {
    points: [u32; 5],
}

impl ScoreTable {
    /// Build a table from points for 0..=4 rows.
    pub fn new(points: [u32; 5]) -> Result<Self, ScoreTableError> {
        for rows in 1..points.len() {
            if points[rows] < points[rows - 1] {
                return Err(ScoreTableError::NotMonotonic {
                    rows,
                    points: points[rows],
                    prev_rows: rows - 1,
                    prev_points: points[rows - 1],
                });
            }
        }
        Ok(Self { points })
    }

    /// Points for `rows` cleared at once; counts above 4 use the 4-row entry
    pub fn points_for(&self, rows: usize) -> u32 {
        self.points[rows.min(self.points.len() - 1)]
    }

    pub fn points(&self) -> [u32; 5] {
        self.points
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            points: LINE_SCORES,
        }
    }
}

/// Indices of all complete rows, top to bottom
pub fn full_rows(grid: &Grid) -> ClearedRows {
    (0..grid.height() as usize)
        .filter(|&row| grid.is_row_full(row))
        .collect()
}

/// Remove every complete row.
///
/// Returns the compacted grid and the number of rows removed.
pub fn clear_lines(grid: &Grid) -> (Grid, usize) {
    let rows = full_rows(grid);
    if rows.is_empty() {
        return (grid.clone(), 0);
    }
    (grid.with_rows_removed(&rows), rows.len())
}
