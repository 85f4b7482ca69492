//! Grid module - the stage of landed material
//!
//! The grid is a 10x20 matrix where each cell is empty or holds the material
//! of a landed piece. It has no game rules: it stores cells and answers
//! queries. Updates never happen in place; `with_cells_set` and
//! `with_rows_removed` return the next grid.
//!
//! Coordinates are `(row, col)` with row 0 at the top.

use crate::error::GridError;
use crate::types::{cell_tag, Cell, STAGE_HEIGHT, STAGE_WIDTH};

/// Total number of cells on the stage
const GRID_SIZE: usize = (STAGE_WIDTH as usize) * (STAGE_HEIGHT as usize);

const WIDTH: usize = STAGE_WIDTH as usize;
const HEIGHT: usize = STAGE_HEIGHT as usize;

/// The stage - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::in_bounds(row, col) {
            Some((row as usize) * WIDTH + (col as usize))
        } else {
            None
        }
    }

    /// Whether `(row, col)` lies on the stage
    #[inline(always)]
    pub fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < STAGE_HEIGHT as i8 && col >= 0 && col < STAGE_WIDTH as i8
    }

    pub fn width(&self) -> u8 {
        STAGE_WIDTH
    }

    pub fn height(&self) -> u8 {
        STAGE_HEIGHT
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether the cell holds landed material.
    ///
    /// Asking about a coordinate outside the stage is a caller bug and
    /// reported as [`GridError::OutOfBounds`].
    pub fn is_occupied(&self, row: i8, col: i8) -> Result<bool, GridError> {
        match Self::index(row, col) {
            Some(idx) => Ok(self.cells[idx].is_some()),
            None => Err(GridError::OutOfBounds { row, col }),
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return a grid with the given cells overwritten.
    ///
    /// Coordinates must be in bounds; callers validate placement first.
    pub fn with_cells_set(&self, updates: impl IntoIterator<Item = (i8, i8, Cell)>) -> Grid {
        let mut next = self.clone();
        for (row, col, cell) in updates {
            debug_assert!(Self::in_bounds(row, col), "({row}, {col}) outside stage");
            if let Some(idx) = Self::index(row, col) {
                next.cells[idx] = cell;
            }
        }
        next
    }

    /// Return a grid with `rows` deleted, the remaining rows shifted down in
    /// their original order, and as many empty rows inserted at the top.
    ///
    /// Indices outside the stage and duplicates are ignored.
    pub fn with_rows_removed(&self, rows: &[usize]) -> Grid {
        let mut next = self.clone();
        let mut write_row = HEIGHT;

        // Scan from bottom to top, copying kept rows down to the write cursor
        for read_row in (0..HEIGHT).rev() {
            if rows.contains(&read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                next.cells
                    .copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        for cell in &mut next.cells[..write_row * WIDTH] {
            *cell = None;
        }

        next
    }

    /// Row strings of cell tags, top to bottom
    pub fn tag_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|&cell| cell_tag(cell)).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
