//! Collision and placement
//!
//! `can_place` is the only legality test in the engine: spawns, moves and
//! rotations all ask it about the target placement.

use crate::grid::Grid;
use crate::pieces::{cells_at, Anchor};
use crate::types::PieceKind;

/// Whether every mino of `kind` at `rotation`/`anchor` lies on the stage and
/// over an empty cell.
pub fn can_place(grid: &Grid, kind: PieceKind, rotation: usize, anchor: Anchor) -> bool {
    cells_at(kind, rotation, anchor)
        .iter()
        .all(|&(row, col)| grid.is_free(row, col))
}

/// Write the piece's minos into the grid as landed material.
///
/// The placement must satisfy [`can_place`].
pub fn merge(grid: &Grid, kind: PieceKind, rotation: usize, anchor: Anchor) -> Grid {
    debug_assert!(can_place(grid, kind, rotation, anchor));
    grid.with_cells_set(
        cells_at(kind, rotation, anchor)
            .into_iter()
            .map(|(row, col)| (row, col, Some(kind))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::SPAWN_ANCHOR;

    #[test]
    fn test_can_place_on_empty_grid_at_spawn() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            assert!(can_place(&grid, kind, 0, SPAWN_ANCHOR), "{:?}", kind);
        }
    }

    #[test]
    fn test_can_place_rejects_walls_and_floor() {
        let grid = Grid::new();
        // T stem-up spans cols -1..=1 around the anchor
        assert!(!can_place(&grid, PieceKind::T, 0, (5, 0)));
        assert!(!can_place(&grid, PieceKind::T, 0, (5, 9)));
        // Stem-down reaches one row below the anchor
        assert!(!can_place(&grid, PieceKind::T, 2, (19, 4)));
        // Stem-up reaches above the anchor
        assert!(!can_place(&grid, PieceKind::T, 0, (0, 4)));
    }

    #[test]
    fn test_can_place_rejects_overlap() {
        let grid = Grid::new().with_cells_set([(10, 4, Some(PieceKind::O))]);
        assert!(!can_place(&grid, PieceKind::T, 0, (10, 4)));
        assert!(!can_place(&grid, PieceKind::T, 2, (9, 4)));
        assert!(can_place(&grid, PieceKind::T, 0, (9, 4)));
        assert!(can_place(&grid, PieceKind::T, 0, (12, 4)));
    }

    #[test]
    fn test_merge_writes_kind_material() {
        let grid = merge(&Grid::new(), PieceKind::O, 0, (19, 0));
        assert_eq!(grid.get(18, 0), Some(Some(PieceKind::O)));
        assert_eq!(grid.get(18, 1), Some(Some(PieceKind::O)));
        assert_eq!(grid.get(19, 0), Some(Some(PieceKind::O)));
        assert_eq!(grid.get(19, 1), Some(Some(PieceKind::O)));
        assert_eq!(grid.occupied_count(), 4);
    }
}
