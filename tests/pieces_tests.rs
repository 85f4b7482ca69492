//! Piece catalog tests

use tick_tetris::core::pieces::{
    cells_at, next, rotation_count, shape_cells, spawn_anchor, SPAWN_ANCHOR,
};
use tick_tetris::core::{can_place, Grid};
use tick_tetris::types::PieceKind;

#[test]
fn test_rotation_counts() {
    assert_eq!(rotation_count(PieceKind::I), 2);
    assert_eq!(rotation_count(PieceKind::O), 1);
    assert_eq!(rotation_count(PieceKind::T), 4);
    assert_eq!(rotation_count(PieceKind::S), 2);
    assert_eq!(rotation_count(PieceKind::Z), 2);
    assert_eq!(rotation_count(PieceKind::J), 4);
    assert_eq!(rotation_count(PieceKind::L), 4);
}

#[test]
fn test_rotation_index_wraps() {
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        for r in 0..count {
            assert_eq!(shape_cells(kind, r), shape_cells(kind, r + count));
            assert_eq!(shape_cells(kind, r), shape_cells(kind, r + 7 * count));
        }
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(shape_cells(PieceKind::T, 0), [(-1, 0), (0, -1), (0, 0), (0, 1)]);
    assert_eq!(shape_cells(PieceKind::T, 1), [(-1, 0), (0, 0), (0, 1), (1, 0)]);
    assert_eq!(shape_cells(PieceKind::T, 2), [(0, -1), (0, 0), (0, 1), (1, 0)]);
    assert_eq!(shape_cells(PieceKind::T, 3), [(-1, 0), (0, -1), (0, 0), (1, 0)]);
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(shape_cells(PieceKind::I, 0), [(-1, -1), (-1, 0), (-1, 1), (-1, 2)]);
    assert_eq!(shape_cells(PieceKind::I, 1), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
}

#[test]
fn test_spawn_anchor_is_fixed() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_anchor(kind), SPAWN_ANCHOR);
    }
}

#[test]
fn test_spawn_cells_are_top_center() {
    for kind in PieceKind::ALL {
        let cells = cells_at(kind, 0, spawn_anchor(kind));
        assert!(cells.iter().any(|&(row, _)| row == 0), "{:?} not on row 0", kind);
        assert!(cells.iter().all(|&(row, _)| (0..2).contains(&row)), "{:?}", kind);

        let max_col = if kind == PieceKind::I { 7 } else { 6 };
        assert!(
            cells.iter().all(|&(_, col)| (3..max_col).contains(&col)),
            "{:?} outside spawn columns: {:?}",
            kind,
            cells
        );
    }
}

#[test]
fn test_every_rotation_fits_at_spawn_on_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        for r in 0..rotation_count(kind) {
            assert!(can_place(&grid, kind, r, SPAWN_ANCHOR), "{:?} rotation {}", kind, r);
        }
    }
}

#[test]
fn test_next_is_round_robin() {
    assert_eq!(next(PieceKind::I), PieceKind::O);
    assert_eq!(next(PieceKind::J), PieceKind::L);
    assert_eq!(next(PieceKind::L), PieceKind::I);
}
