//! Pieces module - the static tetromino catalog
//!
//! Each kind has an ordered list of rotation states. A state is four
//! `(row, col)` offsets relative to the piece anchor (its pivot cell).
//! Successive states are the previous one turned 90° clockwise about the
//! anchor. I, S and Z have two states, O has one, T, J and L have four.
//!
//! There are no wall kicks: a rotation is legal only at the unchanged anchor.

use crate::types::PieceKind;

/// Offset of a single mino relative to the anchor, `(row, col)`
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Anchor coordinate `(row, col)` on the stage
pub type Anchor = (i8, i8);

/// Spawn anchor shared by every kind: top-center, one row down so that
/// minos above the pivot land on row 0.
pub const SPAWN_ANCHOR: Anchor = (1, 4);

const I_STATES: [PieceShape; 2] = [
    [(-1, -1), (-1, 0), (-1, 1), (-1, 2)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
];

const O_STATES: [PieceShape; 1] = [[(-1, 0), (-1, 1), (0, 0), (0, 1)]];

const T_STATES: [PieceShape; 4] = [
    // Stem up
    [(-1, 0), (0, -1), (0, 0), (0, 1)],
    // Stem right
    [(-1, 0), (0, 0), (0, 1), (1, 0)],
    // Stem down
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    // Stem left
    [(-1, 0), (0, -1), (0, 0), (1, 0)],
];

const S_STATES: [PieceShape; 2] = [
    [(-1, 0), (-1, 1), (0, -1), (0, 0)],
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
];

const Z_STATES: [PieceShape; 2] = [
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
    [(-1, 1), (0, 0), (0, 1), (1, 0)],
];

const J_STATES: [PieceShape; 4] = [
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(-1, 0), (-1, 1), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 0), (0, 0), (1, -1), (1, 0)],
];

const L_STATES: [PieceShape; 4] = [
    [(-1, 1), (0, -1), (0, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (0, 1), (1, -1)],
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
];

/// All rotation states of a kind, in clockwise order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states of a kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the mino offsets for a kind and rotation.
///
/// `rotation` is taken modulo the kind's rotation count.
pub fn shape_cells(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Spawn coordinate for a kind (same for every game)
pub fn spawn_anchor(_kind: PieceKind) -> Anchor {
    SPAWN_ANCHOR
}

/// Next kind in catalog (round-robin) order
pub fn next(kind: PieceKind) -> PieceKind {
    PieceKind::ALL[(kind.index() + 1) % PieceKind::ALL.len()]
}

/// Translate a shape to absolute stage coordinates
pub fn cells_at(kind: PieceKind, rotation: usize, anchor: Anchor) -> PieceShape {
    let (row, col) = anchor;
    shape_cells(kind, rotation).map(|(dr, dc)| (row + dr, col + dc))
}
