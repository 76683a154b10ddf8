//! Shapes module - tetromino geometry
//!
//! Every shape has one canonical set of four offsets from the piece origin. The other
//! three orientations are derived by rotating that set a quarter turn at a time, so the
//! four rotation states always form a cycle of order 4.
//!
//! Offsets live in board space: `x` grows to the right, `y` grows **upward**.
//! A clockwise quarter turn maps `(x, y)` to `(y, -x)`.

use crate::types::{Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

const S_OFFSETS: PieceShape = [(0, 1), (0, 0), (1, 0), (1, -1)];
const Z_OFFSETS: PieceShape = [(0, 1), (0, 0), (-1, 0), (-1, -1)];
const LINE_OFFSETS: PieceShape = [(0, 1), (0, 0), (0, -1), (0, -2)];
const T_OFFSETS: PieceShape = [(-1, 0), (0, 0), (1, 0), (0, -1)];
const SQUARE_OFFSETS: PieceShape = [(0, 0), (1, 0), (0, -1), (1, -1)];
const L_OFFSETS: PieceShape = [(-1, 1), (0, 1), (0, 0), (0, -1)];
const MIRRORED_L_OFFSETS: PieceShape = [(1, 1), (0, 1), (0, 0), (0, -1)];

/// Spawn orientation offsets for a shape
pub fn canonical_offsets(shape: Shape) -> PieceShape {
    match shape {
        Shape::S => S_OFFSETS,
        Shape::Z => Z_OFFSETS,
        Shape::Line => LINE_OFFSETS,
        Shape::T => T_OFFSETS,
        Shape::Square => SQUARE_OFFSETS,
        Shape::L => L_OFFSETS,
        Shape::MirroredL => MIRRORED_L_OFFSETS,
    }
}

/// Quarter turn clockwise
#[inline]
pub fn rotate_offset_cw((x, y): MinoOffset) -> MinoOffset {
    (y, -x)
}

/// Quarter turn counter-clockwise
#[inline]
pub fn rotate_offset_ccw((x, y): MinoOffset) -> MinoOffset {
    (-y, x)
}

/// Get the shape (mino offsets) for a shape and rotation
///
/// The square answers every rotation index with its canonical offsets.
pub fn offsets(shape: Shape, rotation: Rotation) -> PieceShape {
    let mut out = canonical_offsets(shape);
    if shape == Shape::Square {
        return out;
    }
    for _ in 0..rotation.index() {
        for offset in &mut out {
            *offset = rotate_offset_cw(*offset);
        }
    }
    out
}

/// Highest `dy` of an offset set
pub fn max_dy(shape: &PieceShape) -> i8 {
    shape.iter().map(|&(_, dy)| dy).max().unwrap_or(0)
}

/// Column of the origin for freshly spawned pieces
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 + 1) as i8;

/// Spawn position for a shape in its North orientation
///
/// The origin sits on [`SPAWN_X`], and the piece's highest cell touches the top row.
pub fn spawn_position(shape: Shape) -> (i8, i8) {
    let top = BOARD_HEIGHT as i8 - 1;
    (SPAWN_X, top - max_dy(&canonical_offsets(shape)))
}
