//! Piece module - a shape placed on the board
//!
//! A [`Piece`] is a small `Copy` value. Movement and rotation return a new piece and
//! never check collision; the board decides whether to accept the result.

use crate::shapes::{max_dy, offsets, spawn_position, PieceShape};
use crate::types::{Rotation, Shape};

/// A tetromino with orientation and board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            shape,
            rotation,
            x,
            y,
        }
    }

    /// Create a piece in spawn orientation at the top-centre spawn position
    pub fn spawn(shape: Shape) -> Self {
        let (x, y) = spawn_position(shape);
        Self::new(shape, Rotation::North, x, y)
    }

    /// Get the mino offsets for the current rotation
    pub fn offsets(&self) -> PieceShape {
        offsets(self.shape, self.rotation)
    }

    /// Absolute board coordinates of the four occupied cells
    pub fn cell_positions(&self) -> [(i8, i8); 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same piece, one quarter turn clockwise
    pub fn rotated_clockwise(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Same piece, one quarter turn counter-clockwise
    pub fn rotated_counter_clockwise(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }

    /// Same piece translated by `(dx, dy)`
    pub fn moved_by(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its origin on row `y`
    pub fn at_y(&self, y: i8) -> Self {
        Self { y, ..*self }
    }

    /// Highest row offset above the origin in the current rotation
    pub fn max_offset_y(&self) -> i8 {
        max_dy(&self.offsets())
    }

    /// Lowest row offset below the origin in the current rotation
    pub fn min_offset_y(&self) -> i8 {
        self.offsets().iter().map(|&(_, dy)| dy).min().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_positions_follow_origin() {
        let piece = Piece::new(Shape::Square, Rotation::North, 4, 10);
        assert_eq!(piece.cell_positions(), [(4, 10), (5, 10), (4, 9), (5, 9)]);

        let moved = piece.moved_by(-1, -2);
        assert_eq!(moved.cell_positions(), [(3, 8), (4, 8), (3, 7), (4, 7)]);
    }

    #[test]
    fn test_transforms_do_not_mutate() {
        let piece = Piece::spawn(Shape::T);
        let _ = piece.rotated_clockwise();
        let _ = piece.moved_by(1, 0);
        assert_eq!(piece, Piece::spawn(Shape::T));
    }

    #[test]
    fn test_rotation_keeps_position_and_shape() {
        let piece = Piece::new(Shape::L, Rotation::North, 3, 7);
        let rotated = piece.rotated_counter_clockwise();
        assert_eq!(rotated.rotation, Rotation::West);
        assert_eq!((rotated.x, rotated.y, rotated.shape), (3, 7, Shape::L));
    }

    #[test]
    fn test_four_turns_return_same_cells() {
        for shape in Shape::ALL {
            let piece = Piece::new(shape, Rotation::North, 5, 10);
            let mut cw = piece;
            let mut ccw = piece;
            for _ in 0..4 {
                cw = cw.rotated_clockwise();
                ccw = ccw.rotated_counter_clockwise();
            }
            assert_eq!(cw.cell_positions(), piece.cell_positions());
            assert_eq!(ccw.cell_positions(), piece.cell_positions());
        }
    }

    #[test]
    fn test_vertical_extent() {
        let line = Piece::new(Shape::Line, Rotation::North, 5, 10);
        assert_eq!((line.max_offset_y(), line.min_offset_y()), (1, -2));

        let flat = line.rotated_clockwise();
        assert_eq!((flat.max_offset_y(), flat.min_offset_y()), (0, 0));
    }
}
