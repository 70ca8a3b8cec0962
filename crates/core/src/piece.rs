//! Active piece - the falling piece's kind, current rotation matrix and position

use crate::board::Board;
use crate::shapes::{base_shape, Shape};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Active falling piece
///
/// `x`/`y` locate the top-left corner of the shape matrix on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` in its base shape at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::spawn_with_shape(kind, base_shape(kind))
    }

    /// Spawn position: `x = ⌊W/2⌋ - ⌈size/2⌉`, `y = 0`.
    pub fn spawn_with_shape(kind: PieceKind, shape: Shape) -> Self {
        let half_board = (BOARD_WIDTH / 2) as i8;
        let half_shape = shape.size().div_ceil(2) as i8;
        Self {
            kind,
            shape,
            x: half_board - half_shape,
            y: 0,
        }
    }

    /// Absolute grid coordinates of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if every filled cell satisfies [`Board::is_free`]
    pub fn fits(&self, board: &Board) -> bool {
        fits_at(board, &self.shape, self.x, self.y)
    }

    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}

/// Check `shape` placed with its top-left corner at (x, y).
pub fn fits_at(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape
        .filled_cells()
        .all(|(dx, dy)| board.is_free(x.saturating_add(dx), y.saturating_add(dy)))
}
