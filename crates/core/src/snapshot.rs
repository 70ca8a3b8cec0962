//! Read-only copy of the engine state for renderers.
//!
//! Cells store [`PieceKind::code`], so a board can be drawn without consulting
//! the shape catalog again.

use crate::piece::ActivePiece;
use crate::shapes::Shape;
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    /// Kind stored at (x, y), if any.
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&code| PieceKind::from_code(code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            pieces_locked: 0,
        }
    }
}
