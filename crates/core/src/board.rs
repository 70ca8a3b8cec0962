//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or tagged with a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the grid (y < 0) are open space: always free, never stored.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one [`Board::clear_full_rows`] call.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if outside the visible grid
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if outside the visible grid
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may occupy (x, y).
    ///
    /// The column must lie in `[0, W)`. Any row above the grid is free, rows
    /// inside the grid are free when empty, and everything from the floor
    /// down is blocked.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Tag (x, y) with `kind`.
    ///
    /// Writes outside the visible grid are dropped; in particular cells of a
    /// piece locked partially above row 0 are lost.
    pub fn write_cell(&mut self, x: i8, y: i8, kind: PieceKind) {
        self.set(x, y, Some(kind));
    }

    /// Merge every filled cell of `piece` at its current position.
    pub fn merge_piece(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.cells() {
            self.write_cell(x, y, piece.kind);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Returns the removed row indices, bottom to top. Surviving rows keep
    /// their relative order and one empty row appears at the top per removal.
    /// The single bottom-up compaction pass produces the same grid as
    /// scanning upward and rechecking an index after each removal.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Set every cell to empty.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Export as a u8 grid: 0 = empty, otherwise [`PieceKind::code`].
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map(|k| k.code()).unwrap_or(0);
            }
        }
    }

    /// Build from text rows, top to bottom; `.` is empty, a kind letter fills.
    ///
    /// Missing leading rows are treated as empty. Intended for tests and benches.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let kind = PieceKind::from_str(ch.encode_utf8(&mut [0u8; 4]));
                board.set(x as i8, (offset + i) as i8, kind);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_free_above_grid() {
        let board = Board::new();
        assert!(board.is_free(0, -1));
        assert!(board.is_free(9, -4));
        assert!(!board.is_free(-1, -1));
        assert!(!board.is_free(10, -1));
    }

    #[test]
    fn test_write_cell_above_grid_is_dropped() {
        let mut board = Board::new();
        board.write_cell(3, -1, PieceKind::T);
        assert!(board.is_empty());
    }

    #[test]
    fn test_from_rows_bottom_aligned() {
        let board = Board::from_rows(&["I.........", "OOOOOOOOO."]);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::I)));
        assert_eq!(board.get(8, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(9, 19), Some(None));
        assert_eq!(board.occupied_count(), 10);
    }

    #[test]
    fn test_u8_grid_export() {
        let mut board = Board::new();
        board.set(2, 5, Some(PieceKind::Z));
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[5][2], PieceKind::Z.code());
        assert_eq!(grid[0][0], 0);
    }
}
