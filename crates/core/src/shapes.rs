//! Shapes module - piece catalog and matrix rotation
//!
//! Every piece kind has one base rotation state stored as a square boolean
//! matrix. Further rotation states are derived by rotating the matrix
//! clockwise, so the matrix stays N×N and rotation is order 4.

use rand::Rng;

use crate::types::PieceKind;

/// Largest matrix side in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// One rotation state of a piece: an N×N matrix of filled cells.
///
/// Storage is a fixed 4×4 array; cells outside `size`×`size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build an N×N shape from rows of 0/1 values.
    ///
    /// Only the top-left `size`×`size` block of `rows` is read.
    pub const fn new(size: u8, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let n = if (size as usize) < MAX_SHAPE_SIZE {
            size as usize
        } else {
            MAX_SHAPE_SIZE
        };
        let mut row = 0;
        while row < n {
            let mut col = 0;
            while col < n {
                cells[row][col] = rows[row][col] != 0;
                col += 1;
            }
            row += 1;
        }
        Self {
            size: n as u8,
            cells,
        }
    }

    /// Matrix side length. Also the width used for spawn centering.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.cells[row][col]
    }

    /// Offsets `(col, row)` of the filled cells, in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// See [`rotated_clockwise`].
    pub fn rotated_clockwise(&self) -> Self {
        rotated_clockwise(self)
    }
}

/// Rotate an N×N shape 90° clockwise: `result[i][j] = shape[N-1-j][i]`.
pub fn rotated_clockwise(shape: &Shape) -> Shape {
    let n = shape.size as usize;
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = shape.cells[n - 1 - j][i];
        }
    }
    Shape {
        size: shape.size,
        cells,
    }
}

const I_SHAPE: Shape = Shape::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::new(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_SHAPE: Shape = Shape::new(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Shape = Shape::new(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_SHAPE: Shape = Shape::new(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_SHAPE: Shape = Shape::new(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_SHAPE: Shape = Shape::new(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Base rotation state for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Display color as `0xRRGGBB`. Render-only; game rules never read it.
pub fn display_color(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::I => 0x00f0f0,
        PieceKind::J => 0x0000f0,
        PieceKind::L => 0xf0a000,
        PieceKind::O => 0xf0f000,
        PieceKind::S => 0x00f000,
        PieceKind::T => 0xa000f0,
        PieceKind::Z => 0xf00000,
    }
}

/// Draw a kind uniformly at random, paired with its base shape.
pub fn random_piece_type<R: Rng + ?Sized>(rng: &mut R) -> (PieceKind, Shape) {
    let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
    (kind, base_shape(kind))
}
