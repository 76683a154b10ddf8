//! Grid module - the locked cells of the playfield
//!
//! The grid is a 10x20 array where each cell is empty or holds the shape that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (**bottom to top**).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// One row of cells, left to right
pub type Row = [Cell; BOARD_WIDTH as usize];

/// Row indices removed by one clear, bottom first (capacity: every row)
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The locked cells - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Whether every cell of `piece` is in bounds and empty
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .cell_positions()
            .iter()
            .all(|&(x, y)| self.is_valid(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row_slice(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    fn row_slice(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Clear all full rows and return the row indices that were cleared (bottom first)
    ///
    /// Surviving rows keep their relative order and settle onto the floor; the vacated
    /// rows at the top come back empty. Uses a two-pointer pass with zero allocation.
    /// A lock fills at most four rows, but a grid edited through [`Grid::set`] can hold
    /// more, so every full row is reported.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = 0usize;

        for read_y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
                write_y += 1;
            }
        }

        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write every cell of `piece` into the grid
    /// Returns false (and writes nothing) if any cell is out of bounds or occupied
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        if !self.fits(piece) {
            return false;
        }
        for (x, y) in piece.cell_positions() {
            self.set(x, y, Some(piece.shape));
        }
        true
    }

    /// Fill a whole row with `shape`, leaving the listed columns empty
    ///
    /// Builds fixture stacks for tests and benches; play only writes cells through
    /// [`Grid::lock_piece`].
    pub fn fill_row_except(&mut self, y: i8, shape: Shape, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(shape) };
            self.set(x, y, cell);
        }
    }

    /// Copy of row `y` (left to right)
    pub fn row(&self, y: usize) -> Option<Row> {
        let slice = self.row_slice(y)?;
        let mut out = [None; BOARD_WIDTH as usize];
        out.copy_from_slice(slice);
        Some(out)
    }

    /// Copy every row into `out`, `out[0]` being the bottom row
    pub fn write_rows(&self, out: &mut [Row; BOARD_HEIGHT as usize]) {
        for (y, dst) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            dst.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
    }

    /// Copy of every row, bottom first
    pub fn rows(&self) -> [Row; BOARD_HEIGHT as usize] {
        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_rows(&mut out);
        out
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [None; GRID_SIZE];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
