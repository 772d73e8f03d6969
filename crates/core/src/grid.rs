//! Grid module - holds token placements
//!
//! The grid is a `length x width` matrix where each cell is empty or holds a token.
//! Uses a flat vector in row-major order; dimensions are fixed at construction.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the leftmost lane.
//! Players address lanes 1-based; everything below `place` is 0-based.

use tracing::debug;

use crate::error::PlaceError;
use crate::types::{Cell, Coord, Token};
use crate::win::{self, WinResult};

/// The playing grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    length: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `length` is zero.
    pub fn new(width: usize, length: usize) -> Self {
        assert!(
            width > 0 && length > 0,
            "grid dimensions must be non-zero (got {width}x{length})"
        );
        Self {
            width,
            length,
            cells: vec![None; width * length],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.length || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Number of lanes
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn length(&self) -> usize {
        self.length
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Token at `at`, or None if the cell is empty or out of bounds.
    pub fn token_at(&self, at: Coord) -> Option<Token> {
        self.get(at.row, at.col).flatten()
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.length && at.col < self.width
    }

    /// Drop `token` into the 1-based `lane`.
    ///
    /// The token lands in the lowest empty cell of the lane. On error the grid
    /// is left untouched.
    pub fn place(&mut self, token: Token, lane: usize) -> Result<Coord, PlaceError> {
        if lane == 0 || lane > self.width {
            return Err(PlaceError::InvalidLane {
                lane,
                width: self.width,
            });
        }
        let col = lane - 1;

        for row in (0..self.length).rev() {
            let idx = row * self.width + col;
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(token);
                debug!(token = token.label(), lane, row, col, "token placed");
                return Ok(Coord::new(row, col));
            }
        }

        Err(PlaceError::ColumnFull { lane })
    }

    /// True iff the top cell of the 0-based column is occupied.
    ///
    /// Columns outside the grid report full, since nothing can be placed there.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => cell.is_some(),
            None => true,
        }
    }

    /// True if no lane accepts another token.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Number of tokens on the grid
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check whether the token at `at` completes a run of `run_length`.
    ///
    /// See [`win::check_win`].
    pub fn check_win(&self, at: Coord, run_length: usize) -> WinResult {
        win::check_win(self, at, run_length)
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Remove every token
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(7, 6);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 6), Some(6));
        assert_eq!(grid.index(1, 0), Some(7));
        assert_eq!(grid.index(5, 6), Some(41));
        assert_eq!(grid.index(6, 0), None);
        assert_eq!(grid.index(0, 7), None);
    }

    #[test]
    fn test_place_writes_flat_storage() {
        let mut grid = Grid::new(7, 6);
        let token = Token::player_one();

        assert_eq!(grid.place(token, 3), Ok(Coord::new(5, 2)));
        assert_eq!(grid.cells[5 * 7 + 2], Some(token));
        assert_eq!(grid.token_count(), 1);
    }

    #[test]
    fn test_rows_are_width_sized() {
        let grid = Grid::new(4, 3);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1);
        assert!(!grid.is_full());
        assert_eq!(grid.place(Token::player_two(), 1), Ok(Coord::new(0, 0)));
        assert!(grid.is_full());
        assert_eq!(
            grid.place(Token::player_two(), 1),
            Err(PlaceError::ColumnFull { lane: 1 })
        );
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Grid::new(0, 6);
    }
}
