//! Board module - manages the game grid
//!
//! The board is a 3x3 grid where each cell is empty or holds a player's token.
//! Uses a flat array in row-major order.
//! Coordinates: (row, col) where both range 0..3, row 0 at the top.
//!
//! The board knows nothing about turns or rules; see [`crate::rules`] and
//! [`crate::session`].

use crate::types::{CellPos, CellValue, Player, BOARD_SIZE, CELL_COUNT};

/// The game board - 3 rows x 3 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * 3 + col)
    cells: [CellValue; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [CellValue::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        CellPos::new(row, col).map(|pos| pos.index())
    }

    /// Get the value at (row, col).
    ///
    /// Out-of-range coordinates read as `Empty`.
    pub fn value_at(&self, row: usize, col: usize) -> CellValue {
        Self::index(row, col)
            .map(|idx| self.cells[idx])
            .unwrap_or_default()
    }

    /// Check if (row, col) is on the board and holds no token
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        Self::index(row, col).is_some_and(|idx| self.cells[idx].is_empty())
    }

    /// Check if every cell holds a token
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Place `player`'s token at (row, col).
    ///
    /// Returns false (and leaves the board untouched) if the position is out of
    /// bounds or already occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        match Self::index(row, col) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = CellValue::from(player);
                true
            }
            _ => false,
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(CellValue::Empty);
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue; CELL_COUNT] {
        &self.cells
    }

    /// Copy the board out as rows
    pub fn rows(&self) -> [[CellValue; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[CellValue::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.write_rows(&mut out);
        out
    }

    /// Write the board into an existing row grid (no allocation)
    pub fn write_rows(&self, out: &mut [[CellValue; BOARD_SIZE]; BOARD_SIZE]) {
        for (row, chunk) in self.cells.chunks_exact(BOARD_SIZE).enumerate() {
            out[row].copy_from_slice(chunk);
        }
    }

    /// Build a board from rows.
    ///
    /// Bypasses move legality; used by tests and benchmarks to set up
    /// arbitrary positions.
    pub fn from_rows(rows: [[CellValue; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [CellValue::Empty; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(values);
        }
        Self { cells }
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
        assert_eq!(Board::index(0, 2), Some(2));
        assert_eq!(Board::index(1, 0), Some(3));
        assert_eq!(Board::index(2, 2), Some(8));
        assert_eq!(Board::index(3, 0), None);
        assert_eq!(Board::index(0, 3), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.place(0, 0, Player::X);
        board.place(2, 1, Player::O);

        assert_eq!(board.cells[0], CellValue::PlayerX);
        assert_eq!(board.cells[2 * 3 + 1], CellValue::PlayerO);
    }

    #[test]
    fn test_board_rows_roundtrip() {
        use CellValue::{Empty as E, PlayerO as O, PlayerX as X};

        let rows = [[X, E, O], [E, X, E], [O, E, E]];
        let board = Board::from_rows(rows);

        assert_eq!(board.rows(), rows);
        assert_eq!(board.occupied(), 4);
    }
}
