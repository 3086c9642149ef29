#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
use std::fmt::{self, Display};

/// The side length of the grid.
pub const GRID_SIZE: u8 = 9;

/// The number of cells on the grid.
pub const CELL_COUNT: usize = 81;

/// Row labels used in the textual cell notation (`A1` through `I9`).
pub const ROW_LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// A single cell of the 9x9 grid, identified by a zero-based row and column.
///
/// Cells are ordered row-major: `A1 < A2 < ... < A9 < B1 < ... < I9`. This
/// ordering is the deterministic tie-break used when the search picks a
/// branching cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell from a zero-based row and column, both in `0..9`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Creates a cell from its row-major index in `0..81`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self {
            row: (index / GRID_SIZE as usize) as u8,
            col: (index % GRID_SIZE as usize) as u8,
        }
    }

    /// The row-major index of this cell, in `0..81`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE as usize + self.col as usize
    }

    /// The zero-based row.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The zero-based column.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The index of the 3x3 box containing this cell, in `0..9`, row-major.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.row as usize], self.col + 1)
    }
}

/// Returns an iterator over all 81 cells in row-major order.
pub fn cells() -> impl Iterator<Item = Cell> {
    (0..CELL_COUNT).map(Cell::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..CELL_COUNT {
            assert_eq!(Cell::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_row_major_ordering() {
        let all: Vec<Cell> = cells().collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all.len(), CELL_COUNT);
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(Cell::new(0, 0).to_string(), "A1");
        assert_eq!(Cell::new(8, 8).to_string(), "I9");
        assert_eq!(Cell::new(2, 4).to_string(), "C5");
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::new(0, 0).box_index(), 0);
        assert_eq!(Cell::new(4, 4).box_index(), 4);
        assert_eq!(Cell::new(8, 8).box_index(), 8);
        assert_eq!(Cell::new(0, 8).box_index(), 2);
        assert_eq!(Cell::new(8, 0).box_index(), 6);
    }
}
