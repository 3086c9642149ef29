#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board: a total mapping from cell to candidate set.
//!
//! The board is the single piece of state threaded through every solving
//! operation. It is a value: each search branch owns an independent clone, so
//! a failed branch can never corrupt a sibling or parent branch.

use crate::solver::cell::{CELL_COUNT, Cell, cells};
use crate::solver::digit_set::DigitSet;
use std::ops::{Index, IndexMut};

/// A mapping from every cell to its remaining candidate digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board([DigitSet; CELL_COUNT]);

impl Board {
    /// A board with every cell unconstrained.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self([DigitSet::ALL; CELL_COUNT])
    }

    /// The number of assigned cells, i.e. cells with exactly one candidate.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.0.iter().filter(|set| set.is_assigned()).count()
    }

    /// Whether every cell is assigned.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|set| set.is_assigned())
    }

    /// Whether some cell has run out of candidates.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.0.iter().any(|set| set.is_empty())
    }

    /// Sets `cell` to exactly `digit`, discarding its other candidates.
    pub fn assign(&mut self, cell: Cell, digit: u8) {
        self.0[cell.index()] = DigitSet::singleton(digit);
    }

    /// Iterates over all cells together with their candidate sets, in
    /// row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Cell, DigitSet)> + '_ {
        cells().map(|cell| (cell, self[cell]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl Index<Cell> for Board {
    type Output = DigitSet;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.0[cell.index()]
    }
}

impl IndexMut<Cell> for Board {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.0[cell.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_board() {
        let board = Board::unconstrained();
        assert_eq!(board.assigned_count(), 0);
        assert!(!board.is_solved());
        assert!(!board.has_contradiction());
        for (_, set) in board.entries() {
            assert_eq!(set, DigitSet::ALL);
        }
    }

    #[test]
    fn test_assign_and_count() {
        let mut board = Board::unconstrained();
        board.assign(Cell::new(0, 0), 5);
        board.assign(Cell::new(3, 7), 9);
        assert_eq!(board.assigned_count(), 2);
        assert_eq!(board[Cell::new(0, 0)].sole(), Some(5));
        assert_eq!(board[Cell::new(3, 7)].sole(), Some(9));
    }

    #[test]
    fn test_contradiction_detection() {
        let mut board = Board::unconstrained();
        assert!(!board.has_contradiction());
        board[Cell::new(4, 4)] = DigitSet::EMPTY;
        assert!(board.has_contradiction());
    }

    #[test]
    fn test_branch_clone_is_independent() {
        let mut parent = Board::unconstrained();
        parent.assign(Cell::new(0, 0), 1);
        let mut branch = parent;
        branch.assign(Cell::new(0, 1), 2);
        assert_eq!(parent.assigned_count(), 1);
        assert_eq!(branch.assigned_count(), 2);
    }
}
