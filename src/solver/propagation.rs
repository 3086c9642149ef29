#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint propagation strategies and the fixpoint reduction loop.
//!
//! Three independent strategies shrink candidate sets:
//!
//! 1. **Eliminate**: an assigned digit is removed from every peer of its cell.
//! 2. **Only-choice**: if a unit has exactly one cell still admitting a digit,
//!    that cell is assigned the digit.
//! 3. **Naked-twins**: if two cells of a unit hold the same two-digit
//!    candidate set, those digits are confined to the pair and removed from
//!    every other cell of the unit.
//!
//! [`reduce`] applies them in that order until a full pass no longer grows
//! the assigned-cell count. A contradiction (an emptied candidate set) is a
//! failure value, never a panic: the board is unsolvable along that path and
//! the caller tries another branch.

use crate::solver::board::Board;
use crate::solver::cell::{Cell, cells};
use crate::solver::topology::{Topology, Unit};
use itertools::Itertools;
use smallvec::SmallVec;

/// A single constraint propagation strategy.
///
/// Strategies mutate the board they are handed; the board is a value owned by
/// the current search branch, so no other branch can observe the mutation.
/// Candidate sets only ever shrink under a strategy, or collapse to the
/// assigned digit in the only-choice case.
pub trait Strategy {
    /// Applies the strategy once over the whole board.
    fn apply(&self, topology: &Topology, board: &mut Board);
}

/// Removes every assigned digit from the candidate sets of its cell's peers.
///
/// Removing a digit from a peer that was itself assigned that digit empties
/// the peer's set; this is how incompatible givens surface as a
/// contradiction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eliminate;

impl Strategy for Eliminate {
    fn apply(&self, topology: &Topology, board: &mut Board) {
        for cell in cells() {
            if let Some(digit) = board[cell].sole() {
                for &peer in topology.peers(cell) {
                    board[peer] = board[peer].without(digit);
                }
            }
        }
    }
}

/// Assigns a digit to the only cell of a unit that still admits it.
///
/// The assignment discards any other candidates the cell still had.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyChoice;

impl Strategy for OnlyChoice {
    fn apply(&self, topology: &Topology, board: &mut Board) {
        for unit in topology.units() {
            for digit in 1..=9u8 {
                let mut holder = None;
                let mut count = 0;
                for cell in unit.iter() {
                    if board[cell].contains(digit) {
                        holder = Some(cell);
                        count += 1;
                        if count > 1 {
                            break;
                        }
                    }
                }
                if count == 1
                    && let Some(cell) = holder
                {
                    board.assign(cell, digit);
                }
            }
        }
    }
}

/// Finds pairs of cells in a unit with identical two-digit candidate sets and
/// removes those digits from every other cell of the unit.
///
/// The twin cells themselves are never modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedTwins;

impl Strategy for NakedTwins {
    fn apply(&self, topology: &Topology, board: &mut Board) {
        for unit in topology.units() {
            let pairs: SmallVec<[Cell; 9]> = unit
                .iter()
                .filter(|&cell| board[cell].len() == 2)
                .collect();

            for (&first, &second) in pairs.iter().tuple_combinations() {
                // Re-read the live sets: an earlier twin in this unit may have
                // already shrunk one of them.
                if board[first].len() == 2 && board[first] == board[second] {
                    strip_twins(unit, first, second, board);
                }
            }
        }
    }
}

fn strip_twins(unit: &Unit, first: Cell, second: Cell, board: &mut Board) {
    let twins = board[first];
    for cell in unit.iter() {
        if cell != first && cell != second {
            board[cell] = board[cell].difference(twins);
        }
    }
}

/// Reduces a board to fixpoint under the three strategies.
///
/// Eliminate, only-choice and naked-twins are applied in that fixed order,
/// repeatedly, until a full pass fails to increase the assigned-cell count.
/// If any cell's candidate set is empty after a pass, the board is
/// unsolvable along this path and `None` is returned immediately.
///
/// Termination is guaranteed: candidate sets only shrink, so the assigned
/// count can increase at most 81 times.
#[must_use]
pub fn reduce(topology: &Topology, mut board: Board) -> Option<Board> {
    loop {
        let before = board.assigned_count();

        Eliminate.apply(topology, &mut board);
        OnlyChoice.apply(topology, &mut board);
        NakedTwins.apply(topology, &mut board);

        if board.has_contradiction() {
            return None;
        }
        if board.assigned_count() == before {
            return Some(board);
        }
    }
}
