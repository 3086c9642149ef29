#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Checks on fully assigned boards.
//!
//! Two checks are provided. [`unit_sums_correct`] is the historical sanity
//! check: every unit's digits must sum to 45. The sum is necessary but not
//! sufficient for validity, since a unit containing duplicates can still sum
//! to 45 (for example `9 9 1 2 3 4 5 6 6`). It is kept with exactly that
//! behavior. [`is_valid_solution`] is the strict check: every unit must
//! contain each digit exactly once.

use crate::solver::board::Board;
use crate::solver::digit_set::DigitSet;
use crate::solver::topology::{Topology, Unit};

/// The sum of the digits `1..=9`, the expected total for every unit.
pub const UNIT_SUM: u32 = 45;

/// Sums the assigned digits of a unit. Unassigned cells contribute zero.
#[must_use]
pub fn unit_sum(board: &Board, unit: &Unit) -> u32 {
    unit.iter()
        .filter_map(|cell| board[cell].sole())
        .map(u32::from)
        .sum()
}

/// Whether every unit of the board sums to 45.
///
/// This is a weak check: it accepts some invalid assignments whose duplicate
/// digits happen to sum to 45. Prefer [`is_valid_solution`] when strict
/// validity matters.
#[must_use]
pub fn unit_sums_correct(topology: &Topology, board: &Board) -> bool {
    topology
        .units()
        .iter()
        .all(|unit| unit_sum(board, unit) == UNIT_SUM)
}

/// Whether the board is fully assigned and every unit contains each digit
/// exactly once. Strictly stronger than [`unit_sums_correct`].
#[must_use]
pub fn is_valid_solution(topology: &Topology, board: &Board) -> bool {
    board.is_solved()
        && topology.units().iter().all(|unit| {
            let digits: DigitSet = unit.iter().filter_map(|cell| board[cell].sole()).collect();
            digits == DigitSet::ALL
        })
}
