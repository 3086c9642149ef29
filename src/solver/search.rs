#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Depth-first search over boards.
//!
//! The [`Engine`] drives the solve: it reduces a board to fixpoint, and when
//! propagation alone cannot finish, it branches. The branching cell is chosen
//! by a [`CellSelection`] policy; the default, [`MinimumRemaining`], picks the
//! undetermined cell with the fewest candidates (the minimum-remaining-values
//! heuristic), breaking ties by row-major cell order.
//!
//! Each branch owns an independent copy of the board, so a failed branch
//! cannot corrupt a sibling. Failure is an ordinary return value (`None`)
//! that propagates upward until a sibling branch succeeds or the root runs
//! out of candidates. Recursion depth is bounded by 81: every branch assigns
//! at least one previously undetermined cell.

use crate::solver::board::Board;
use crate::solver::cell::Cell;
use crate::solver::grid::{ParseGridError, parse_grid};
use crate::solver::propagation::reduce;
use crate::solver::topology::Topology;

/// A policy for choosing the cell to branch on.
pub trait CellSelection {
    /// Picks an undetermined cell of `board`, or `None` if every cell is
    /// assigned or empty.
    fn pick(&self, board: &Board) -> Option<Cell>;
}

/// Picks the undetermined cell with the fewest remaining candidates,
/// breaking ties by row-major cell order.
///
/// Branching on the most constrained cell minimises the expected size of the
/// search tree. The tie-break is a deterministic policy choice, not a
/// correctness requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemaining;

impl CellSelection for MinimumRemaining {
    fn pick(&self, board: &Board) -> Option<Cell> {
        board
            .entries()
            .filter(|(_, set)| set.len() > 1)
            .min_by_key(|&(cell, set)| (set.len(), cell))
            .map(|(cell, _)| cell)
    }
}

/// Picks the first undetermined cell in row-major order, regardless of how
/// constrained it is. Simpler and usually slower than [`MinimumRemaining`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOpen;

impl CellSelection for FirstOpen {
    fn pick(&self, board: &Board) -> Option<Cell> {
        board
            .entries()
            .find(|(_, set)| set.len() > 1)
            .map(|(cell, _)| cell)
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Search nodes at which the engine branched.
    pub decisions: usize,
    /// Candidate assignments tried across all branch points.
    pub branches: usize,
    /// Branches abandoned because reduction emptied a candidate set.
    pub contradictions: usize,
}

/// The search engine: constraint propagation plus depth-first backtracking.
///
/// The engine owns the fixed unit topology, built once at construction, and
/// a [`CellSelection`] policy. A single engine can solve any number of
/// boards; statistics accumulate across solves until read.
#[derive(Debug, Clone)]
pub struct Engine<S: CellSelection = MinimumRemaining> {
    topology: Topology,
    selector: S,
    stats: SolveStats,
}

impl Engine<MinimumRemaining> {
    /// Creates an engine with the default minimum-remaining-values policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_selector(MinimumRemaining)
    }
}

impl Default for Engine<MinimumRemaining> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CellSelection> Engine<S> {
    /// Creates an engine with an explicit cell selection policy.
    pub fn with_selector(selector: S) -> Self {
        Self {
            topology: Topology::new(),
            selector,
            stats: SolveStats::default(),
        }
    }

    /// The unit and peer topology this engine solves against.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Attempts to solve a board.
    ///
    /// The board is first reduced to fixpoint. If reduction signals a
    /// contradiction this branch fails. If the reduced board is fully
    /// assigned it is the solution. Otherwise the selection policy picks a
    /// branching cell and each of its candidates is tried in ascending digit
    /// order on an independent copy of the board; the first branch to yield a
    /// solution wins.
    ///
    /// Returns the fully assigned board, or `None` if no assignment
    /// satisfies every unit. A partially assigned board is never returned.
    pub fn solve(&mut self, board: Board) -> Option<Board> {
        let Some(board) = reduce(&self.topology, board) else {
            self.stats.contradictions += 1;
            return None;
        };

        if board.is_solved() {
            return Some(board);
        }

        let cell = self.selector.pick(&board)?;
        self.stats.decisions += 1;

        for digit in board[cell].iter() {
            self.stats.branches += 1;
            let mut branch = board;
            branch.assign(cell, digit);
            if let Some(solution) = self.solve(branch) {
                return Some(solution);
            }
        }

        None
    }

    /// Parses an 81-character grid string and solves it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the input is malformed; the solving core
    /// is never entered with an ill-formed board.
    pub fn solve_grid(&mut self, input: &str) -> Result<Option<Board>, ParseGridError> {
        Ok(self.solve(parse_grid(input)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::digit_set::DigitSet;
    use crate::solver::grid::as_line;
    use crate::solver::validation::{is_valid_solution, unit_sums_correct};

    const DIAGONAL_PUZZLE: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

    #[test]
    fn test_solves_diagonal_puzzle() {
        let mut engine = Engine::new();
        let solution = engine
            .solve_grid(DIAGONAL_PUZZLE)
            .unwrap()
            .expect("puzzle has a solution");

        assert!(solution.is_solved());
        assert!(unit_sums_correct(engine.topology(), &solution));
        assert!(is_valid_solution(engine.topology(), &solution));
    }

    #[test]
    fn test_solution_preserves_givens() {
        let mut engine = Engine::new();
        let solution = engine.solve_grid(DIAGONAL_PUZZLE).unwrap().unwrap();
        let line = as_line(&solution);

        for (given, solved) in DIAGONAL_PUZZLE.chars().zip(line.chars()) {
            if given != '.' {
                assert_eq!(given, solved);
            }
        }
    }

    #[test]
    fn test_empty_grid_terminates_with_valid_solution() {
        let mut engine = Engine::new();
        let solution = engine
            .solve_grid(&".".repeat(81))
            .unwrap()
            .expect("an unconstrained grid admits some solution");

        assert!(solution.is_solved());
        assert!(is_valid_solution(engine.topology(), &solution));
    }

    #[test]
    fn test_incompatible_givens_yield_no_solution() {
        let mut engine = Engine::new();
        let mut grid = ".".repeat(81);
        grid.replace_range(0..1, "5");
        grid.replace_range(4..5, "5"); // two 5s in row A

        assert_eq!(engine.solve_grid(&grid).unwrap(), None);
    }

    #[test]
    fn test_first_open_policy_also_solves() {
        let mut engine = Engine::with_selector(FirstOpen);
        let solution = engine.solve_grid(DIAGONAL_PUZZLE).unwrap().unwrap();
        assert!(is_valid_solution(engine.topology(), &solution));
    }

    #[test]
    fn test_minimum_remaining_picks_most_constrained() {
        let mut board = Board::unconstrained();
        board[Cell::new(2, 3)] = [1, 2, 3].into_iter().collect();
        board[Cell::new(5, 5)] = [4, 5].into_iter().collect();

        assert_eq!(MinimumRemaining.pick(&board), Some(Cell::new(5, 5)));
    }

    #[test]
    fn test_minimum_remaining_breaks_ties_row_major() {
        let mut board = Board::unconstrained();
        board[Cell::new(4, 4)] = [4, 5].into_iter().collect();
        board[Cell::new(1, 1)] = [1, 2].into_iter().collect();

        assert_eq!(MinimumRemaining.pick(&board), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_selection_skips_assigned_cells() {
        let mut board = Board::unconstrained();
        board.assign(Cell::new(0, 0), 9);
        board[Cell::new(7, 7)] = [1, 2].into_iter().collect();

        assert_eq!(MinimumRemaining.pick(&board), Some(Cell::new(7, 7)));
        assert_eq!(FirstOpen.pick(&board), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_selection_on_solved_board_is_none() {
        let mut board = Board::unconstrained();
        for (cell, _) in Board::unconstrained().entries() {
            board[cell] = DigitSet::singleton(1);
        }
        assert_eq!(MinimumRemaining.pick(&board), None);
        assert_eq!(FirstOpen.pick(&board), None);
    }

    #[test]
    fn test_stats_accumulate() {
        let mut engine = Engine::new();
        let _ = engine.solve_grid(&".".repeat(81)).unwrap();
        let stats = engine.stats();
        // An unconstrained grid cannot be finished by propagation alone.
        assert!(stats.decisions > 0);
        assert!(stats.branches >= stats.decisions);
    }
}
