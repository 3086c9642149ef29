//! # `SudokuSolver`
//!
//! `SudokuSolver` is a command-line solver for diagonal Sudoku puzzles, where
//! the two main diagonals must contain each digit exactly once in addition to
//! the usual rows, columns and 3x3 boxes.
//!
//! Solving combines constraint propagation with depth-first search:
//!
//! 1.  **Propagation**: Three strategies (eliminate, only-choice, naked-twins)
//!     are applied repeatedly until a full pass assigns no new cell. A cell
//!     left with no candidates means the current branch is unsolvable.
//! 2.  **Search**: When propagation stalls, the solver branches on an
//!     undetermined cell (by default the one with the fewest remaining
//!     candidates) and retries each candidate on an independent copy of the
//!     board.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a grid given on the command line ('.' or '0' marks an unknown cell)
//! sudoku_solver grid --grid '2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3'
//!
//! # Solve a puzzle file (one 81-character grid per line, '#' for comments)
//! sudoku_solver file --path puzzles.sudoku
//!
//! # Solve every .sudoku/.txt file under a directory
//! sudoku_solver dir --path puzzles/
//!
//! # A bare path is treated as a puzzle file
//! sudoku_solver puzzles.sudoku
//! ```
//!
//! Common options: `--verify` checks the solution against the strict unit
//! constraints, `--stats` prints search statistics and jemalloc memory
//! figures, `--display` prints the solved grid, and `--selection` chooses the
//! branching policy (`min-remaining` or `first-open`).

mod command_line;
mod solver;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    command_line::cli::run();
}
