#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The core solving engine for diagonal Sudoku.

/// Boards map every cell to its remaining candidate digits.
pub mod board;
/// Cells of the 9x9 grid, identified by row and column.
pub mod cell;
/// Packed sets of candidate digits.
pub mod digit_set;
/// Parsing and rendering of 81-character grid strings.
pub mod grid;
/// The constraint propagation strategies and the fixpoint reduction loop.
pub mod propagation;
/// Depth-first search with minimum-remaining-values branching.
pub mod search;
/// The fixed unit and peer topology of the diagonal variant.
pub mod topology;
/// Checks on fully assigned boards.
pub mod validation;
