#![deny(missing_docs)]
//! This crate provides a solver for diagonal Sudoku puzzles, where the two main
//! diagonals are constraint units in addition to the rows, columns and boxes.
//! Solving combines constraint propagation with depth-first backtracking search.

/// The `solver` module implements the solving engine: the board and unit topology,
/// the propagation strategies, the fixpoint reduction loop, and the search.
pub mod solver;
