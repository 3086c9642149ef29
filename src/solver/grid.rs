#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Parsing and rendering of textual grids.
//!
//! The input format is an 81-character string in row-major order (`A1` first,
//! `I9` last). A digit `1..=9` is a given; `.` or `0` marks an unknown cell.
//! Malformed input is rejected here, at the boundary, so the solving core can
//! assume a well-formed board on entry.

use crate::solver::board::Board;
use crate::solver::cell::{CELL_COUNT, Cell};
use std::error::Error;
use std::fmt::{self, Display, Write};

/// The reasons a grid string can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    Length {
        /// The number of characters found.
        found: usize,
    },
    /// A character other than `1..=9`, `.` or `0` appeared.
    Character {
        /// The row-major position of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { found } => {
                write!(f, "expected {CELL_COUNT} cell characters, found {found}")
            }
            Self::Character { position, found } => write!(
                f,
                "invalid character {found:?} at cell {}",
                Cell::from_index(*position)
            ),
        }
    }
}

impl Error for ParseGridError {}

/// Parses an 81-character grid string into an initial board.
///
/// Given cells get a single-digit candidate set; unknown cells get the full
/// set. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the input is not exactly 81 characters long
/// or contains a character outside `1..=9`, `.` and `0`.
pub fn parse_grid(input: &str) -> Result<Board, ParseGridError> {
    let trimmed = input.trim();
    let found = trimmed.chars().count();
    if found != CELL_COUNT {
        return Err(ParseGridError::Length { found });
    }

    let mut board = Board::unconstrained();
    for (position, ch) in trimmed.chars().enumerate() {
        match ch {
            '.' | '0' => {}
            '1'..='9' => board.assign(Cell::from_index(position), ch as u8 - b'0'),
            _ => {
                return Err(ParseGridError::Character {
                    position,
                    found: ch,
                });
            }
        }
    }
    Ok(board)
}

/// Renders a board as an 81-character line, `.` for any undetermined cell.
#[must_use]
pub fn as_line(board: &Board) -> String {
    board
        .entries()
        .map(|(_, set)| set.sole().map_or('.', |digit| char::from(b'0' + digit)))
        .collect()
}

/// Renders a board as a human-readable grid with box separators.
///
/// Column width adapts to the widest remaining candidate set, so partially
/// reduced boards render with their full candidate lists.
#[must_use]
pub fn render(board: &Board) -> String {
    let width = 1 + board
        .entries()
        .map(|(_, set)| set.len().max(1))
        .max()
        .unwrap_or(1);
    let separator = vec!["-".repeat(width * 3); 3].join("+");

    let mut out = String::new();
    for row in 0..9u8 {
        for col in 0..9u8 {
            let set = board[Cell::new(row, col)];
            let text = if set.is_empty() {
                "!".to_string()
            } else {
                set.to_string()
            };
            let _ = write!(out, "{text:^width$}");
            if col == 2 || col == 5 {
                out.push('|');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}
