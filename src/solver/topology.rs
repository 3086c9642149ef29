#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The fixed constraint topology of the diagonal variant.
//!
//! A unit is a group of nine cells that must jointly contain each digit
//! exactly once. The diagonal variant has 29 units: nine rows, nine columns,
//! nine 3x3 boxes, the main diagonal (`A1..I9`) and the anti-diagonal
//! (`A9..I1`). The peers of a cell are all cells sharing at least one unit
//! with it. Both are derived once and never change; the [`Topology`] value is
//! passed to the propagation and search code rather than living as ambient
//! global state.

use crate::solver::cell::{CELL_COUNT, Cell};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// The number of units in the diagonal variant.
pub const UNIT_COUNT: usize = 29;

/// The number of cells in every unit.
pub const UNIT_SIZE: usize = 9;

/// Identifies which constraint a unit represents. Used in reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A row, by zero-based index.
    Row(u8),
    /// A column, by zero-based index.
    Column(u8),
    /// A 3x3 box, by zero-based row-major index.
    Box(u8),
    /// The main diagonal, `A1` through `I9`.
    MainDiagonal,
    /// The anti-diagonal, `A9` through `I1`.
    AntiDiagonal,
}

impl Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(r) => write!(f, "row {}", char::from(b'A' + r)),
            Self::Column(c) => write!(f, "column {}", c + 1),
            Self::Box(b) => write!(f, "box {}", b + 1),
            Self::MainDiagonal => write!(f, "main diagonal"),
            Self::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A group of nine cells that must jointly contain each digit `1..=9` exactly
/// once in a valid solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; UNIT_SIZE],
}

impl Unit {
    /// The constraint this unit represents.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The nine member cells.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; UNIT_SIZE] {
        &self.cells
    }

    /// Iterates over the member cells.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Whether `cell` belongs to this unit.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// The unit list and peer map of the fixed 9x9 diagonal topology.
///
/// Built once with [`Topology::new`] and then shared immutably; construction
/// has no failure modes.
#[derive(Debug, Clone)]
pub struct Topology {
    units: Vec<Unit>,
    containing: [SmallVec<[u16; 4]>; CELL_COUNT],
    peers: [SmallVec<[Cell; 32]>; CELL_COUNT],
}

impl Topology {
    /// Builds the 29 units and derives each cell's unit membership and peer set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        let mut units = Vec::with_capacity(UNIT_COUNT);

        for row in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Row(row),
                cells: std::array::from_fn(|col| Cell::new(row, col as u8)),
            });
        }
        for col in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Column(col),
                cells: std::array::from_fn(|row| Cell::new(row as u8, col)),
            });
        }
        for boxed in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Box(boxed),
                cells: std::array::from_fn(|i| {
                    Cell::new((boxed / 3) * 3 + (i as u8) / 3, (boxed % 3) * 3 + (i as u8) % 3)
                }),
            });
        }
        units.push(Unit {
            kind: UnitKind::MainDiagonal,
            cells: std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
        });
        units.push(Unit {
            kind: UnitKind::AntiDiagonal,
            cells: std::array::from_fn(|i| Cell::new(i as u8, 8 - i as u8)),
        });
        debug_assert_eq!(units.len(), UNIT_COUNT);

        let mut containing: [SmallVec<[u16; 4]>; CELL_COUNT] =
            std::array::from_fn(|_| SmallVec::new());
        for (id, unit) in units.iter().enumerate() {
            for cell in unit.iter() {
                containing[cell.index()].push(id as u16);
            }
        }

        let peers: [SmallVec<[Cell; 32]>; CELL_COUNT] = std::array::from_fn(|index| {
            let cell = Cell::from_index(index);
            let mut seen: FxHashSet<Cell> = FxHashSet::default();
            for &id in &containing[index] {
                seen.extend(units[id as usize].iter().filter(|&other| other != cell));
            }
            let mut list: SmallVec<[Cell; 32]> = seen.into_iter().collect();
            list.sort_unstable();
            list
        });

        Self {
            units,
            containing,
            peers,
        }
    }

    /// All 29 units.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The units containing `cell`: its row, column and box, plus any diagonal
    /// it lies on.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.containing[cell.index()]
            .iter()
            .map(|&id| &self.units[id as usize])
    }

    /// The peers of `cell`, in row-major order.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::cell::cells;

    #[test]
    fn test_unit_count_by_kind() {
        let topology = Topology::new();
        assert_eq!(topology.units().len(), UNIT_COUNT);

        let rows = topology
            .units()
            .iter()
            .filter(|u| matches!(u.kind(), UnitKind::Row(_)))
            .count();
        let cols = topology
            .units()
            .iter()
            .filter(|u| matches!(u.kind(), UnitKind::Column(_)))
            .count();
        let boxes = topology
            .units()
            .iter()
            .filter(|u| matches!(u.kind(), UnitKind::Box(_)))
            .count();
        assert_eq!((rows, cols, boxes), (9, 9, 9));
        assert!(topology.units().iter().any(|u| u.kind() == UnitKind::MainDiagonal));
        assert!(topology.units().iter().any(|u| u.kind() == UnitKind::AntiDiagonal));
    }

    #[test]
    fn test_units_have_nine_distinct_cells() {
        let topology = Topology::new();
        for unit in topology.units() {
            let mut members: Vec<Cell> = unit.iter().collect();
            members.sort();
            members.dedup();
            assert_eq!(members.len(), UNIT_SIZE, "{} has duplicates", unit.kind());
        }
    }

    #[test]
    fn test_every_cell_in_row_column_and_box() {
        let topology = Topology::new();
        for cell in cells() {
            let memberships = topology.units_of(cell).count();
            // Three units for an off-diagonal cell, four on one diagonal,
            // five for the centre cell which lies on both.
            assert!((3..=5).contains(&memberships), "{cell}: {memberships}");
        }
    }

    #[test]
    fn test_off_diagonal_cell_has_twenty_peers() {
        let topology = Topology::new();
        let cell = Cell::new(0, 1); // A2, not on either diagonal
        assert_eq!(topology.peers(cell).len(), 20);
    }

    #[test]
    fn test_peers_are_symmetric() {
        let topology = Topology::new();
        for cell in cells() {
            for &peer in topology.peers(cell) {
                assert_ne!(peer, cell);
                assert!(
                    topology.peers(peer).contains(&cell),
                    "{peer} missing from peers of {cell}"
                );
            }
        }
    }

    #[test]
    fn test_diagonal_cells_are_mutual_peers() {
        let topology = Topology::new();
        assert!(topology.peers(Cell::new(0, 0)).contains(&Cell::new(8, 8)));
        assert!(topology.peers(Cell::new(0, 8)).contains(&Cell::new(8, 0)));
    }
}
