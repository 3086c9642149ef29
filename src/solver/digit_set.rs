#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A candidate set packed into the low nine bits of a `u16`.
//!
//! Bit `d - 1` is set when digit `d` is still possible for a cell. A set of
//! length one means the cell is assigned, an empty set is a contradiction,
//! and the full set is an unconstrained cell. During solving a cell's set
//! only ever shrinks.

use std::fmt::{self, Display};

/// The mask covering all nine digit bits.
const ALL_BITS: u16 = 0x1FF;

/// A set of candidate digits `1..=9` for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set. A cell holding it has no possible digit left.
    pub const EMPTY: Self = Self(0);

    /// The full set `{1..9}`, the state of an unconstrained cell.
    pub const ALL: Self = Self(ALL_BITS);

    /// Creates the singleton set containing only `digit`.
    #[must_use]
    pub const fn singleton(digit: u8) -> Self {
        debug_assert!(digit >= 1 && digit <= 9);
        Self(1 << (digit - 1))
    }

    /// Whether `digit` is still a candidate.
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        self.0 & Self::singleton(digit).0 != 0
    }

    /// The set with `digit` removed. Removing an absent digit is a no-op.
    #[must_use]
    pub const fn without(self, digit: u8) -> Self {
        Self(self.0 & !Self::singleton(digit).0)
    }

    /// The set difference `self \ other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// The number of candidates remaining.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no candidate remains. This is the contradiction state.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether exactly one candidate remains, i.e. the cell is assigned.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0.count_ones() == 1
    }

    /// The assigned digit, if the set is a singleton.
    #[must_use]
    pub const fn sole(self) -> Option<u8> {
        if self.is_assigned() {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterates over the candidates in ascending digit order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&digit| self.contains(digit))
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<T: IntoIterator<Item = u8>>(digits: T) -> Self {
        digits
            .into_iter()
            .fold(Self::EMPTY, |set, digit| Self(set.0 | Self::singleton(digit).0))
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
