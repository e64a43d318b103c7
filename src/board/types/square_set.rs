//! Set of board indices packed into a `u64`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, NUM_SQUARES};

/// A set of board indices, bit `i` standing for index `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set with a single index
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < NUM_SQUARES, "square index out of range");
        SquareSet(1 << index)
    }

    /// Returns an iterator over the indices in ascending order
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < NUM_SQUARES && (self.0 >> index) & 1 == 1
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        *self = self.or(SquareSet::from_index(index));
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        *self = self.and(SquareSet::from_index(index).not());
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        SquareSet(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        SquareSet(!self.0)
    }

    /// Indices as a vector, ascending.
    #[must_use]
    pub fn to_vec(self) -> Vec<usize> {
        self.iter().collect()
    }
}

fn pop_lsb(set: &mut SquareSet) -> usize {
    let index = set.0.trailing_zeros() as usize;
    set.0 &= set.0 - 1;
    index
}

/// Iterator over the indices of a `SquareSet`
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = usize;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for SquareSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// Space-separated algebraic squares, e.g. `e3 e4`.
impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", Coord::from_index(index))?;
        }
        Ok(())
    }
}
