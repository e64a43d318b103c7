//! A single cell of the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, PieceKind};

/// A cell: fixed coordinate plus the kind currently shown on it.
///
/// Pieces are not tracked as objects; moving one copies the kind between
/// squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    coord: Coord,
    kind: PieceKind,
}

impl Square {
    /// Create the square at `index` holding `kind`.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`.
    #[must_use]
    pub fn new(index: usize, kind: PieceKind) -> Self {
        Square {
            coord: Coord::from_index(index),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.coord.index()
    }

    #[inline]
    #[must_use]
    pub const fn x(&self) -> usize {
        self.coord.x()
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> usize {
        self.coord.y()
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn set_kind(&mut self, kind: PieceKind) {
        self.kind = kind;
    }

    /// Returns true if no piece stands here.
    #[inline]
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        self.kind.is_vacant()
    }

    #[inline]
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.kind == PieceKind::Highlighted
    }

    /// Reset a highlighted square to Empty. Returns true if it was highlighted.
    pub fn clear_highlight(&mut self) -> bool {
        if self.is_highlighted() {
            self.kind = PieceKind::Empty;
            true
        } else {
            false
        }
    }
}
