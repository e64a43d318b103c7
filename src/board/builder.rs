//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing layouts.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{BoardBuilder, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(0, PieceKind::Rook)
//!     .piece(60, PieceKind::King)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Coord, PieceKind};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    placements: Vec<(usize, PieceKind)>,
}

impl BoardBuilder {
    /// Create a builder for an otherwise empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placements: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let placements = Board::new()
            .iter()
            .filter(|s| s.kind().is_piece())
            .map(|s| (s.index(), s.kind()))
            .collect();
        BoardBuilder { placements }
    }

    /// Place a kind on an index, replacing whatever was placed there before.
    ///
    /// The index is checked when the board is built.
    #[must_use]
    pub fn piece(mut self, index: usize, kind: PieceKind) -> Self {
        self.placements.retain(|(i, _)| *i != index);
        self.placements.push((index, kind));
        self
    }

    /// Place a kind on a coordinate.
    #[must_use]
    pub fn piece_on(self, coord: Coord, kind: PieceKind) -> Self {
        self.piece(coord.index(), kind)
    }

    /// Remove a placement.
    #[must_use]
    pub fn clear(mut self, index: usize) -> Self {
        self.placements.retain(|(i, _)| *i != index);
        self
    }

    /// Build the board.
    ///
    /// # Panics
    /// Panics if any placement index is not in `0..64`.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (index, kind) in self.placements {
            board.set_kind(index, kind);
        }
        board
    }
}
