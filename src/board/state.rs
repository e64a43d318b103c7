use log::trace;

use super::error::SquareError;
use super::{Coord, PieceKind, Square, SquareSet, NUM_SQUARES};

/// Back rank from left to right, identical for both ends of the board.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 64 squares of a game, addressed by row-major index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Square; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup();
        board
    }

    /// A board with every square Empty.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|index| Square::new(index, PieceKind::Empty)),
        }
    }

    /// Reset all 64 squares to the starting position.
    ///
    /// Back ranks on rows 0 and 7, pawns on rows 1 and 6, the rest Empty.
    pub fn setup(&mut self) {
        for square in &mut self.squares {
            square.set_kind(PieceKind::Empty);
        }
        for (x, kind) in BACK_RANK.iter().enumerate() {
            self.squares[x].set_kind(*kind);
            self.squares[8 + x].set_kind(PieceKind::Pawn);
            self.squares[48 + x].set_kind(PieceKind::Pawn);
            self.squares[56 + x].set_kind(*kind);
        }
    }

    /// The square at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`. Use `try_square_at` for
    /// indices that come from user input.
    #[inline]
    #[must_use]
    pub fn square_at(&self, index: usize) -> &Square {
        &self.squares[index]
    }

    pub fn try_square_at(&self, index: usize) -> Result<&Square, SquareError> {
        self.squares
            .get(index)
            .ok_or(SquareError::IndexOutOfBounds { index })
    }

    #[inline]
    #[must_use]
    pub fn kind_at(&self, index: usize) -> PieceKind {
        self.squares[index].kind()
    }

    #[inline]
    #[must_use]
    pub fn kind_on(&self, coord: Coord) -> PieceKind {
        self.kind_at(coord.index())
    }

    /// Overwrite the kind shown at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`.
    #[inline]
    pub fn set_kind(&mut self, index: usize, kind: PieceKind) {
        self.squares[index].set_kind(kind);
    }

    /// All squares in index order.
    #[must_use]
    pub fn squares(&self) -> &[Square; NUM_SQUARES] {
        &self.squares
    }

    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Reset every Highlighted square to Empty. Returns how many were reset.
    pub fn clear_highlights(&mut self) -> usize {
        let cleared = self
            .squares
            .iter_mut()
            .map(Square::clear_highlight)
            .filter(|&was_highlighted| was_highlighted)
            .count();
        if cleared > 0 {
            trace!("cleared {cleared} highlighted squares");
        }
        cleared
    }

    /// Relocate the piece on `from` to `to`: `to` takes `from`'s kind and
    /// `from` becomes Empty. No legality check is made here.
    pub fn commit_move(&mut self, from: usize, to: usize) {
        let kind = self.kind_at(from);
        self.set_kind(to, kind);
        self.set_kind(from, PieceKind::Empty);
    }

    /// Number of squares holding a piece.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.kind().is_piece()).count()
    }

    /// Indices of all Highlighted squares.
    #[must_use]
    pub fn highlighted(&self) -> SquareSet {
        self.squares_with(PieceKind::Highlighted)
    }

    /// Indices of all squares showing `kind`.
    #[must_use]
    pub fn squares_with(&self, kind: PieceKind) -> SquareSet {
        self.squares
            .iter()
            .filter(|s| s.kind() == kind)
            .map(Square::index)
            .collect()
    }
}
