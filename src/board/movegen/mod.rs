//! Movement rules.
//!
//! A move is legal when the destination is vacant and the piece's movement
//! pattern reaches it. There are no captures, no colours and no check
//! detection; sliding pieces are stopped by any piece in between.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::kings::king_can_reach;
use self::knights::knight_can_reach;
use self::pawns::pawn_can_reach;
use self::sliders::SliderType;
use super::{Board, Coord, PieceKind, SquareSet, NUM_SQUARES};

impl Board {
    /// Whether the piece on `source` may move to `candidate`.
    ///
    /// Occupied candidates are always rejected. Empty or Highlighted sources
    /// have no moves.
    ///
    /// # Panics
    /// Panics if either index is not in `0..64`.
    #[must_use]
    pub fn can_move_to(&self, source: usize, candidate: usize) -> bool {
        if !self.kind_at(candidate).is_vacant() {
            return false;
        }

        let from = Coord::from_index(source);
        let to = Coord::from_index(candidate);
        match self.kind_at(source) {
            PieceKind::Pawn => pawn_can_reach(from, to),
            PieceKind::King => king_can_reach(from, to),
            PieceKind::Knight => knight_can_reach(from, to),
            PieceKind::Bishop => self.slider_can_reach(from, to, SliderType::Bishop),
            PieceKind::Rook => self.slider_can_reach(from, to, SliderType::Rook),
            PieceKind::Queen => self.slider_can_reach(from, to, SliderType::Queen),
            PieceKind::Empty | PieceKind::Highlighted => false,
        }
    }

    /// Every index the piece on `source` may move to. Does not modify the board.
    #[must_use]
    pub fn legal_destinations(&self, source: usize) -> SquareSet {
        (0..NUM_SQUARES)
            .filter(|&candidate| self.can_move_to(source, candidate))
            .collect()
    }

    /// Mark every legal destination of `source` as Highlighted and return them.
    ///
    /// Highlighted squares count as vacant, so marking does not change the
    /// outcome for squares evaluated afterwards.
    pub fn highlight_destinations(&mut self, source: usize) -> SquareSet {
        let destinations = self.legal_destinations(source);
        for index in destinations {
            self.set_kind(index, PieceKind::Highlighted);
        }
        destinations
    }
}
