//! Piece kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a square currently shows.
///
/// `Highlighted` is not a piece: it marks a vacant square that is a valid
/// destination for the current selection. Pieces carry no colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    #[default]
    Empty,
    Pawn,
    Bishop,
    King,
    Knight,
    Queen,
    Rook,
    Highlighted,
}

impl PieceKind {
    /// All kinds, pseudo-kinds included
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Empty,
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Highlighted,
    ];

    /// The six real pieces
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::Rook,
    ];

    /// Returns true if no piece stands here (Empty or Highlighted).
    #[inline]
    #[must_use]
    pub const fn is_vacant(self) -> bool {
        matches!(self, PieceKind::Empty | PieceKind::Highlighted)
    }

    #[inline]
    #[must_use]
    pub const fn is_piece(self) -> bool {
        !self.is_vacant()
    }

    /// Returns true if this piece slides and can be blocked (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Single-character glyph used by the text board and layouts.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::King => 'K',
            PieceKind::Knight => 'N',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Highlighted => '*',
        }
    }

    /// Parse a glyph produced by [`PieceKind::to_char`]. Piece letters are
    /// case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            '.' => Some(PieceKind::Empty),
            'P' => Some(PieceKind::Pawn),
            'B' => Some(PieceKind::Bishop),
            'K' => Some(PieceKind::King),
            'N' => Some(PieceKind::Knight),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            '*' => Some(PieceKind::Highlighted),
            _ => None,
        }
    }

    /// Lowercase name, as printed by the session.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "empty",
            PieceKind::Pawn => "pawn",
            PieceKind::Bishop => "bishop",
            PieceKind::King => "king",
            PieceKind::Knight => "knight",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Highlighted => "highlighted",
        }
    }

    /// Image file a graphical front end shows for this kind.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            PieceKind::Empty => "EmptySquare.jpg",
            PieceKind::Pawn => "Pawn.jpg",
            PieceKind::Bishop => "Bishop.jpg",
            PieceKind::King => "King.jpg",
            PieceKind::Knight => "Knight.jpg",
            PieceKind::Queen => "Queen.jpg",
            PieceKind::Rook => "Rook.jpg",
            PieceKind::Highlighted => "SelectedSquare.jpg",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacancy() {
        assert!(PieceKind::Empty.is_vacant());
        assert!(PieceKind::Highlighted.is_vacant());
        for kind in PieceKind::PIECES {
            assert!(kind.is_piece(), "{kind} should be a piece");
        }
    }

    #[test]
    fn test_glyphs_parse_back() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('n'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn test_assets_are_distinct() {
        let mut names: Vec<&str> = PieceKind::ALL.iter().map(|k| k.asset_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PieceKind::ALL.len());
        assert_eq!(PieceKind::Highlighted.asset_name(), "SelectedSquare.jpg");
    }
}
