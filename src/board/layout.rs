//! Text layouts: eight rows of glyphs separated by `/`, top row first.
//!
//! Pieces use `P B K N Q R`, highlighted squares `*`, and runs of empty
//! squares are written as a digit (or spelled out with `.`). The starting
//! position is `RNBQKBNR/PPPPPPPP/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, PieceKind, BOARD_SIZE};

impl Board {
    /// Parse a board from a layout string.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = layout.trim().split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    x += run as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(LayoutError::InvalidGlyph { glyph: c })?;
                if x >= BOARD_SIZE {
                    return Err(LayoutError::WrongRowLength {
                        row: y,
                        length: x + 1,
                    });
                }
                board.set_kind(y * BOARD_SIZE + x, kind);
                x += 1;
            }
            if x != BOARD_SIZE {
                return Err(LayoutError::WrongRowLength { row: y, length: x });
            }
        }

        Ok(board)
    }

    /// Render the board as a layout string.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut layout = String::new();
        for (y, row) in self.squares.chunks(BOARD_SIZE).enumerate() {
            if y > 0 {
                layout.push('/');
            }
            let mut empty_run = 0;
            for square in row {
                if square.kind() == PieceKind::Empty {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    layout.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                layout.push(square.kind().to_char());
            }
            if empty_run > 0 {
                layout.push_str(&empty_run.to_string());
            }
        }
        layout
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_layout())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let layout = String::deserialize(deserializer)?;
        Board::try_from_layout(&layout).map_err(serde::de::Error::custom)
    }
}
