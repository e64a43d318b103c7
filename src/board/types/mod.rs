//! Core board types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Coord` - column/row position of a cell
//! - `PieceKind` - what a cell currently shows
//! - `Square` - a cell on the board (coordinate + kind)
//! - `SquareSet` - 64-bit set of board indices

mod coord;
mod piece;
mod square;
mod square_set;

pub use coord::{Coord, BOARD_SIZE, NUM_SQUARES};
pub use piece::PieceKind;
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
