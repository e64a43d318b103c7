//! Board representation and movement rules.
//!
//! The board is a fixed grid of 64 squares indexed row-major from the top
//! left. Movement rules are simplified: no colours, no captures, no check.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{Board, PieceKind};
//!
//! let mut board = Board::new();
//! let destinations = board.highlight_destinations(57);
//! assert_eq!(destinations.to_vec(), vec![40, 42]);
//! assert_eq!(board.kind_at(40), PieceKind::Highlighted);
//! ```

mod builder;
mod display;
mod error;
mod layout;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{LayoutError, SquareError};
pub use state::Board;
pub use types::{Coord, PieceKind, Square, SquareSet, SquareSetIter, BOARD_SIZE, NUM_SQUARES};
