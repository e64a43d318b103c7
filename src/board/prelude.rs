//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use hotseat_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.kind_at(60), PieceKind::King);
//! ```

pub use super::{
    Board, BoardBuilder, Coord, LayoutError, PieceKind, Square, SquareError, SquareSet,
};
