//! Two-player local chess movement demo.
//!
//! Pieces move by simplified rules (no colours, captures or check) and are
//! driven by activations of board squares: the first activation on a piece
//! highlights its destinations, the second moves it.

pub mod board;
pub mod game;
pub mod session;

pub use board::{Board, Coord, PieceKind, Square, SquareSet};
pub use game::{Activation, Game, SelectionState};
