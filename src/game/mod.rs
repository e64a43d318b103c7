//! Selection state machine.
//!
//! A [`Game`] owns the board and reacts to activations of board indices:
//! the first activation on a piece highlights where it can go, the second
//! either moves it, cancels, or switches to another piece.
//!
//! # Example
//! ```
//! use hotseat_chess::game::{Activation, Game};
//! use hotseat_chess::board::PieceKind;
//!
//! let mut game = Game::new();
//! assert!(matches!(game.activate(52), Activation::Selected { .. }));
//! assert!(game.activate(36).is_move());
//! assert_eq!(game.board().kind_at(36), PieceKind::Pawn);
//! ```

mod activation;


use log::debug;

use crate::board::{Board, SquareSet};

pub use activation::{Activation, SelectionState};
pub(crate) use activation::destinations_line;

/// Board plus the current selection.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    state: SelectionState,
}

impl Game {
    /// A game in the starting position with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game on an arbitrary board with nothing selected.
    ///
    /// Leftover highlights on `board` are kept; they are treated as empty
    /// squares until the next highlight pass.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            state: SelectionState::Idle,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The piece awaiting a destination, if any.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::AwaitingDestination { origin } => Some(origin),
        }
    }

    /// Squares currently offered as destinations.
    #[must_use]
    pub fn destinations(&self) -> SquareSet {
        self.board.highlighted()
    }

    /// Back to the starting position with nothing selected.
    pub fn reset(&mut self) {
        self.board.setup();
        self.state = SelectionState::Idle;
        debug!("board reset");
    }

    /// Replace the board, dropping any selection.
    pub fn load(&mut self, board: Board) {
        self.board = board;
        self.state = SelectionState::Idle;
    }

    /// Handle an activation of the square at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`.
    pub fn activate(&mut self, index: usize) -> Activation {
        let kind = self.board.kind_at(index);

        let origin = match self.state {
            SelectionState::Idle => {
                if kind.is_vacant() {
                    return Activation::Ignored { index };
                }
                self.state = SelectionState::AwaitingDestination { origin: index };
                let destinations = self.board.highlight_destinations(index);
                debug!("selected {kind} at {index}, {} destinations", destinations.len());
                return Activation::Selected {
                    origin: index,
                    kind,
                    destinations,
                };
            }
            SelectionState::AwaitingDestination { origin } => origin,
        };

        if kind.is_vacant() {
            let destination = self.board.square_at(index).is_highlighted();
            self.board.clear_highlights();
            self.state = SelectionState::Idle;

            if destination {
                let moved = self.board.kind_at(origin);
                self.board.commit_move(origin, index);
                debug!("moved {moved} from {origin} to {index}");
                return Activation::Moved {
                    from: origin,
                    to: index,
                    kind: moved,
                };
            }
            debug!("selection at {origin} cancelled");
            return Activation::Cancelled { origin };
        }

        // Another piece: drop the selection and handle the activation afresh.
        self.board.clear_highlights();
        self.state = SelectionState::Idle;
        match self.activate(index) {
            Activation::Selected {
                origin: new_origin,
                kind,
                destinations,
            } => {
                debug!("selection moved from {origin} to {new_origin}");
                Activation::Reselected {
                    previous: origin,
                    origin: new_origin,
                    kind,
                    destinations,
                }
            }
            other => other,
        }
    }
}
