//! Outcome of a single activation.

use std::fmt;

use crate::board::{Coord, PieceKind, SquareSet};

/// Where the selection stands between activations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Idle,
    /// A piece was picked and its destinations are highlighted
    AwaitingDestination { origin: usize },
}

/// What an activation did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A vacant square was activated with nothing selected
    Ignored { index: usize },
    /// A piece was picked up and its destinations highlighted
    Selected {
        origin: usize,
        kind: PieceKind,
        destinations: SquareSet,
    },
    /// The selected piece moved to a highlighted square
    Moved {
        from: usize,
        to: usize,
        kind: PieceKind,
    },
    /// An empty non-destination square was activated; selection dropped
    Cancelled { origin: usize },
    /// Another piece was activated; selection moved over to it
    Reselected {
        previous: usize,
        origin: usize,
        kind: PieceKind,
        destinations: SquareSet,
    },
}

impl Activation {
    /// Returns true if the board's pieces changed.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Activation::Moved { .. })
    }

    /// One-line report, with squares written by `square`.
    ///
    /// `Display` uses algebraic squares; the session passes its own notation.
    #[must_use]
    pub fn report<F: Fn(usize) -> String>(&self, square: F) -> String {
        match *self {
            Activation::Ignored { index } => format!("ignored {}", square(index)),
            Activation::Selected {
                origin,
                kind,
                destinations,
            } => format!(
                "selected {} {kind} {}",
                square(origin),
                destinations_line(destinations, &square)
            ),
            Activation::Moved { from, to, kind } => {
                format!("moved {} {} {kind}", square(from), square(to))
            }
            Activation::Cancelled { origin } => format!("cancelled {}", square(origin)),
            Activation::Reselected {
                previous,
                origin,
                kind,
                destinations,
            } => format!(
                "reselected {} {} {kind} {}",
                square(previous),
                square(origin),
                destinations_line(destinations, &square)
            ),
        }
    }
}

/// `destinations <sq> <sq> ...`, or `destinations none`.
pub(crate) fn destinations_line<F: Fn(usize) -> String>(
    destinations: SquareSet,
    square: F,
) -> String {
    if destinations.is_empty() {
        return "destinations none".to_string();
    }
    let squares: Vec<String> = destinations.iter().map(square).collect();
    format!("destinations {}", squares.join(" "))
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(|index| Coord::from_index(index).to_string()))
    }
}
