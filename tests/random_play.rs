//! Long random activation sequences against the invariants of the game.

use rand::prelude::*;

use hotseat_chess::board::{PieceKind, NUM_SQUARES};
use hotseat_chess::game::{Activation, Game, SelectionState};

#[test]
fn random_activations_keep_invariants() {
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for _ in 0..500 {
            let index = rng.gen_range(0..NUM_SQUARES);
            let before = game.board().clone();
            let outcome = game.activate(index);

            // No captures: pieces are only ever relocated.
            assert_eq!(game.board().piece_count(), 32, "seed {seed}");

            match (outcome, game.state()) {
                (Activation::Moved { from, to, kind }, SelectionState::Idle) => {
                    assert_eq!(before.kind_at(from), kind);
                    assert_eq!(before.kind_at(to), PieceKind::Highlighted);
                    assert_eq!(game.board().kind_at(to), kind);
                    assert_eq!(game.board().kind_at(from), PieceKind::Empty);
                }
                (Activation::Ignored { .. } | Activation::Cancelled { .. }, SelectionState::Idle) => {}
                (
                    Activation::Selected { origin, destinations, .. }
                    | Activation::Reselected { origin, destinations, .. },
                    SelectionState::AwaitingDestination { origin: pending },
                ) => {
                    assert_eq!(origin, pending);
                    assert_eq!(game.board().highlighted(), destinations);
                }
                (outcome, state) => panic!("seed {seed}: {outcome:?} left state {state:?}"),
            }

            if game.state() == SelectionState::Idle {
                assert!(game.board().highlighted().is_empty(), "seed {seed}");
            }
        }
    }
}
