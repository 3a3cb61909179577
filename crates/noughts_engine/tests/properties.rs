//! Property tests over arbitrary move sequences.

use noughts_engine::{GameEngine, MoveOutcome, Player, RoundState, Square};
use proptest::prelude::*;

fn started() -> GameEngine {
    let mut engine = GameEngine::new();
    engine.configure_names("Ann", "Bo");
    engine.start_round();
    engine
}

proptest! {
    #[test]
    fn filled_cells_never_change(moves in prop::collection::vec(0usize..12, 0..30)) {
        let mut engine = started();
        let mut seen = [Square::Empty; 9];
        for index in moves {
            engine.place_mark(index);
            for (cell, before) in engine.board().squares().iter().zip(seen.iter_mut()) {
                if *before != Square::Empty {
                    prop_assert_eq!(*cell, *before);
                }
                *before = *cell;
            }
        }
    }

    #[test]
    fn marks_alternate_starting_with_x(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = started();
        let mut expected = Player::X;
        for index in moves {
            let before = engine.clone();
            match engine.place_mark(index) {
                MoveOutcome::Ignored(_) => prop_assert_eq!(&engine, &before),
                MoveOutcome::Ongoing { next_player } => {
                    prop_assert_eq!(engine.board().get(engine.last_move().unwrap()), Square::Occupied(expected));
                    expected = expected.opponent();
                    prop_assert_eq!(next_player, expected);
                }
                MoveOutcome::Win { winner, .. } => {
                    prop_assert_eq!(winner, expected);
                    prop_assert_eq!(engine.round_state(), RoundState::Won);
                }
                MoveOutcome::Draw => prop_assert_eq!(engine.round_state(), RoundState::Drawn),
            }
        }
    }

    #[test]
    fn score_changes_only_on_win(moves in prop::collection::vec(0usize..9, 0..40)) {
        let mut engine = started();
        for index in moves {
            let x = engine.scores().get(Player::X);
            let o = engine.scores().get(Player::O);
            let outcome = engine.place_mark(index);
            let (dx, do_) = (engine.scores().get(Player::X) - x, engine.scores().get(Player::O) - o);
            match outcome {
                MoveOutcome::Win { winner: Player::X, .. } => prop_assert_eq!((dx, do_), (1, 0)),
                MoveOutcome::Win { winner: Player::O, .. } => prop_assert_eq!((dx, do_), (0, 1)),
                _ => prop_assert_eq!((dx, do_), (0, 0)),
            }
            if engine.round_state().is_terminal() {
                engine.reset_round();
            }
        }
    }
}
