//! Turn order matches the board.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: during a live round, X is to move exactly when the mark
/// counts are equal.
pub struct TurnOrderInvariant;

impl Invariant<GameEngine> for TurnOrderInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if !engine.round_state().accepts_moves() {
            return true;
        }
        let board = engine.board();
        let x_to_move = board.count(Player::X) == board.count(Player::O);
        x_to_move == (engine.current_player() == Player::X)
    }

    fn description() -> &'static str {
        "Current player alternates starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_holds_each_move() {
        let mut engine = GameEngine::new();
        engine.configure_names("a", "b");
        engine.start_round();
        for index in [0, 1, 2, 4] {
            engine.place_mark(index);
            assert!(TurnOrderInvariant::holds(&engine));
        }
    }
}
