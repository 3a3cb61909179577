//! Terminal phases agree with the board.

use super::Invariant;
use crate::rules::{Evaluation, evaluate};
use crate::{GameEngine, RoundState};

/// Invariant: the round phase matches what the board shows.
///
/// A won round has a complete line owned by the current player, a drawn
/// round has a full board with no line, and a live round has neither.
pub struct SettledRoundInvariant;

impl Invariant<GameEngine> for SettledRoundInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match (engine.round_state(), evaluate(engine.board())) {
            (RoundState::Won, Evaluation::Win { winner, .. }) => {
                winner == engine.current_player()
            }
            (RoundState::Drawn, Evaluation::Draw) => true,
            (RoundState::InProgress, Evaluation::Ongoing) => true,
            (RoundState::Inactive, _) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Round phase agrees with the board evaluation"
    }
}
