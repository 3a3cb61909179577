//! Headless playback of a fixed move list.

use crate::messages;
use noughts_engine::{
    Board, GameEngine, MoveOutcome, Player, PlayerNames, Position, RoundState, Scoreboard,
};
use serde::Serialize;
use tracing::{info, instrument};

/// One requested cell and what the engine made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Requested cell index.
    pub index: usize,
    /// Player to move when the cell was requested.
    pub player: Player,
    /// Engine response.
    pub outcome: MoveOutcome,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Player names used.
    pub names: PlayerNames,
    /// Every requested move, including ignored ones.
    pub steps: Vec<ReplayStep>,
    /// Final board.
    pub board: Board,
    /// Final round phase.
    pub round: RoundState,
    /// Final scores.
    pub scores: Scoreboard,
    /// Status line a player would see.
    pub status: String,
}

/// Starts a round and feeds `moves` to it in order.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(player_x: Option<&str>, player_o: Option<&str>, moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::new();
    engine.configure_names(player_x.unwrap_or_default(), player_o.unwrap_or_default());
    engine.start_round();

    let mut status = messages::turn(&engine, Player::X);
    let steps = moves
        .iter()
        .map(|&index| {
            let player = engine.current_player();
            let outcome = engine.place_mark(index);
            match outcome {
                MoveOutcome::Win { winner, .. } => status = messages::win(&engine, winner),
                MoveOutcome::Draw => status = messages::DRAW.to_string(),
                MoveOutcome::Ongoing { next_player } => {
                    status = messages::turn(&engine, next_player)
                }
                MoveOutcome::Ignored(_) => {}
            }
            ReplayStep {
                index,
                player,
                outcome,
            }
        })
        .collect();

    info!(round = %engine.round_state(), "Replay finished");
    ReplayReport {
        names: engine.names().clone(),
        steps,
        board: engine.board().clone(),
        round: engine.round_state(),
        scores: *engine.scores(),
        status,
    }
}

impl ReplayReport {
    /// Human-readable summary: one line per move, the board, then scores.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            let cell = Position::from_index(step.index)
                .map(|pos| pos.label().to_string())
                .unwrap_or_else(|| format!("cell {}", step.index));
            let result = match step.outcome {
                MoveOutcome::Win { winner, .. } => format!("{} wins", winner),
                MoveOutcome::Draw => "draw".to_string(),
                MoveOutcome::Ongoing { next_player } => format!("{} to move", next_player),
                MoveOutcome::Ignored(reason) => format!("ignored: {}", reason),
            };
            out.push_str(&format!("{} -> {}: {}\n", step.player, cell, result));
        }
        out.push('\n');
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        out.push_str(&format!(
            "{} (X): {}  {} (O): {}\n",
            self.names.get(Player::X),
            self.scores.get(Player::X),
            self.names.get(Player::O),
            self.scores.get(Player::O),
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_win() {
        let report = replay(Some("Ann"), None, &[0, 3, 1, 4, 2]);
        assert_eq!(report.round, RoundState::Won);
        assert_eq!(report.status, "Ann wins! 🎉");
        assert_eq!(report.scores.get(Player::X), 1);
        assert_eq!(report.names.get(Player::O), "Player 2");
    }

    #[test]
    fn test_replay_reports_ignored_moves() {
        let report = replay(None, None, &[4, 4, 12]);
        assert_eq!(report.steps.len(), 3);
        assert!(!report.steps[1].outcome.is_applied());
        assert!(!report.steps[2].outcome.is_applied());
        assert_eq!(report.status, "Player 2's turn (O)");
    }

    #[test]
    fn test_render_text_lists_moves_and_board() {
        let text = replay(None, None, &[4, 9]).render_text();
        assert!(text.starts_with("X -> Center: O to move\nO -> cell 9: ignored: cell 9 is off the board\n"));
        assert!(text.contains("1|2|3\n-+-+-\n4|X|6"));
        assert!(text.ends_with("Player 1 (X): 0  Player 2 (O): 0\n"));
    }
}
