//! The round state machine.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, Evaluation};
use crate::{
    Board, IgnoredMove, MoveOutcome, Player, PlayerNames, Position, RoundState, Scoreboard,
    Square, StartRound,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns everything a match needs: the board, whose turn it is, the round
/// phase, the running score and the player names. Each value is an
/// independent game; nothing is shared between engines.
///
/// Invalid input is absorbed. Every operation either applies a transition or
/// leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    round: RoundState,
    scores: Scoreboard,
    names: PlayerNames,
    names_configured: bool,
    last_move: Option<Position>,
}

impl GameEngine {
    /// Creates an engine with an inactive round and default names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            round: RoundState::Inactive,
            scores: Scoreboard::new(),
            names: PlayerNames::default(),
            names_configured: false,
            last_move: None,
        }
    }

    /// Sets the display names and marks them as configured.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". The round is not
    /// touched.
    #[instrument(skip(self))]
    pub fn configure_names(&mut self, first: &str, second: &str) {
        self.names = PlayerNames::sanitized(first, second);
        self.names_configured = true;
        info!(
            x = self.names.get(Player::X),
            o = self.names.get(Player::O),
            "Player names configured"
        );
    }

    /// Starts a round, or asks for names first if none were configured.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) -> StartRound {
        if !self.names_configured {
            debug!("Names not configured, round not started");
            return StartRound::NamesRequired;
        }
        self.reset_round();
        StartRound::Started
    }

    /// Clears the board and begins a fresh round with X to move.
    ///
    /// Safe from any state, including mid-round.
    #[instrument(skip(self), fields(previous = %self.round))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.round = RoundState::InProgress;
        self.last_move = None;
        info!("Round started");
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Returns [`MoveOutcome::Ignored`] without mutating anything when the
    /// round is not in progress, the index is off the board, or the cell is
    /// taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, index: usize) -> MoveOutcome {
        let pos = match self.target(index) {
            Ok(pos) => pos,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                return MoveOutcome::Ignored(reason);
            }
        };

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.last_move = Some(pos);

        let outcome = match rules::evaluate(&self.board) {
            Evaluation::Win { winner, line } => self.finish_won(winner, line),
            Evaluation::Draw => {
                self.round = RoundState::Drawn;
                info!("Round drawn");
                MoveOutcome::Draw
            }
            Evaluation::Ongoing => {
                self.current_player = player.opponent();
                MoveOutcome::Ongoing {
                    next_player: self.current_player,
                }
            }
        };

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after move at {index}"
        );
        outcome
    }

    /// Classifies the current board without changing anything.
    pub fn evaluate_outcome(&self) -> Evaluation {
        rules::evaluate(&self.board)
    }

    /// Zeroes both scores and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("Scores reset");
        self.reset_round();
    }

    /// Resolves `index` to an empty cell of a live round.
    fn target(&self, index: usize) -> Result<Position, IgnoredMove> {
        if !self.round.accepts_moves() {
            return Err(IgnoredMove::RoundNotActive);
        }
        match Position::from_index(index) {
            None => Err(IgnoredMove::OutOfRange(index)),
            Some(pos) if !self.board.is_empty(pos) => Err(IgnoredMove::Occupied(index)),
            Some(pos) => Ok(pos),
        }
    }

    fn finish_won(&mut self, winner: Player, line: rules::WinLine) -> MoveOutcome {
        self.round = RoundState::Won;
        self.scores.record_win(winner);
        info!(%winner, name = self.names.get(winner), "Round won");
        MoveOutcome::Win { winner, line }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move; after a win, the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Phase of the current round.
    pub fn round_state(&self) -> RoundState {
        self.round
    }

    /// Win tallies.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Display name of `player`.
    pub fn name_of(&self, player: Player) -> &str {
        self.names.get(player)
    }

    /// Whether names were set through [`GameEngine::configure_names`].
    pub fn names_configured(&self) -> bool {
        self.names_configured
    }

    /// Most recently filled cell in this round.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.configure_names("Ann", "Bo");
        assert_eq!(engine.start_round(), StartRound::Started);
        engine
    }

    #[test]
    fn test_new_engine_is_inactive() {
        let engine = GameEngine::new();
        assert_eq!(engine.round_state(), RoundState::Inactive);
        assert_eq!(engine.board(), &Board::new());
        assert!(!engine.names_configured());
    }

    #[test]
    fn test_moves_ignored_before_start() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.place_mark(4),
            MoveOutcome::Ignored(IgnoredMove::RoundNotActive)
        );
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_start_without_names_changes_nothing() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.start_round(), StartRound::NamesRequired);
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut engine = started();
        let before = engine.clone();
        assert_eq!(
            engine.place_mark(9),
            MoveOutcome::Ignored(IgnoredMove::OutOfRange(9))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_last_move_tracks_latest_cell() {
        let mut engine = started();
        engine.place_mark(0);
        engine.place_mark(8);
        assert_eq!(engine.last_move(), Some(Position::BottomRight));
        engine.reset_round();
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_winner_stays_current() {
        let mut engine = started();
        for index in [0, 3, 1, 4] {
            engine.place_mark(index);
        }
        assert!(matches!(engine.place_mark(2), MoveOutcome::Win { winner: Player::X, .. }));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.name_of(engine.current_player()), "Ann");
    }
}
