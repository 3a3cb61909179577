//! What the engine reports back after an operation.

use crate::{Player, WinLine};
use serde::{Deserialize, Serialize};

/// Why a mark was not placed.
///
/// These are ordinary consequences of UI timing (double clicks, clicks after
/// the round ended), not failures: the engine state is left untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum IgnoredMove {
    /// The round is inactive, won or drawn.
    #[display("round is not in progress")]
    RoundNotActive,
    /// The index is outside 0-8.
    #[display("cell {_0} is off the board")]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    Occupied(usize),
}

/// Result of [`GameEngine::place_mark`](crate::GameEngine::place_mark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark completed a line; the round is won.
    Win {
        /// Player who placed the final mark.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled with no line; the round is drawn.
    Draw,
    /// Play continues with the other player.
    Ongoing {
        /// Player to move next.
        next_player: Player,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True when the move mutated the engine.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// True when the move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::Draw)
    }
}

/// Result of [`GameEngine::start_round`](crate::GameEngine::start_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartRound {
    /// Names have not been configured; collect them first. Nothing changed.
    NamesRequired,
    /// A fresh round is in progress.
    Started,
}
