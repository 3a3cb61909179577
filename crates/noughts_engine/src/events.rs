//! Input events from a presentation layer.
//!
//! Front-ends translate clicks and key presses into [`InputEvent`]s and read
//! the [`EngineReply`] to decide what to redraw. Each event is processed to
//! completion before the next.

use crate::{GameEngine, MoveOutcome, StartRound};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something the player did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A board cell (0-8) was chosen.
    CellSelected(usize),
    /// The start/restart control was used.
    RoundStartRequested,
    /// The reset-scores control was used.
    ScoresResetRequested,
    /// The name form was submitted.
    NamesSubmitted {
        /// Name for X.
        first: String,
        /// Name for O.
        second: String,
    },
}

/// What changed in response to an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineReply {
    /// Result of a cell selection.
    Move(MoveOutcome),
    /// Names must be collected before a round can start.
    NamesRequired,
    /// A fresh round is in progress.
    RoundStarted,
    /// Scores were zeroed and a fresh round is in progress.
    ScoresReset,
}

impl GameEngine {
    /// Applies one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> EngineReply {
        match event {
            InputEvent::CellSelected(index) => EngineReply::Move(self.place_mark(index)),
            InputEvent::RoundStartRequested => match self.start_round() {
                StartRound::NamesRequired => EngineReply::NamesRequired,
                StartRound::Started => EngineReply::RoundStarted,
            },
            InputEvent::ScoresResetRequested => {
                self.reset_scores();
                EngineReply::ScoresReset
            }
            InputEvent::NamesSubmitted { first, second } => {
                self.configure_names(&first, &second);
                self.reset_round();
                EngineReply::RoundStarted
            }
        }
    }
}
