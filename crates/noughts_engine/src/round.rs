//! Round lifecycle.

use serde::{Deserialize, Serialize};

/// Phase of the current round.
///
/// `Inactive` only exists before the first round starts. `Won` and `Drawn`
/// are terminal: no marks are accepted until the round is reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum RoundState {
    /// No round has been started yet.
    #[default]
    #[display("Inactive")]
    Inactive,
    /// Marks are being placed.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("Won")]
    Won,
    /// The board filled with no complete line.
    #[display("Drawn")]
    Drawn,
}

impl RoundState {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundState::Won | RoundState::Drawn)
    }

    /// True while marks are accepted.
    pub fn accepts_moves(self) -> bool {
        self == RoundState::InProgress
    }
}
