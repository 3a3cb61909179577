//! Win tallies kept across rounds.

use crate::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rounds each mark has won.
///
/// Counts only ever go up, except through [`Scoreboard::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, player: Player) {
        let tally = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *tally = tally.saturating_add(1);
        debug!(x = self.x, o = self.o, "Score updated");
    }

    /// Zeroes both tallies.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
