//! Player display names.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Name used for X when none is given.
pub const DEFAULT_X_NAME: &str = "Player 1";
/// Name used for O when none is given.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Display names for both marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Builds names from raw input.
    ///
    /// Surrounding whitespace is trimmed; blank input falls back to
    /// [`DEFAULT_X_NAME`] / [`DEFAULT_O_NAME`].
    pub fn sanitized(first: &str, second: &str) -> Self {
        Self {
            x: clean(first, DEFAULT_X_NAME),
            o: clean(second, DEFAULT_O_NAME),
        }
    }

    /// Name shown for `player`.
    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_NAME.to_string(),
            o: DEFAULT_O_NAME.to_string(),
        }
    }
}

fn clean(raw: &str, fallback: &str) -> String {
    match raw.trim() {
        "" => fallback.to_string(),
        name => name.to_string(),
    }
}
