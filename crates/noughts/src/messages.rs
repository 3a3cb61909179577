//! Status-line text shared by the terminal UI and replay output.

use noughts_engine::{GameEngine, Player};

/// Shown before the first round.
pub const IDLE: &str = "Press s to start";

/// Shown after a drawn round.
pub const DRAW: &str = "It's a draw. 🤝";

/// "{name}'s turn (X)"
pub fn turn(engine: &GameEngine, player: Player) -> String {
    format!("{}'s turn ({})", engine.name_of(player), player)
}

/// "{name} wins! 🎉"
pub fn win(engine: &GameEngine, winner: Player) -> String {
    format!("{} wins! 🎉", engine.name_of(winner))
}

/// Shown after the scores are zeroed.
pub fn scores_reset(engine: &GameEngine) -> String {
    format!("Scores reset. New round — {}", turn(engine, Player::X))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_uses_names() {
        let mut engine = GameEngine::new();
        engine.configure_names("Ann", "Bo");
        assert_eq!(turn(&engine, Player::O), "Bo's turn (O)");
        assert_eq!(win(&engine, Player::X), "Ann wins! 🎉");
        assert_eq!(scores_reset(&engine), "Scores reset. New round — Ann's turn (X)");
    }
}
