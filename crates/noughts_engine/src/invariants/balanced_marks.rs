//! Mark-count balance.

use super::Invariant;
use crate::{Board, GameEngine, Player};

/// Invariant: X has placed as many marks as O, or one more.
///
/// Follows from X opening every round and strict alternation.
pub struct BalancedMarksInvariant;

impl BalancedMarksInvariant {
    /// Checks the balance on a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::board_holds(engine.board())
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one, X leading"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_board_balanced() {
        assert!(BalancedMarksInvariant::board_holds(&Board::new()));
    }

    #[test]
    fn test_o_leading_unbalanced() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::O);
        assert!(!BalancedMarksInvariant::board_holds(&Board::from_squares(squares)));
    }

    #[test]
    fn test_x_two_ahead_unbalanced() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::X);
        squares[4] = Square::Occupied(Player::X);
        assert!(!BalancedMarksInvariant::board_holds(&Board::from_squares(squares)));
    }
}
