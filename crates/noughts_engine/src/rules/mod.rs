//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the engine and the invariant checks share one definition.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, winning_line};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// A line is complete.
    Win {
        /// Owner of the line.
        winner: Player,
        /// The first complete line in registry order.
        line: WinLine,
    },
    /// Every square is filled and no line is complete.
    Draw,
    /// Play can continue.
    Ongoing,
}

/// Classifies `board` as a win, a draw or ongoing.
///
/// Wins are checked before fullness: a full board with a complete line is a
/// win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, line)) = winning_line(board) {
        return Evaluation::Win { winner, line };
    }
    if is_full(board) {
        return Evaluation::Draw;
    }
    Evaluation::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_top_row_win() {
        let board = Board::from_squares([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            evaluate(&board),
            Evaluation::Win {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Evaluation::Draw);
    }

    #[test]
    fn test_ongoing() {
        let board = Board::from_squares([X, O, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), Evaluation::Ongoing);
    }

    #[test]
    fn test_full_winning_board_is_win() {
        // X completes the main diagonal on the last empty square.
        let board = Board::from_squares([X, O, O, O, X, X, X, O, X]);
        assert!(matches!(
            evaluate(&board),
            Evaluation::Win { winner: Player::X, .. }
        ));
    }
}
