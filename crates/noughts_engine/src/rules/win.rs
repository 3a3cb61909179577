//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type WinLine = [Position; 3];

/// Every winning line, rows first, then columns, then diagonals.
///
/// Scans walk this array in order, so on an impossible board with two
/// complete lines the earlier entry is reported.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some((player, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_of(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in cells.chars().enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of("XXXOO....");
        assert_eq!(
            winning_line(&board),
            Some((Player::X, [Position::TopLeft, Position::TopCenter, Position::TopRight]))
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board_of(".OX.OX..O");
        assert_eq!(winning_line(&board), None);
        let board = board_of(".OX.O..O.");
        assert_eq!(winning_line(&board).map(|(player, _)| player), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of("..O.O.O..");
        assert_eq!(
            winning_line(&board),
            Some((Player::O, [Position::TopRight, Position::Center, Position::BottomLeft]))
        );
    }

    #[test]
    fn test_rows_take_precedence_on_impossible_board() {
        // Top row and left column both complete for X; row is registered first.
        let board = board_of("XXXX..X..");
        assert_eq!(winning_line(&board).map(|(_, line)| line), Some(WIN_LINES[0]));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(winning_line(&board_of("XXO......")), None);
    }
}
