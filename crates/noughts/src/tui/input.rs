//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_engine::Position;

/// What a key press asks for on the board screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place at a cell (0-8).
    Place(usize),
    /// Start or restart the round.
    Start,
    /// Zero the scores.
    ResetScores,
    /// Leave the game.
    Quit,
}

/// Maps a key on the board screen to an [`Action`].
pub fn board_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Place(d as usize - 1)),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('r') => Some(Action::ResetScores),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(board_action(key), Some(Action::Place(0)));
        let key = KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE);
        assert_eq!(board_action(key), Some(Action::Place(8)));
        let key = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        assert_eq!(board_action(key), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(board_action(key), Some(Action::Quit));
    }
}
