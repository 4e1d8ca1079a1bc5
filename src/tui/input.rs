//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_duel::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_one_square() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Tab), Position::TopRight);
    }
}
