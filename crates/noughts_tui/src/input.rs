//! Cursor movement and key-to-move translation.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// Moves the board cursor based on arrow keys, clamping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a digit key into a board position.
///
/// Keys are the 1-based cell numbers shown on the board, top-left to
/// bottom-right; the 1-based to 0-based conversion happens here, at the
/// input boundary, never inside the engine.
pub fn digit_to_position(key: KeyCode) -> Option<Position> {
    if let KeyCode::Char(c) = key {
        let digit = c.to_digit(10)? as usize;
        if (1..=9).contains(&digit) {
            return Position::from_index(digit - 1);
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cursor_clamps_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Right),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
    }

    #[test]
    fn digits_map_one_based() {
        assert_eq!(digit_to_position(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_to_position(KeyCode::Char('5')), Some(Position::Center));
        assert_eq!(
            digit_to_position(KeyCode::Char('9')),
            Some(Position::BottomRight)
        );
        assert_eq!(digit_to_position(KeyCode::Char('0')), None);
        assert_eq!(digit_to_position(KeyCode::Enter), None);
    }
}
