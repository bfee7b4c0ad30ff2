//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use retro_tictactoe::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell (digit keys).
    Play(Position),
    /// Throw the board away and start over with X.
    NewGame,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char('n') | KeyCode::Char('r') => Action::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => {
            // Keys 1-9 are cells 0-8, matching the numbers a player reads.
            let digit = c.to_digit(10)? as usize;
            Action::Play(Position::from_index(digit.checked_sub(1)?)?)
        }
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|row| (row, column)),
        Direction::Down => Some((row + 1, column)),
        Direction::Left => column.checked_sub(1).map(|column| (row, column)),
        Direction::Right => Some((row, column + 1)),
    };
    target
        .and_then(|(row, column)| Position::from_row_column(row, column))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(KeyCode::Char('1')),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for(KeyCode::Char('9')),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('n')), Some(Action::NewGame));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::NewGame));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlayCursor));
        assert_eq!(action_for(KeyCode::Tab), None);
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(
            move_cursor(Position::Center, Direction::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, Direction::Right),
            Position::MiddleRight
        );
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Down),
            Position::MiddleLeft
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, Direction::Right),
            Position::MiddleRight
        );
    }
}
