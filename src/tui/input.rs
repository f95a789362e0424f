//! Keyboard handling.

use crossterm::event::KeyCode;
use strictly_versus::{Event, Position};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Send an event to the session.
    Game(Event),
    /// Leave the game.
    Quit,
    /// Nothing.
    None,
}

/// Maps a key to an action given the cursor position.
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Game(Event::HardReset),
        KeyCode::Char('s') => Action::Game(Event::ToggleMode),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Game(Event::CellClicked(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1).ok())
            .map(|pos| Action::Game(Event::CellClicked(pos)))
            .unwrap_or(Action::None),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::None,
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
    Position::from_row_col(row, col).unwrap_or(cursor)
}
