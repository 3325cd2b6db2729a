//! Keyboard handling: cursor movement and key bindings.

use crate::controller::Action;
use crossterm::event::KeyCode;
use tictactoe_core::{Mode, Position};

/// What a key press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the cursor here.
    Cursor(Position),
    /// Hand an action to the controller.
    Action(Action),
    /// Unbound key.
    Ignored,
}

/// Moves cursor based on arrow keys.
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

/// Maps a key to a command, given where the cursor sits.
pub fn interpret(key: KeyCode, cursor: Position) -> KeyCommand {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyCommand::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyCommand::Action(Action::Select(cursor.to_index()))
        }
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => KeyCommand::Action(Action::Select(digit as usize - 1)),
            None => KeyCommand::Ignored,
        },
        KeyCode::Char('n') => KeyCommand::Action(Action::NewRound),
        KeyCode::Char('r') => KeyCommand::Action(Action::ResetAll),
        KeyCode::Char('p') => KeyCommand::Action(Action::SetMode(Mode::PvP)),
        KeyCode::Char('a') => KeyCommand::Action(Action::SetMode(Mode::PvAI)),
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Action(Action::Quit),
        _ => KeyCommand::Ignored,
    }
}
