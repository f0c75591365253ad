//! Key mapping from terminal events to room actions.

use crate::types::RoomAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a typed character to a room action.
///
/// Only `w`/`a`/`s`/`d` move the player; everything else is ignored.
pub fn map_char(ch: char) -> Option<RoomAction> {
    match ch.to_ascii_lowercase() {
        'w' => Some(RoomAction::MoveUp),
        's' => Some(RoomAction::MoveDown),
        'a' => Some(RoomAction::MoveLeft),
        'd' => Some(RoomAction::MoveRight),
        _ => None,
    }
}

/// Map keyboard input to room actions.
pub fn handle_key_event(key: KeyEvent) -> Option<RoomAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(RoomAction::MoveUp),
        KeyCode::Down => Some(RoomAction::MoveDown),
        KeyCode::Left => Some(RoomAction::MoveLeft),
        KeyCode::Right => Some(RoomAction::MoveRight),
        KeyCode::Char(ch) => map_char(ch),
        _ => None,
    }
}

/// Check if a typed character should quit the program.
pub fn is_quit_char(ch: char) -> bool {
    matches!(ch, 'q' | 'Q')
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => is_quit_char(ch),
        _ => false,
    }
}
