//! Terminal input module (room-facing).
//!
//! Maps `crossterm` key events, and raw characters read from a non-terminal
//! stdin, into [`crate::types::RoomAction`]. Quit detection is kept separate
//! from movement so the program loop decides when to stop.

pub mod map;

pub use tui_room_types as types;

pub use map::{handle_key_event, is_quit_char, map_char, should_quit};
