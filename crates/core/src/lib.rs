//! Core room logic module - pure and testable
//!
//! This module holds the [`Room`] entity: fixed dimensions, the player
//! position, and the move policy that decides what happens to moves leaving
//! the grid. It has **no dependencies** on terminals or input devices; the only
//! side channel is the `log` facade and [`Room::display`], which prints the
//! summary line to stdout.
//!
//! # Move Policies
//!
//! - **Bounded**: `0 <= x < width` and `0 <= y < height` always hold. A move
//!   that would break this is rejected whole and reported as
//!   [`MoveOutcome::OutOfBounds`].
//! - **Unbounded**: every move is applied. The position may leave the grid, in
//!   which case renderers draw no player marker.
//!
//! # Example
//!
//! ```
//! use tui_room_core::{MoveOutcome, Room};
//!
//! let mut room = Room::new(10, 5).unwrap();
//! assert_eq!(room.area(), 50);
//! assert_eq!(room.position(), (0, 0));
//!
//! assert_eq!(room.try_move(3, 2), MoveOutcome::Moved);
//! assert_eq!(room.try_move(-4, 0), MoveOutcome::OutOfBounds);
//! assert_eq!(room.position(), (3, 2));
//! ```

pub mod room;

pub use tui_room_types as types;

pub use room::{MoveOutcome, Room, RoomError};
