//! Terminal rendering module for the room.
//!
//! Everything is drawn into a [`FrameBuffer`] first. The same grid drawing
//! feeds two outputs:
//! - [`render_ascii`] / [`draw_room`]: the plain bordered room as text lines,
//!   used by line mode and the scripted demo
//! - [`RoomView`] + [`TerminalRenderer`]: the full-screen crossterm view

pub mod ascii;
pub mod fb;
pub mod renderer;
pub mod room_view;

pub use tui_room_core as core;
pub use tui_room_types as types;

pub use ascii::{draw_room, print_room, render_ascii};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use room_view::{RoomView, Viewport};
