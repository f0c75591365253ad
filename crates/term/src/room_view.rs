//! RoomView: maps `core::Room` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Room;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    CORNER_GLYPH, FLOOR_GLYPH, HORIZONTAL_WALL_GLYPH, MOVE_PROMPT, PLAYER_GLYPH,
    VERTICAL_WALL_GLYPH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Full-screen layout: the bordered grid at the top-left, then the summary,
/// the status line and the prompt.
#[derive(Debug, Clone, Copy)]
pub struct RoomView {
    border: CellStyle,
    floor: CellStyle,
    player: CellStyle,
    text: CellStyle,
    status: CellStyle,
}

impl Default for RoomView {
    fn default() -> Self {
        Self {
            border: CellStyle::fg(Rgb::new(200, 200, 200)),
            floor: CellStyle::fg(Rgb::new(90, 90, 100)),
            player: CellStyle::fg(Rgb::new(255, 210, 60)).bold(),
            text: CellStyle::default(),
            status: CellStyle::fg(Rgb::new(230, 90, 80)).bold(),
        }
    }
}

impl RoomView {
    /// Size of the bordered grid in terminal cells.
    pub fn grid_size(room: &Room) -> (u16, u16) {
        (
            room.width().saturating_add(2),
            room.height().saturating_add(2),
        )
    }

    /// Draw the bordered grid with its top-left corner at `(x0, y0)`.
    ///
    /// The player cell gets the marker glyph only when it lies on the grid.
    pub fn draw_grid(&self, room: &Room, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let (frame_w, frame_h) = Self::grid_size(room);
        let right = x0.saturating_add(frame_w - 1);
        let bottom = y0.saturating_add(frame_h - 1);

        for x in x0..=right {
            let ch = if x == x0 || x == right {
                CORNER_GLYPH
            } else {
                HORIZONTAL_WALL_GLYPH
            };
            fb.put_char(x, y0, ch, self.border);
            fb.put_char(x, bottom, ch, self.border);
        }

        let marker = room.marker_cell();
        for row in 0..room.height() {
            let y = y0.saturating_add(row + 1);
            fb.put_char(x0, y, VERTICAL_WALL_GLYPH, self.border);
            for col in 0..room.width() {
                let x = x0.saturating_add(col + 1);
                if marker == Some((col, row)) {
                    fb.put_char(x, y, PLAYER_GLYPH, self.player);
                } else {
                    fb.put_char(x, y, FLOOR_GLYPH, self.floor);
                }
            }
            fb.put_char(right, y, VERTICAL_WALL_GLYPH, self.border);
        }
    }

    /// Render the whole screen into an existing framebuffer.
    ///
    /// `status` is the message left by the last move, if any.
    pub fn render_into(
        &self,
        room: &Room,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        self.draw_grid(room, fb, 0, 0);

        let (_, frame_h) = Self::grid_size(room);
        fb.put_str(0, frame_h, &room.summary(), self.text);
        if let Some(message) = status {
            fb.put_str(0, frame_h.saturating_add(1), message, self.status);
        }
        fb.put_str(0, frame_h.saturating_add(2), MOVE_PROMPT, self.text);
    }

    pub fn render(&self, room: &Room, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(room, status, viewport, &mut fb);
        fb
    }

    /// Rows needed to show the full layout without clipping.
    pub fn required_height(room: &Room) -> u16 {
        Self::grid_size(room).1.saturating_add(3)
    }
}
