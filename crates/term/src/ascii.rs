//! Plain-text room drawing for line-oriented output.

use std::io::{self, Write};

use crate::core::Room;
use crate::fb::FrameBuffer;
use crate::room_view::RoomView;

/// Draw the bordered room as text, one terminated line per grid row.
///
/// ```
/// use tui_room_core::Room;
/// use tui_room_term::render_ascii;
///
/// let room = Room::new(3, 1).unwrap();
/// assert_eq!(render_ascii(&room), "+---+\n|@..|\n+---+\n");
/// ```
pub fn render_ascii(room: &Room) -> String {
    let (w, h) = RoomView::grid_size(room);
    let mut fb = FrameBuffer::new(w, h);
    RoomView::default().draw_grid(room, &mut fb, 0, 0);
    fb.to_text()
}

/// Write [`render_ascii`] to `out`.
pub fn draw_room<W: Write>(room: &Room, out: &mut W) -> io::Result<()> {
    out.write_all(render_ascii(room).as_bytes())
}

/// Write the room to stdout.
pub fn print_room(room: &Room) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    draw_room(room, &mut stdout)?;
    stdout.flush()
}
