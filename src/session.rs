//! Line-mode session: the room loop over any reader/writer pair.
//!
//! Used when stdin is not a terminal. Input is consumed one non-whitespace
//! character at a time, so `dds` on one line is three moves.

use std::io::{self, BufRead, Write};

use crate::core::Room;
use crate::input::{is_quit_char, map_char};
use crate::term::draw_room;
use crate::types::MOVE_PROMPT;

/// The two moves performed by the `room-demo` binary.
pub const DEMO_MOVES: [(i32, i32); 2] = [(3, 2), (10, 0)];

/// Print the room, then apply each of `moves` and print it again.
///
/// Every step writes the move, the out-of-bounds message when the move is
/// rejected, the summary line and the drawing.
pub fn run_demo<W: Write>(room: &mut Room, moves: &[(i32, i32)], out: &mut W) -> io::Result<()> {
    room.display_to(out)?;
    draw_room(room, out)?;

    for &(dx, dy) in moves {
        writeln!(out, "move({dx}, {dy})")?;
        if let Some(message) = room.try_move(dx, dy).message() {
            writeln!(out, "{message}")?;
        }
        room.display_to(out)?;
        draw_room(room, out)?;
    }

    out.flush()
}

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub moves: u32,
    pub rejected: u32,
    pub ignored: u32,
}

/// Yields the non-whitespace characters of a reader, one line at a time.
struct CharReader<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> CharReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next non-whitespace character, or `None` at end of input.
    fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some((offset, ch)) = self.line[self.pos..]
                .char_indices()
                .find(|(_, ch)| !ch.is_whitespace())
            {
                self.pos += offset + ch.len_utf8();
                return Ok(Some(ch));
            }

            self.line.clear();
            self.pos = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }
}

/// Run the draw/prompt/read loop until `q` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    room: &mut Room,
    input: R,
    out: &mut W,
) -> io::Result<SessionStats> {
    let mut reader = CharReader::new(input);
    let mut stats = SessionStats::default();

    loop {
        draw_room(room, out)?;
        write!(out, "{MOVE_PROMPT}")?;
        out.flush()?;

        let Some(ch) = reader.next_char()? else {
            writeln!(out)?;
            log::info!("input closed");
            break;
        };
        // Echo so the transcript reads like an interactive run.
        writeln!(out, "{ch}")?;

        if is_quit_char(ch) {
            break;
        }

        match map_char(ch) {
            Some(action) => {
                let outcome = room.apply_action(action);
                if let Some(message) = outcome.message() {
                    writeln!(out, "{message}")?;
                    stats.rejected += 1;
                } else {
                    stats.moves += 1;
                }
            }
            None => {
                log::debug!("ignoring input {ch:?}");
                stats.ignored += 1;
            }
        }
    }

    Ok(stats)
}
