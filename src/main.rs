//! Interactive room runner (default binary).
//!
//! On a terminal this runs full-screen through crossterm and reacts to single
//! key presses. With a redirected stdin it falls back to the line-mode session.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_room::core::Room;
use tui_room::input::{handle_key_event, should_quit};
use tui_room::term::{FrameBuffer, RoomView, TerminalRenderer, Viewport};
use tui_room::{logging, run_session, RoomConfig};

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = RoomConfig::from_env();
    let mut room = config.build_room().context("invalid room configuration")?;
    log::info!(
        "starting {}x{} room ({})",
        room.width(),
        room.height(),
        room.policy().as_str()
    );

    if !io::stdin().is_terminal() {
        let stats = run_session(&mut room, io::stdin().lock(), &mut io::stdout().lock())?;
        log::info!("session finished: {stats:?}");
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut room);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("finished at {:?}", room.position());
    result
}

fn run(term: &mut TerminalRenderer, room: &mut Room) -> Result<()> {
    let view = RoomView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<&'static str> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if h < RoomView::required_height(room) {
            log::debug!("terminal height {h} clips the room view");
        }
        view.render_into(room, status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                status = handle_key_event(key).and_then(|action| room.apply_action(action).message());
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
