//! Scripted room demo: two fixed moves, no interaction.

use std::io;

use anyhow::{Context, Result};

use tui_room::{logging, run_demo, RoomConfig, DEMO_MOVES};

fn main() -> Result<()> {
    logging::init_from_env()?;

    let room_config = RoomConfig::from_env();
    let mut room = room_config
        .build_room()
        .context("invalid room configuration")?;

    run_demo(&mut room, &DEMO_MOVES, &mut io::stdout().lock())?;
    log::info!("demo finished at {:?}", room.position());
    Ok(())
}
