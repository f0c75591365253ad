//! TUI Room (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_room::{core,input,term,types}` and
//! holds the pieces shared by both binaries: environment configuration,
//! logger setup and the line-mode session loop.

pub use tui_room_core as core;
pub use tui_room_input as input;
pub use tui_room_term as term;
pub use tui_room_types as types;

pub mod config;
pub mod logging;
pub mod session;

pub use config::RoomConfig;
pub use session::{run_demo, run_session, SessionStats, DEMO_MOVES};
