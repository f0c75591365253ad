//! Logger setup shared by the binaries.

use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};

/// Initialize `env_logger` from `RUST_LOG`.
///
/// When `ROOM_LOG_PATH` is set, records are appended to that file instead of
/// stderr so they do not tear the full-screen view.
pub fn init_from_env() -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    let log_path = env::var("ROOM_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialized")?;
    Ok(())
}
