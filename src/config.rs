//! Environment configuration.

use std::env;

use crate::core::{Room, RoomError};
use crate::types::{MovePolicy, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, MAX_ROOM_DIMENSION};

/// Room settings resolved from the environment.
///
/// | Variable | Default |
/// |----------|---------|
/// | `ROOM_WIDTH` | 10 |
/// | `ROOM_HEIGHT` | 5 |
/// | `ROOM_CLAMP` | true |
///
/// Unparseable, zero or oversized values fall back to the default with a
/// warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConfig {
    pub width: u16,
    pub height: u16,
    pub clamp_to_bounds: bool,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            clamp_to_bounds: true,
        }
    }
}

impl RoomConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = read_var(&lookup, "ROOM_WIDTH", parse_dimension).unwrap_or(defaults.width);
        let height = read_var(&lookup, "ROOM_HEIGHT", parse_dimension).unwrap_or(defaults.height);
        let clamp_to_bounds =
            read_var(&lookup, "ROOM_CLAMP", parse_flag).unwrap_or(defaults.clamp_to_bounds);

        Self {
            width,
            height,
            clamp_to_bounds,
        }
    }

    pub fn policy(&self) -> MovePolicy {
        MovePolicy::from_clamp(self.clamp_to_bounds)
    }

    pub fn build_room(&self) -> Result<Room, RoomError> {
        Room::with_policy(self.width, self.height, self.policy())
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        log::warn!("ignoring invalid {key}={raw:?}, using default");
    }
    parsed
}

fn parse_dimension(s: &str) -> Option<u16> {
    s.parse()
        .ok()
        .filter(|v| (1..=MAX_ROOM_DIMENSION).contains(v))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
