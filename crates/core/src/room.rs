//! The room entity: dimensions, player position and move policy.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::types::{MovePolicy, RoomAction, MAX_ROOM_DIMENSION, OUT_OF_BOUNDS_MESSAGE};

/// Errors raised while building a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: u16, height: u16 },
    #[error("room dimensions must be at most {max}, got {width}x{height}")]
    TooLarge { width: u16, height: u16, max: u16 },
}

/// Result of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The position was updated.
    Moved,
    /// A bounded room rejected the move; the position is unchanged.
    OutOfBounds,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }

    /// Console message to show for this outcome, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MoveOutcome::Moved => None,
            MoveOutcome::OutOfBounds => Some(OUT_OF_BOUNDS_MESSAGE),
        }
    }
}

/// A fixed-size rectangular room with one player marker.
///
/// Dimensions never change after construction. The player starts at `(0, 0)`
/// and is only mutated through [`Room::try_move`] / [`Room::apply_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    width: u16,
    height: u16,
    x: i32,
    y: i32,
    policy: MovePolicy,
}

impl Room {
    /// Create a bounded room with the player at the origin.
    pub fn new(width: u16, height: u16) -> Result<Self, RoomError> {
        Self::with_policy(width, height, MovePolicy::Bounded)
    }

    pub fn with_policy(width: u16, height: u16, policy: MovePolicy) -> Result<Self, RoomError> {
        if width == 0 || height == 0 {
            return Err(RoomError::EmptyDimension { width, height });
        }
        if width > MAX_ROOM_DIMENSION || height > MAX_ROOM_DIMENSION {
            return Err(RoomError::TooLarge {
                width,
                height,
                max: MAX_ROOM_DIMENSION,
            });
        }
        Ok(Self {
            width,
            height,
            x: 0,
            y: 0,
            policy,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Player position as `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Whether `(x, y)` is an interior cell of the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }

    /// Column and row of the player marker, or `None` when the player is off-grid.
    pub fn marker_cell(&self) -> Option<(u16, u16)> {
        if !self.contains(self.x, self.y) {
            return None;
        }
        // contains() guarantees both fit in u16.
        Some((self.x as u16, self.y as u16))
    }

    /// One-line description of the player position and room size.
    ///
    /// Dimensions are printed height first.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Write [`Room::summary`] as one line to `out`.
    pub fn display_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print [`Room::summary`] to stdout.
    pub fn display(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.display_to(&mut stdout)?;
        stdout.flush()
    }

    /// Move the player by `(dx, dy)` according to the room's policy.
    ///
    /// Coordinates are `i32` and the addition saturates, so in an unbounded
    /// room a move that would pass `i32::MIN` or `i32::MAX` stops at that
    /// limit instead of being applied exactly.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let nx = self.x.saturating_add(dx);
        let ny = self.y.saturating_add(dy);

        if self.policy.clamps() && !self.contains(nx, ny) {
            log::warn!(
                "rejected move ({dx}, {dy}) from ({}, {}): target ({nx}, {ny}) outside {}x{}",
                self.x,
                self.y,
                self.width,
                self.height
            );
            return MoveOutcome::OutOfBounds;
        }

        self.x = nx;
        self.y = ny;
        log::debug!("player moved by ({dx}, {dy}) to ({nx}, {ny})");
        MoveOutcome::Moved
    }

    pub fn apply_action(&mut self, action: RoomAction) -> MoveOutcome {
        let (dx, dy) = action.delta();
        self.try_move(dx, dy)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player at ({}, {}) in room with dimensions {}x{} has area: {}",
            self.x,
            self.y,
            self.height,
            self.width,
            self.area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unbounded(width: u16, height: u16) -> Room {
        Room::with_policy(width, height, MovePolicy::Unbounded).unwrap()
    }

    #[test]
    fn test_new_room_starts_at_origin() {
        let room = Room::new(10, 5).unwrap();
        assert_eq!(room.position(), (0, 0));
        assert_eq!(room.policy(), MovePolicy::Bounded);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            Room::new(0, 5),
            Err(RoomError::EmptyDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Room::new(3, 0).is_err());
    }

    #[test]
    fn test_bounded_rejects_whole_move() {
        let mut room = Room::new(10, 5).unwrap();
        room.try_move(9, 0);

        // x would leave the grid, so the valid y part must not apply either.
        let outcome = room.try_move(1, 1);
        assert_eq!(outcome, MoveOutcome::OutOfBounds);
        assert_eq!(outcome.message(), Some("Move out of bounds!"));
        assert_eq!(room.position(), (9, 0));
    }

    #[test]
    fn test_bounded_rejects_negative_steps_from_origin() {
        let mut room = Room::new(10, 5).unwrap();
        assert_eq!(room.apply_action(RoomAction::MoveUp), MoveOutcome::OutOfBounds);
        assert_eq!(room.apply_action(RoomAction::MoveLeft), MoveOutcome::OutOfBounds);
        assert_eq!(room.position(), (0, 0));
    }

    #[test]
    fn test_unbounded_leaves_grid() {
        let mut room = unbounded(10, 5);
        assert_eq!(room.try_move(-2, 7), MoveOutcome::Moved);
        assert_eq!(room.position(), (-2, 7));
        assert_eq!(room.marker_cell(), None);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut room = unbounded(1, 1);
        room.try_move(i32::MAX, i32::MIN);
        room.try_move(1, -1);
        assert_eq!(room.position(), (i32::MAX, i32::MIN));
    }

    #[test]
    fn test_summary_prints_height_first() {
        let mut room = Room::new(10, 5).unwrap();
        room.try_move(3, 2);
        assert_eq!(
            room.summary(),
            "Player at (3, 2) in room with dimensions 5x10 has area: 50"
        );
    }

    #[test]
    fn test_oversized_dimension_is_rejected() {
        assert_eq!(
            Room::new(MAX_ROOM_DIMENSION + 1, 1),
            Err(RoomError::TooLarge {
                width: MAX_ROOM_DIMENSION + 1,
                height: 1,
                max: MAX_ROOM_DIMENSION
            })
        );
        assert!(Room::new(1, u16::MAX).is_err());
        assert!(Room::new(MAX_ROOM_DIMENSION, MAX_ROOM_DIMENSION).is_ok());
    }

    #[test]
    fn test_display_writes_summary_line() {
        let room = Room::new(4, 3).unwrap();
        let mut out = Vec::new();
        room.display_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Player at (0, 0) in room with dimensions 3x4 has area: 12\n"
        );
        room.display().unwrap();
    }

    proptest! {
        #[test]
        fn test_area_is_width_times_height(
            width in 1u16..=MAX_ROOM_DIMENSION,
            height in 1u16..=MAX_ROOM_DIMENSION,
        ) {
            let room = Room::new(width, height).unwrap();
            prop_assert_eq!(room.area(), u32::from(width) * u32::from(height));
        }

        #[test]
        fn test_bounded_position_never_leaves_grid(
            width in 1u16..20,
            height in 1u16..20,
            moves in prop::collection::vec((-25i32..25, -25i32..25), 0..64),
        ) {
            let mut room = Room::new(width, height).unwrap();
            for (dx, dy) in moves {
                let before = room.position();
                let outcome = room.try_move(dx, dy);
                let (x, y) = room.position();
                prop_assert!(room.contains(x, y));
                if outcome == MoveOutcome::OutOfBounds {
                    prop_assert_eq!(room.position(), before);
                }
            }
        }

        #[test]
        fn test_unbounded_applies_exact_delta(
            start in (-1000i32..1000, -1000i32..1000),
            dx in -1000i32..1000,
            dy in -1000i32..1000,
        ) {
            let mut room = unbounded(4, 4);
            room.try_move(start.0, start.1);
            prop_assert_eq!(room.try_move(dx, dy), MoveOutcome::Moved);
            prop_assert_eq!(room.position(), (start.0 + dx, start.1 + dy));
        }
    }
}
