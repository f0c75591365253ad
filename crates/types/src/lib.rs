//! Core types module - shared data structures and constants
//!
//! Plain data used by every other crate in the workspace: the directional
//! actions the player can take, the move policy of a room, default room
//! dimensions, and the user-facing strings printed by the program loops.
//!
//! # Room Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 5 rows (indexed 0-4)
//! - **Start position**: (0, 0), top-left interior cell
//!
//! # Examples
//!
//! ```
//! use tui_room_types::{MovePolicy, RoomAction, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
//!
//! assert_eq!(RoomAction::MoveUp.delta(), (0, -1));
//!
//! assert_eq!(MovePolicy::from_clamp(false), MovePolicy::Unbounded);
//!
//! assert_eq!(DEFAULT_ROOM_WIDTH, 10);
//! assert_eq!(DEFAULT_ROOM_HEIGHT, 5);
//! ```

/// Default room width in cells (10 columns)
pub const DEFAULT_ROOM_WIDTH: u16 = 10;

/// Default room height in cells (5 rows)
pub const DEFAULT_ROOM_HEIGHT: u16 = 5;

/// Largest accepted width or height.
///
/// The bordered grid is two cells wider and taller than the room and must
/// still fit the `u16` framebuffer coordinates.
pub const MAX_ROOM_DIMENSION: u16 = u16::MAX - 2;

/// Message shown when a bounded room rejects a move.
pub const OUT_OF_BOUNDS_MESSAGE: &str = "Move out of bounds!";

/// Prompt printed after every redraw.
pub const MOVE_PROMPT: &str = "Move (w/a/s/d) or q to quit: ";

/// Glyph for the player marker.
pub const PLAYER_GLYPH: char = '@';

/// Glyph for an empty interior cell.
pub const FLOOR_GLYPH: char = '.';

/// Glyph for the four border corners.
pub const CORNER_GLYPH: char = '+';

/// Glyph for the top and bottom walls.
pub const HORIZONTAL_WALL_GLYPH: char = '-';

/// Glyph for the left and right walls.
pub const VERTICAL_WALL_GLYPH: char = '|';

/// Player actions
///
/// Each action is a unit step on the grid. Row indices grow downwards, so
/// `MoveUp` decrements `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomAction {
    /// Step one row up (`w`)
    MoveUp,
    /// Step one row down (`s`)
    MoveDown,
    /// Step one column left (`a`)
    MoveLeft,
    /// Step one column right (`d`)
    MoveRight,
}

impl RoomAction {
    /// All actions, in keyboard order (w, a, s, d).
    pub const ALL: [RoomAction; 4] = [
        RoomAction::MoveUp,
        RoomAction::MoveLeft,
        RoomAction::MoveDown,
        RoomAction::MoveRight,
    ];

    /// Grid delta `(dx, dy)` applied by this action.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            RoomAction::MoveUp => (0, -1),
            RoomAction::MoveDown => (0, 1),
            RoomAction::MoveLeft => (-1, 0),
            RoomAction::MoveRight => (1, 0),
        }
    }
}

/// How a room treats moves that would leave the grid.
///
/// - **Bounded**: the move is rejected and the position is left untouched
/// - **Unbounded**: the move is applied as-is; an off-grid player is simply not drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovePolicy {
    #[default]
    Bounded,
    Unbounded,
}

impl MovePolicy {
    /// Map the `clamp_to_bounds` flag onto a policy.
    pub fn from_clamp(clamp_to_bounds: bool) -> Self {
        if clamp_to_bounds {
            MovePolicy::Bounded
        } else {
            MovePolicy::Unbounded
        }
    }

    pub fn clamps(&self) -> bool {
        matches!(self, MovePolicy::Bounded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovePolicy::Bounded => "bounded",
            MovePolicy::Unbounded => "unbounded",
        }
    }
}
