//! Room tests - movement policies and summary output

use tui_room::core::{MoveOutcome, Room};
use tui_room::types::{MovePolicy, RoomAction, OUT_OF_BOUNDS_MESSAGE};

#[test]
fn test_room_new_at_origin() {
    let room = Room::new(10, 5).unwrap();
    assert_eq!(room.position(), (0, 0));
    assert_eq!(room.width(), 10);
    assert_eq!(room.height(), 5);
    assert_eq!(room.area(), 50);
}

#[test]
fn test_bounded_walk_along_walls() {
    let mut room = Room::new(10, 5).unwrap();

    for _ in 0..9 {
        assert_eq!(room.apply_action(RoomAction::MoveRight), MoveOutcome::Moved);
    }
    assert_eq!(room.apply_action(RoomAction::MoveRight), MoveOutcome::OutOfBounds);
    assert_eq!(room.position(), (9, 0));

    for _ in 0..4 {
        assert!(room.apply_action(RoomAction::MoveDown).is_moved());
    }
    let outcome = room.apply_action(RoomAction::MoveDown);
    assert_eq!(outcome.message(), Some(OUT_OF_BOUNDS_MESSAGE));
    assert_eq!(room.position(), (9, 4));
}

#[test]
fn test_bounded_rejects_long_jump() {
    let mut room = Room::new(10, 5).unwrap();
    assert_eq!(room.try_move(3, 2), MoveOutcome::Moved);
    assert_eq!(room.try_move(10, 0), MoveOutcome::OutOfBounds);
    assert_eq!(room.position(), (3, 2));
}

#[test]
fn test_unbounded_applies_every_move() {
    let mut room = Room::with_policy(10, 5, MovePolicy::Unbounded).unwrap();
    assert_eq!(room.try_move(3, 2), MoveOutcome::Moved);
    assert_eq!(room.try_move(10, 0), MoveOutcome::Moved);
    assert_eq!(room.position(), (13, 2));
    assert_eq!(room.marker_cell(), None);

    assert!(room.apply_action(RoomAction::MoveUp).is_moved());
    assert_eq!(room.position(), (13, 1));
    assert_eq!(room.try_move(-20, -5), MoveOutcome::Moved);
    assert_eq!(room.position(), (-7, -4));
}

#[test]
fn test_unbounded_can_walk_back_onto_grid() {
    let mut room = Room::with_policy(2, 2, MovePolicy::Unbounded).unwrap();
    room.try_move(-1, 0);
    assert_eq!(room.marker_cell(), None);
    room.try_move(1, 1);
    assert_eq!(room.marker_cell(), Some((0, 1)));
}

#[test]
fn test_summary_tracks_position() {
    let mut room = Room::new(10, 5).unwrap();
    assert_eq!(
        room.to_string(),
        "Player at (0, 0) in room with dimensions 5x10 has area: 50"
    );
    room.try_move(3, 2);
    assert_eq!(
        room.summary(),
        "Player at (3, 2) in room with dimensions 5x10 has area: 50"
    );
}
