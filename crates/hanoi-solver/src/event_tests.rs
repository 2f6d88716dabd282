//! Tests for the event system.

use super::*;
use hanoi_core::{DiskId, TowerId};

fn event(sequence: u64, disk: usize, from: usize, to: usize) -> MoveEvent {
    MoveEvent {
        sequence,
        disk: DiskId::new(disk),
        from: TowerId::new(from),
        to: TowerId::new(to),
    }
}

#[test]
fn test_event_support_new() {
    let support = MoveEventSupport::new();

    assert_eq!(support.move_listener_count(), 0);
    assert_eq!(support.phase_listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_add_listeners() {
    let mut support = MoveEventSupport::new();

    let listener = Arc::new(CountingMoveListener::new());
    support.add_move_listener(listener.clone());
    support.add_phase_listener(listener);

    assert_eq!(support.move_listener_count(), 1);
    assert_eq!(support.phase_listener_count(), 1);
    assert!(support.has_listeners());
}

#[test]
fn test_event_support_fire_events() {
    let mut support = MoveEventSupport::new();

    let listener = Arc::new(CountingMoveListener::new());
    support.add_move_listener(listener.clone());
    support.add_phase_listener(listener.clone());

    support.fire_solve_started(5, 3);
    support.fire_phase_started(0, "ShiftAndStack");
    support.fire_move(&event(1, 1, 1, 2));
    support.fire_move(&event(2, 2, 1, 3));
    support.fire_phase_ended(0, "ShiftAndStack", 2);
    support.fire_solve_ended(true);

    assert_eq!(listener.solve_started_count(), 1);
    assert_eq!(listener.phase_started_count(), 1);
    assert_eq!(listener.move_count(), 2);
    assert_eq!(listener.phase_ended_count(), 1);
    assert_eq!(listener.solve_ended_count(), 1);
}

#[test]
fn test_event_support_clear_listeners() {
    let mut support = MoveEventSupport::new();
    let listener = Arc::new(CountingMoveListener::new());
    support.add_move_listener(listener.clone());
    support.add_phase_listener(listener.clone());

    support.clear_listeners();
    support.fire_move(&event(1, 1, 1, 2));

    assert!(!support.has_listeners());
    assert_eq!(listener.move_count(), 0);
}

#[test]
fn test_counting_listener_reset() {
    let listener = CountingMoveListener::new();
    listener.on_move(&event(1, 1, 1, 2));
    listener.on_phase_started(0, "Buffer");
    assert_eq!(listener.move_count(), 1);

    listener.reset();

    assert_eq!(listener.move_count(), 0);
    assert_eq!(listener.phase_started_count(), 0);
}

#[test]
fn test_logging_listener_does_not_panic() {
    let listener = LoggingMoveListener::with_prefix("test ");
    listener.on_solve_started(5, 3);
    listener.on_move(&event(1, 1, 1, 2));
    listener.on_phase_started(0, "Buffer");
    listener.on_phase_ended(0, "Buffer", 1);
    listener.on_solve_ended(false);
}

#[test]
fn test_channel_listener_preserves_order() {
    let (listener, mut receiver) = ChannelMoveListener::channel();

    for sequence in 1..=5 {
        listener.on_move(&event(sequence, sequence as usize, 1, 2));
    }
    drop(listener);

    let mut received = Vec::new();
    while let Some(event) = receiver.blocking_recv() {
        received.push(event.sequence);
    }
    assert_eq!(received, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_channel_listener_ignores_dropped_receiver() {
    let (listener, receiver) = ChannelMoveListener::channel();
    drop(receiver);

    listener.on_move(&event(1, 1, 1, 2));
}
