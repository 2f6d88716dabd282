//! Move events and the listener trait that observes them.
//!
//! Listeners see every applied move in program order. They must not
//! influence puzzle state; logging, printing and recording are their only
//! business.

use std::fmt::Debug;

use crate::{DiskId, TowerId};

/// A single applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEvent {
    /// One-based position of this move in the solve.
    pub sequence: u64,
    /// The disk that moved.
    pub disk: DiskId,
    /// Tower the disk was taken from.
    pub from: TowerId,
    /// Tower the disk was placed on.
    pub to: TowerId,
}

/// A listener that is notified after each move is applied.
///
/// Called synchronously, so events arrive in exactly the order the moves
/// were applied.
pub trait MoveListener: Send + Sync + Debug {
    /// Called once per applied move.
    fn on_move(&self, event: &MoveEvent);

    /// Called once before the first move of a solve.
    fn on_solve_started(&self, _tower_count: usize, _disk_count: usize) {}

    /// Called once after the last move of a solve.
    fn on_solve_ended(&self, _success: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingListener {
        moves: AtomicUsize,
    }

    impl MoveListener for CountingListener {
        fn on_move(&self, _event: &MoveEvent) {
            self.moves.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_listener_receives_moves() {
        let listener = CountingListener::default();
        let event = MoveEvent {
            sequence: 1,
            disk: DiskId::new(1),
            from: TowerId::new(1),
            to: TowerId::new(3),
        };

        listener.on_solve_started(3, 1);
        listener.on_move(&event);
        listener.on_solve_ended(true);

        assert_eq!(listener.moves.load(Ordering::SeqCst), 1);
    }
}
