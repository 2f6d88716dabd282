//! Event system for observing solver progress.
//!
//! Listeners are registered on a [`MoveEventSupport`] and receive
//! notifications synchronously, in registration order:
//!
//! - **Move events**: one per applied move, plus solve start/end
//! - **Phase events**: phase started, phase ended
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use hanoi_solver::{CountingMoveListener, Puzzle, Solver};
//!
//! let counter = Arc::new(CountingMoveListener::new());
//! let solver = Solver::new().with_listener(counter.clone());
//!
//! let mut puzzle = Puzzle::new(3, 3).unwrap();
//! let report = solver.solve(&mut puzzle);
//!
//! assert!(report.is_success());
//! assert_eq!(counter.move_count(), 7);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hanoi_core::{MoveEvent, MoveListener};
use tokio::sync::mpsc;
use tracing::debug;

/// Listener for phase lifecycle events.
pub trait PhaseLifecycleListener: Send + Sync + Debug {
    /// Called when a phase starts.
    ///
    /// # Arguments
    ///
    /// * `phase_index` - The index of the phase (0-based)
    /// * `phase_type` - The type name of the phase
    fn on_phase_started(&self, phase_index: usize, phase_type: &str);

    /// Called when a phase ends, with the number of moves it applied.
    fn on_phase_ended(&self, phase_index: usize, phase_type: &str, move_count: u64);
}

/// Central event broadcaster for solver events.
///
/// Manages listener registration and event distribution.
pub struct MoveEventSupport {
    move_listeners: Vec<Arc<dyn MoveListener>>,
    phase_listeners: Vec<Arc<dyn PhaseLifecycleListener>>,
}

impl MoveEventSupport {
    /// Creates a new event support instance.
    pub fn new() -> Self {
        Self {
            move_listeners: Vec::new(),
            phase_listeners: Vec::new(),
        }
    }

    // === Listener Registration ===

    /// Adds a move listener.
    pub fn add_move_listener(&mut self, listener: Arc<dyn MoveListener>) {
        self.move_listeners.push(listener);
    }

    /// Adds a phase lifecycle listener.
    pub fn add_phase_listener(&mut self, listener: Arc<dyn PhaseLifecycleListener>) {
        self.phase_listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.move_listeners.clear();
        self.phase_listeners.clear();
    }

    // === Event Firing ===

    pub fn fire_move(&self, event: &MoveEvent) {
        for listener in &self.move_listeners {
            listener.on_move(event);
        }
    }

    pub fn fire_solve_started(&self, tower_count: usize, disk_count: usize) {
        for listener in &self.move_listeners {
            listener.on_solve_started(tower_count, disk_count);
        }
    }

    pub fn fire_solve_ended(&self, success: bool) {
        for listener in &self.move_listeners {
            listener.on_solve_ended(success);
        }
    }

    pub fn fire_phase_started(&self, phase_index: usize, phase_type: &str) {
        for listener in &self.phase_listeners {
            listener.on_phase_started(phase_index, phase_type);
        }
    }

    pub fn fire_phase_ended(&self, phase_index: usize, phase_type: &str, move_count: u64) {
        for listener in &self.phase_listeners {
            listener.on_phase_ended(phase_index, phase_type, move_count);
        }
    }

    // === Query Methods ===

    /// Returns the number of move listeners.
    pub fn move_listener_count(&self) -> usize {
        self.move_listeners.len()
    }

    /// Returns the number of phase listeners.
    pub fn phase_listener_count(&self) -> usize {
        self.phase_listeners.len()
    }

    /// Returns true if there are any listeners registered.
    pub fn has_listeners(&self) -> bool {
        !self.move_listeners.is_empty() || !self.phase_listeners.is_empty()
    }
}

impl Default for MoveEventSupport {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for MoveEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveEventSupport")
            .field("move_listeners", &self.move_listeners.len())
            .field("phase_listeners", &self.phase_listeners.len())
            .finish()
    }
}

/// A listener that logs every event through `tracing` at DEBUG level.
#[derive(Debug, Clone, Default)]
pub struct LoggingMoveListener {
    /// Prefix for log messages.
    prefix: String,
}

impl LoggingMoveListener {
    /// Creates a new logging listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logging listener with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl MoveListener for LoggingMoveListener {
    fn on_move(&self, event: &MoveEvent) {
        debug!(
            "{}[Event] Move {}: disk {} from tower {} to tower {}",
            self.prefix, event.sequence, event.disk, event.from, event.to
        );
    }

    fn on_solve_started(&self, tower_count: usize, disk_count: usize) {
        debug!(
            "{}[Event] Solving started ({} towers, {} disks)",
            self.prefix, tower_count, disk_count
        );
    }

    fn on_solve_ended(&self, success: bool) {
        if success {
            debug!("{}[Event] Solving ended", self.prefix);
        } else {
            debug!("{}[Event] Solving ended (failed)", self.prefix);
        }
    }
}

impl PhaseLifecycleListener for LoggingMoveListener {
    fn on_phase_started(&self, phase_index: usize, phase_type: &str) {
        debug!(
            "{}[Event] Phase {} ({}) started",
            self.prefix, phase_index, phase_type
        );
    }

    fn on_phase_ended(&self, phase_index: usize, phase_type: &str, move_count: u64) {
        debug!(
            "{}[Event] Phase {} ({}) ended after {} moves",
            self.prefix, phase_index, phase_type, move_count
        );
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingMoveListener {
    move_count: AtomicUsize,
    solve_started_count: AtomicUsize,
    solve_ended_count: AtomicUsize,
    phase_started_count: AtomicUsize,
    phase_ended_count: AtomicUsize,
}

impl CountingMoveListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_count(&self) -> usize {
        self.move_count.load(Ordering::SeqCst)
    }

    pub fn solve_started_count(&self) -> usize {
        self.solve_started_count.load(Ordering::SeqCst)
    }

    pub fn solve_ended_count(&self) -> usize {
        self.solve_ended_count.load(Ordering::SeqCst)
    }

    pub fn phase_started_count(&self) -> usize {
        self.phase_started_count.load(Ordering::SeqCst)
    }

    pub fn phase_ended_count(&self) -> usize {
        self.phase_ended_count.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.move_count.store(0, Ordering::SeqCst);
        self.solve_started_count.store(0, Ordering::SeqCst);
        self.solve_ended_count.store(0, Ordering::SeqCst);
        self.phase_started_count.store(0, Ordering::SeqCst);
        self.phase_ended_count.store(0, Ordering::SeqCst);
    }
}

impl MoveListener for CountingMoveListener {
    fn on_move(&self, _event: &MoveEvent) {
        self.move_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solve_started(&self, _tower_count: usize, _disk_count: usize) {
        self.solve_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solve_ended(&self, _success: bool) {
        self.solve_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl PhaseLifecycleListener for CountingMoveListener {
    fn on_phase_started(&self, _phase_index: usize, _phase_type: &str) {
        self.phase_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_phase_ended(&self, _phase_index: usize, _phase_type: &str, _move_count: u64) {
        self.phase_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Forwards moves over an unbounded channel.
///
/// Sends happen inside the solve loop, so the receiver sees moves in
/// exactly the order they were applied. Once the receiver is dropped,
/// further moves are discarded.
#[derive(Debug, Clone)]
pub struct ChannelMoveListener {
    sender: mpsc::UnboundedSender<MoveEvent>,
}

impl ChannelMoveListener {
    /// Creates a listener and the receiving half of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MoveEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn new(sender: mpsc::UnboundedSender<MoveEvent>) -> Self {
        Self { sender }
    }
}

impl MoveListener for ChannelMoveListener {
    fn on_move(&self, event: &MoveEvent) {
        let _ = self.sender.send(*event);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
