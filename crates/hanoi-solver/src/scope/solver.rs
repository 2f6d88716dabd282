//! Solver-level scope.

use std::time::Duration;

use hanoi_config::EnvironmentMode;
use hanoi_core::{Disk, Result, TowerId};
use tracing::trace;

use crate::event::MoveEventSupport;
use crate::puzzle::Puzzle;
use crate::stats::SolverStats;

/// Top-level scope for the entire solving process.
///
/// All moves go through this scope, which applies them to the puzzle,
/// counts them and notifies listeners in program order.
pub struct SolverScope<'a> {
    puzzle: &'a mut Puzzle,
    events: &'a MoveEventSupport,
    environment_mode: EnvironmentMode,
    stats: SolverStats,
}

impl<'a> SolverScope<'a> {
    pub fn new(puzzle: &'a mut Puzzle, events: &'a MoveEventSupport) -> Self {
        Self {
            puzzle,
            events,
            environment_mode: EnvironmentMode::default(),
            stats: SolverStats::default(),
        }
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn start_solving(&mut self) {
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn move_count(&self) -> u64 {
        self.stats.move_count
    }

    /// Returns true when the tower has no disks.
    pub fn is_tower_empty(&self, id: TowerId) -> Result<bool> {
        Ok(self.puzzle.require_tower(id)?.is_empty())
    }

    /// Number of disks on the tower.
    pub fn disk_count_on(&self, id: TowerId) -> Result<usize> {
        Ok(self.puzzle.require_tower(id)?.disk_count())
    }

    /// Moves the top disk of `from` onto `to` and notifies listeners.
    ///
    /// Returns `Ok(false)` without any mutation when either id does not
    /// resolve to a tower.
    pub fn move_top_disk(&mut self, from: TowerId, to: TowerId) -> Result<bool> {
        let sequence = self.stats.move_count + 1;
        let Some(event) = self.puzzle.apply_move(from, to, sequence)? else {
            return Ok(false);
        };
        self.stats.record_move();

        if self.environment_mode.is_asserting() {
            self.puzzle.check_invariants()?;
        }

        trace!(
            event = "move",
            step = event.sequence,
            disk = event.disk.get() as u64,
            from = event.from.get() as u64,
            to = event.to.get() as u64,
        );
        self.events.fire_move(&event);
        Ok(true)
    }

    /// Moves between two towers in whichever direction keeps the ordering.
    ///
    /// The smaller top disk moves onto the other tower; an empty tower
    /// always receives. Returns `Ok(false)` when both towers are empty or
    /// either id does not resolve.
    pub fn move_between_towers(&mut self, a: TowerId, b: TowerId) -> Result<bool> {
        let (Some(tower_a), Some(tower_b)) = (self.puzzle.tower(a), self.puzzle.tower(b)) else {
            return Ok(false);
        };
        let top_a = tower_a.peek_top().map(Disk::id);
        let top_b = tower_b.peek_top().map(Disk::id);

        match (top_a, top_b) {
            (None, None) => Ok(false),
            (None, Some(_)) => self.move_top_disk(b, a),
            (Some(_), None) => self.move_top_disk(a, b),
            (Some(disk_a), Some(disk_b)) if disk_a > disk_b => self.move_top_disk(b, a),
            (Some(disk_a), Some(disk_b)) if disk_a < disk_b => self.move_top_disk(a, b),
            _ => Ok(false),
        }
    }
}
