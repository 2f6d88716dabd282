//! Phase-level scope.

use std::time::Duration;

use hanoi_core::{Result, TowerId};

use super::SolverScope;
use crate::puzzle::Puzzle;
use crate::stats::PhaseStats;

/// Scope for a single phase of solving.
///
/// # Type Parameters
/// * `'s` - Lifetime of the solver scope borrow
/// * `'a` - Lifetime of the puzzle borrow held by the solver scope
pub struct PhaseScope<'s, 'a> {
    /// Reference to the parent solver scope.
    solver_scope: &'s mut SolverScope<'a>,
    /// Moves and timing of this phase.
    stats: PhaseStats,
}

impl<'s, 'a> PhaseScope<'s, 'a> {
    /// Creates a new phase scope.
    pub fn new(
        solver_scope: &'s mut SolverScope<'a>,
        phase_index: usize,
        phase_type: &'static str,
    ) -> Self {
        Self {
            solver_scope,
            stats: PhaseStats::new(phase_index, phase_type),
        }
    }

    /// Returns the phase index.
    pub fn phase_index(&self) -> usize {
        self.stats.phase_index
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Returns the number of moves applied in this phase.
    pub fn move_count(&self) -> u64 {
        self.stats.move_count
    }

    /// Returns a reference to the solver scope.
    pub fn solver_scope(&self) -> &SolverScope<'a> {
        self.solver_scope
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.solver_scope.puzzle()
    }

    pub fn is_tower_empty(&self, id: TowerId) -> Result<bool> {
        self.solver_scope.is_tower_empty(id)
    }

    pub fn disk_count_on(&self, id: TowerId) -> Result<usize> {
        self.solver_scope.disk_count_on(id)
    }

    /// See [`SolverScope::move_top_disk`].
    pub fn move_top_disk(&mut self, from: TowerId, to: TowerId) -> Result<bool> {
        let moved = self.solver_scope.move_top_disk(from, to)?;
        if moved {
            self.stats.record_move();
        }
        Ok(moved)
    }

    /// See [`SolverScope::move_between_towers`].
    pub fn move_between_towers(&mut self, a: TowerId, b: TowerId) -> Result<bool> {
        let moved = self.solver_scope.move_between_towers(a, b)?;
        if moved {
            self.stats.record_move();
        }
        Ok(moved)
    }

    /// Stops the phase clock and hands back its statistics.
    pub fn finish(mut self) -> PhaseStats {
        self.stats.finish();
        self.stats
    }
}
