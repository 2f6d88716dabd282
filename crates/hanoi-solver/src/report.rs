//! Outcome of a solve run.

use std::time::Duration;

use hanoi_core::{HanoiError, Strategy};

use crate::stats::PhaseStats;

/// Summary handed back by [`Solver::solve`](crate::Solver::solve).
///
/// A report is produced even when a phase faults; the fault is kept and
/// the statistics cover every move applied before it.
#[derive(Debug, Clone)]
pub struct SolveReport {
    strategy: Strategy,
    move_count: u64,
    elapsed: Duration,
    phases: Vec<PhaseStats>,
    fault: Option<HanoiError>,
}

impl SolveReport {
    pub(crate) fn new(
        strategy: Strategy,
        move_count: u64,
        elapsed: Duration,
        phases: Vec<PhaseStats>,
        fault: Option<HanoiError>,
    ) -> Self {
        Self {
            strategy,
            move_count,
            elapsed,
            phases,
            fault,
        }
    }

    /// Returns true when every phase completed and the puzzle is solved.
    pub fn is_success(&self) -> bool {
        self.fault.is_none()
    }

    /// The fault that stopped the solve, if any.
    pub fn fault(&self) -> Option<&HanoiError> {
        self.fault.as_ref()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Total moves applied, across all phases.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Per-phase statistics, in execution order.
    pub fn phases(&self) -> &[PhaseStats] {
        &self.phases
    }

    /// Converts the report into a `Result`, keeping the move count.
    pub fn into_result(self) -> Result<u64, HanoiError> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.move_count),
        }
    }
}
