//! Solver implementation.

use std::sync::Arc;

use hanoi_config::EnvironmentMode;
use hanoi_core::{HanoiError, MoveListener, Result};
use tracing::{debug, error, info};

use crate::event::{MoveEventSupport, PhaseLifecycleListener};
use crate::phase::phases_for;
use crate::puzzle::Puzzle;
use crate::report::SolveReport;
use crate::scope::{PhaseScope, SolverScope};
use crate::stats::PhaseStats;

/// Runs the phase sequence of a puzzle's strategy.
///
/// Listeners are notified synchronously from the solve loop, so they
/// observe moves in exactly the order they are applied.
///
/// # Example
///
/// ```
/// use hanoi_solver::{Puzzle, Solver, Strategy};
///
/// let mut puzzle = Puzzle::new(6, 15).unwrap();
/// let report = Solver::new().solve(&mut puzzle);
///
/// assert!(report.is_success());
/// assert_eq!(report.strategy(), Strategy::BufferUnbuffer);
/// assert_eq!(report.phases().len(), 2);
/// assert!(puzzle.is_solved());
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    events: MoveEventSupport,
    environment_mode: EnvironmentMode,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Registers a move listener.
    pub fn with_listener(mut self, listener: Arc<dyn MoveListener>) -> Self {
        self.events.add_move_listener(listener);
        self
    }

    /// Registers a phase lifecycle listener.
    pub fn with_phase_listener(mut self, listener: Arc<dyn PhaseLifecycleListener>) -> Self {
        self.events.add_phase_listener(listener);
        self
    }

    pub fn events(&self) -> &MoveEventSupport {
        &self.events
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.environment_mode
    }

    /// Moves every disk of `puzzle` onto its destination tower.
    ///
    /// Faults raised by a phase stop the run and are returned inside the
    /// report; the puzzle is left as it was after the last applied move.
    pub fn solve(&self, puzzle: &mut Puzzle) -> SolveReport {
        let strategy = puzzle.strategy();
        let tower_count = puzzle.tower_count();
        let disk_count = puzzle.disk_count();

        info!(
            event = "solve_start",
            towers = tower_count as u64,
            disks = disk_count as u64,
            strategy = %strategy,
        );
        self.events.fire_solve_started(tower_count, disk_count);

        let mut solver_scope =
            SolverScope::new(puzzle, &self.events).with_environment_mode(self.environment_mode);
        solver_scope.start_solving();

        let mut phases = Vec::new();
        let outcome = if solver_scope.puzzle().is_solved() {
            debug!("Puzzle already solved, skipping phases");
            Ok(())
        } else {
            self.run_phases(&mut solver_scope, tower_count, &mut phases)
        };

        let move_count = solver_scope.move_count();
        let elapsed = solver_scope.elapsed();
        let speed = solver_scope.stats().moves_per_second();
        let fault = outcome.err();

        match &fault {
            None => info!(
                event = "solve_end",
                moves = move_count,
                duration_ms = elapsed.as_millis() as u64,
                speed = speed,
                success = true,
            ),
            Some(fault) => error!(
                event = "solve_end",
                moves = move_count,
                duration_ms = elapsed.as_millis() as u64,
                success = false,
                error = %fault,
            ),
        }
        self.events.fire_solve_ended(fault.is_none());

        SolveReport::new(strategy, move_count, elapsed, phases, fault)
    }

    fn run_phases(
        &self,
        solver_scope: &mut SolverScope<'_>,
        tower_count: usize,
        finished: &mut Vec<PhaseStats>,
    ) -> Result<()> {
        let strategy = solver_scope.puzzle().strategy();

        for (phase_index, mut phase) in phases_for(strategy, tower_count).into_iter().enumerate() {
            let phase_type = phase.phase_type_name();
            info!(
                event = "phase_start",
                phase = phase_type,
                phase_index = phase_index as u64,
            );
            self.events.fire_phase_started(phase_index, phase_type);

            let mut phase_scope = PhaseScope::new(solver_scope, phase_index, phase_type);
            let outcome = phase.solve(&mut phase_scope);
            let stats = phase_scope.finish();

            info!(
                event = "phase_end",
                phase = phase_type,
                phase_index = phase_index as u64,
                duration_ms = stats.elapsed_ms(),
                moves = stats.move_count,
                speed = stats.moves_per_second(),
            );
            self.events
                .fire_phase_ended(phase_index, phase_type, stats.move_count);
            finished.push(stats);
            outcome?;
        }

        if solver_scope.puzzle().is_solved() {
            Ok(())
        } else {
            Err(HanoiError::Internal(format!(
                "{strategy} finished without solving the puzzle"
            )))
        }
    }
}
