//! Builder wiring configuration into a [`Solver`].

use std::sync::Arc;

use hanoi_config::{EnvironmentMode, HanoiConfig};
use hanoi_core::MoveListener;

use crate::event::PhaseLifecycleListener;
use crate::solver::Solver;

/// Builder for constructing a solver from configuration.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hanoi_config::{EnvironmentMode, HanoiConfig};
/// use hanoi_solver::{CountingMoveListener, Puzzle, SolverBuilder};
///
/// let config = HanoiConfig::new().with_environment_mode(EnvironmentMode::FullAssert);
/// let counter = Arc::new(CountingMoveListener::new());
/// let solver = SolverBuilder::from_config(&config)
///     .with_listener(counter.clone())
///     .build();
///
/// let mut puzzle = Puzzle::new(5, 4).unwrap();
/// assert!(solver.solve(&mut puzzle).is_success());
/// assert_eq!(counter.move_count(), 7);
/// ```
#[derive(Debug, Default)]
pub struct SolverBuilder {
    environment_mode: EnvironmentMode,
    move_listeners: Vec<Arc<dyn MoveListener>>,
    phase_listeners: Vec<Arc<dyn PhaseLifecycleListener>>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the settings of a loaded configuration.
    pub fn from_config(config: &HanoiConfig) -> Self {
        Self {
            environment_mode: config.environment_mode,
            ..Self::default()
        }
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn MoveListener>) -> Self {
        self.move_listeners.push(listener);
        self
    }

    pub fn with_phase_listener(mut self, listener: Arc<dyn PhaseLifecycleListener>) -> Self {
        self.phase_listeners.push(listener);
        self
    }

    pub fn build(self) -> Solver {
        let solver = Solver::new().with_environment_mode(self.environment_mode);
        let solver = self
            .move_listeners
            .into_iter()
            .fold(solver, Solver::with_listener);
        self.phase_listeners
            .into_iter()
            .fold(solver, Solver::with_phase_listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CountingMoveListener;
    use crate::puzzle::Puzzle;

    #[test]
    fn test_from_config_takes_environment_mode() {
        let config = HanoiConfig::new().with_environment_mode(EnvironmentMode::FullAssert);

        let solver = SolverBuilder::from_config(&config).build();

        assert_eq!(solver.environment_mode(), EnvironmentMode::FullAssert);
    }

    #[test]
    fn test_build_registers_listeners() {
        let counter = Arc::new(CountingMoveListener::new());

        let solver = SolverBuilder::new()
            .with_listener(counter.clone())
            .with_phase_listener(counter.clone())
            .build();

        assert_eq!(solver.events().move_listener_count(), 1);
        assert_eq!(solver.events().phase_listener_count(), 1);

        let mut puzzle = Puzzle::new(6, 15).unwrap();
        let report = solver.solve(&mut puzzle);

        assert!(report.is_success());
        assert_eq!(counter.move_count() as u64, report.move_count());
        assert_eq!(counter.phase_started_count(), 2);
        assert_eq!(counter.phase_ended_count(), 2);
        assert_eq!(counter.solve_ended_count(), 1);
    }
}
