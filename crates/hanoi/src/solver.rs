//! Solver entry point that hides all internal wiring.

use std::sync::Arc;

use hanoi_config::HanoiConfig;
use hanoi_core::{MoveListener, Result};
use hanoi_solver::{Puzzle, SolveReport, SolverBuilder};
use tracing::debug;

/// Configuration file picked up by [`run_puzzle`] from the working directory.
pub const CONFIG_FILE: &str = "hanoi.toml";

/// Solves a fresh `towers` x `disks` puzzle.
///
/// Settings come from `hanoi.toml` when present, defaults otherwise.
///
/// # Errors
///
/// Returns [`HanoiError::UnsupportedConfiguration`](hanoi_core::HanoiError::UnsupportedConfiguration)
/// for fewer than three towers. Faults during solving are reported
/// through the returned [`SolveReport`].
pub fn run_puzzle(towers: usize, disks: usize) -> Result<(Puzzle, SolveReport)> {
    let config = HanoiConfig::load(CONFIG_FILE).unwrap_or_default();
    run_puzzle_with(&config, towers, disks, Vec::new())
}

/// Solves a fresh puzzle with an explicit configuration and listeners.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hanoi::{run_puzzle_with, CountingMoveListener, HanoiConfig, MoveListener};
///
/// let counter = Arc::new(CountingMoveListener::new());
/// let listeners: Vec<Arc<dyn MoveListener>> = vec![counter.clone()];
/// let (puzzle, report) = run_puzzle_with(&HanoiConfig::default(), 3, 4, listeners).unwrap();
///
/// assert!(puzzle.is_solved());
/// assert_eq!(report.move_count(), 15);
/// assert_eq!(counter.move_count(), 15);
/// ```
pub fn run_puzzle_with(
    config: &HanoiConfig,
    towers: usize,
    disks: usize,
    listeners: Vec<Arc<dyn MoveListener>>,
) -> Result<(Puzzle, SolveReport)> {
    let mut puzzle = Puzzle::new(towers, disks)?;
    debug!(
        "Solving {} towers, {} disks with {} ({:?} mode)",
        towers,
        disks,
        puzzle.strategy(),
        config.environment_mode
    );

    let solver = listeners
        .into_iter()
        .fold(SolverBuilder::from_config(config), SolverBuilder::with_listener)
        .build();
    let report = solver.solve(&mut puzzle);
    Ok((puzzle, report))
}
