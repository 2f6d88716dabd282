//! Hanoi - A generalized Tower of Hanoi solver in Rust
//!
//! Zero-wiring API: build a [`Puzzle`] and call `puzzle.solve()`, or let
//! [`run_puzzle`] pick up `hanoi.toml` for you.
//!
//! # Example
//!
//! ```rust
//! use hanoi::prelude::*;
//!
//! let mut puzzle = Puzzle::new(5, 3).unwrap();
//! assert_eq!(puzzle.strategy(), Strategy::ShiftAndStack);
//!
//! let report = puzzle.solve();
//! assert!(report.is_success());
//! assert!(puzzle.is_solved());
//! ```

// Core model
pub use hanoi_core::{
    classify, Disk, DiskId, HanoiError, MoveEvent, MoveListener, Result, Strategy, Tower, TowerId,
};

// Configuration
pub use hanoi_config::{ConfigError, DisplayConfig, EnvironmentMode, HanoiConfig, LimitsConfig};

// Solver
pub use hanoi_solver::{
    ChannelMoveListener, CountingMoveListener, LoggingMoveListener, PhaseLifecycleListener,
    Puzzle, SolveReport, Solver, SolverBuilder, TowerRoles,
};

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub use hanoi_console as console;

mod solver;
pub use solver::{run_puzzle, run_puzzle_with, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        run_puzzle, HanoiConfig, HanoiError, MoveListener, Puzzle, SolveReport, Solver,
        SolverBuilder, Strategy, TowerId,
    };
}
