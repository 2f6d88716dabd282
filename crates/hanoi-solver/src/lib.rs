//! Hanoi Solver Engine
//!
//! This crate provides the move-generation engine including:
//! - Puzzle state and the move primitives
//! - Strategy phases (shift and stack, buffering, traditional pass)
//! - Solver and SolverBuilder
//! - Event system for observing moves
//! - Solve statistics and reports

pub mod builder;
pub mod event;
pub mod phase;
pub mod puzzle;
pub mod report;
pub mod scope;
pub mod solver;
pub mod stats;

pub use builder::SolverBuilder;
pub use event::{
    ChannelMoveListener, CountingMoveListener, LoggingMoveListener, MoveEventSupport,
    PhaseLifecycleListener,
};
pub use phase::{
    phases_for, BufferPhase, Phase, ShiftAndStackPhase, TraditionalHanoiPhase, UnbufferPhase,
};
pub use puzzle::{Puzzle, TowerRoles};
pub use report::SolveReport;
pub use scope::{PhaseScope, SolverScope};
pub use solver::Solver;
pub use stats::{PhaseStats, SolverStats};

pub use hanoi_core::{
    classify, DiskId, HanoiError, MoveEvent, MoveListener, Result, Strategy, TowerId,
};
