//! Scope hierarchy for solver execution.
//!
//! Scopes maintain state at different levels of the solving process:
//! - [`SolverScope`]: Top-level, holds the puzzle and the move primitives
//! - [`PhaseScope`]: Per-phase state

mod phase;
mod solver;

pub use phase::PhaseScope;
pub use solver::SolverScope;
