//! Solver phases, one per algorithm step.
//!
//! Each strategy runs a fixed sequence of phases:
//! - ShiftAndStack: [`ShiftAndStackPhase`]
//! - BufferUnbuffer: [`BufferPhase`] over every tower, [`UnbufferPhase`]
//! - BufferHanoiUnbuffer: [`BufferPhase`] leaving working and destination free,
//!   [`TraditionalHanoiPhase`], [`UnbufferPhase`]
//! - TraditionalHanoi: [`TraditionalHanoiPhase`]

mod buffer;
mod shift_and_stack;
mod traditional;
mod unbuffer;

use std::fmt::Debug;

use hanoi_core::{Result, Strategy};

use crate::scope::PhaseScope;

pub use buffer::BufferPhase;
pub use shift_and_stack::ShiftAndStackPhase;
pub use traditional::TraditionalHanoiPhase;
pub use unbuffer::UnbufferPhase;

/// A phase of the solving process.
///
/// Phases are executed in sequence by the solver. Every move goes through
/// the phase scope, which keeps counts and listeners in step.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    ///
    /// # Errors
    ///
    /// Propagates any invariant fault raised by a move primitive.
    fn solve(&mut self, phase_scope: &mut PhaseScope<'_, '_>) -> Result<()>;

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}

/// Builds the phase sequence for a strategy.
pub fn phases_for(strategy: Strategy, tower_count: usize) -> Vec<Box<dyn Phase>> {
    match strategy {
        Strategy::ShiftAndStack => vec![Box::new(ShiftAndStackPhase::new())],
        Strategy::BufferUnbuffer => vec![
            Box::new(BufferPhase::new(tower_count)),
            Box::new(UnbufferPhase::new()),
        ],
        Strategy::BufferHanoiUnbuffer => vec![
            Box::new(BufferPhase::new(tower_count.saturating_sub(2))),
            Box::new(TraditionalHanoiPhase::new()),
            Box::new(UnbufferPhase::new()),
        ],
        Strategy::TraditionalHanoi => vec![Box::new(TraditionalHanoiPhase::new())],
    }
}

#[cfg(test)]
mod tests;
