//! Traditional three-peg pass, expressed iteratively.

use hanoi_core::{HanoiError, Result};

use super::Phase;
use crate::scope::PhaseScope;

/// Moves the pile on the source to the destination through the working
/// tower.
///
/// Iteration `i` of `2^n - 1` moves between (source, destination),
/// (source, working) or (working, destination) for `i mod 3` equal to 1, 2
/// or 0. With an even pile the working and destination roles swap so the
/// pile still ends on the destination.
#[derive(Debug, Clone, Default)]
pub struct TraditionalHanoiPhase;

impl TraditionalHanoiPhase {
    pub fn new() -> Self {
        Self
    }
}

/// Number of moves the pass needs for `disk_count` disks.
///
/// # Errors
///
/// Returns [`HanoiError::MoveCountOverflow`] above 64 disks.
pub fn iteration_count(disk_count: usize) -> Result<u64> {
    match disk_count {
        0 => Ok(0),
        1..=64 => Ok(u64::MAX >> (64 - disk_count)),
        _ => Err(HanoiError::MoveCountOverflow(disk_count)),
    }
}

impl Phase for TraditionalHanoiPhase {
    fn solve(&mut self, phase_scope: &mut PhaseScope<'_, '_>) -> Result<()> {
        let roles = phase_scope.puzzle().roles();
        let source = roles.source;
        let mut working = roles.working;
        let mut destination = roles.destination;

        let disk_count = phase_scope.disk_count_on(source)?;
        if disk_count % 2 == 0 {
            std::mem::swap(&mut working, &mut destination);
        }

        for i in 1..=iteration_count(disk_count)? {
            match i % 3 {
                1 => phase_scope.move_between_towers(source, destination)?,
                2 => phase_scope.move_between_towers(source, working)?,
                _ => phase_scope.move_between_towers(working, destination)?,
            };
        }
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "TraditionalHanoi"
    }
}
