//! Spread-then-stack phase for fewer disks than towers.

use hanoi_core::{Result, TowerId};

use super::Phase;
use crate::scope::PhaseScope;

/// Spreads one disk onto each of towers 2..=n+1, then stacks them onto the
/// destination from the highest tower down.
///
/// The source is popped smallest first, so the highest tower receives the
/// largest disk and stacking in reverse lands disks largest first.
#[derive(Debug, Clone, Default)]
pub struct ShiftAndStackPhase;

impl ShiftAndStackPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for ShiftAndStackPhase {
    fn solve(&mut self, phase_scope: &mut PhaseScope<'_, '_>) -> Result<()> {
        let roles = phase_scope.puzzle().roles();
        let disk_count = phase_scope.disk_count_on(roles.source)?;
        let first_spread = roles.source.get() + 1;
        let last_spread = roles.source.get() + disk_count;

        for tower in first_spread..=last_spread {
            phase_scope.move_top_disk(roles.source, TowerId::new(tower))?;
        }

        for tower in (first_spread..=last_spread).rev() {
            let tower = TowerId::new(tower);
            // A disk spread straight onto the destination is already home.
            if tower == roles.destination {
                continue;
            }
            phase_scope.move_top_disk(tower, roles.destination)?;
        }
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "ShiftAndStack"
    }
}
