//! Unbuffer phase: merge the sub-piles onto the destination.

use hanoi_core::{HanoiError, Result, TowerId};
use smallvec::{smallvec, SmallVec};

use super::Phase;
use crate::scope::PhaseScope;

/// Merges every sub-pile onto the destination, largest pile first.
///
/// Towers T-1 down to 2 are visited in turn. A pile of `k` disks parks its
/// top `k - 1` disks one per free tower, sends its bottom disk to the
/// destination and then recalls the parked disks last-parked first. The
/// emptied source and every emptied pile tower join the free list.
#[derive(Debug, Clone, Default)]
pub struct UnbufferPhase;

impl UnbufferPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for UnbufferPhase {
    fn solve(&mut self, phase_scope: &mut PhaseScope<'_, '_>) -> Result<()> {
        let roles = phase_scope.puzzle().roles();
        let tower_count = phase_scope.puzzle().tower_count();
        let mut free: SmallVec<[TowerId; 10]> = smallvec![roles.source];

        for tower in (2..tower_count).rev() {
            let pile = TowerId::new(tower);
            let disk_count = phase_scope.disk_count_on(pile)?;
            if disk_count == 0 {
                free.push(pile);
                continue;
            }

            let parked = disk_count - 1;
            if parked > free.len() {
                return Err(HanoiError::Internal(format!(
                    "pile on tower {pile} needs {parked} free towers, {} available",
                    free.len()
                )));
            }

            for &spare in &free[..parked] {
                phase_scope.move_top_disk(pile, spare)?;
            }
            phase_scope.move_top_disk(pile, roles.destination)?;
            for &spare in free[..parked].iter().rev() {
                phase_scope.move_top_disk(spare, roles.destination)?;
            }
            free.push(pile);
        }
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "Unbuffer"
    }
}
