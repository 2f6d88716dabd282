//! Buffer phase: distribute the source into size-ordered sub-piles.

use hanoi_core::{Result, TowerId};

use super::Phase;
use crate::scope::PhaseScope;

/// Builds sub-piles on towers 2..=`max_tower_pile`.
///
/// For each pile tower `t`, disks are spread from the source onto towers
/// T down to `t`, one each, and then gathered onto `t` from `t+1` upwards.
/// Tower `t` thus ends with `T - t + 1` disks in order, and every tower
/// above it is empty again.
#[derive(Debug, Clone)]
pub struct BufferPhase {
    max_tower_pile: usize,
}

impl BufferPhase {
    /// Creates a buffer phase whose last pile is on `max_tower_pile`.
    pub fn new(max_tower_pile: usize) -> Self {
        Self { max_tower_pile }
    }

    pub fn max_tower_pile(&self) -> usize {
        self.max_tower_pile
    }
}

impl Phase for BufferPhase {
    fn solve(&mut self, phase_scope: &mut PhaseScope<'_, '_>) -> Result<()> {
        let source = phase_scope.puzzle().roles().source;
        let tower_count = phase_scope.puzzle().tower_count();

        for pile in 2..=self.max_tower_pile {
            if phase_scope.is_tower_empty(source)? {
                break;
            }

            // Spread the values out
            let mut tower = tower_count;
            while tower >= pile && !phase_scope.is_tower_empty(source)? {
                phase_scope.move_top_disk(source, TowerId::new(tower))?;
                tower -= 1;
            }

            // Gather them into a pile
            let pile_id = TowerId::new(pile);
            for tower in pile + 1..=tower_count {
                let tower = TowerId::new(tower);
                if !phase_scope.is_tower_empty(tower)? {
                    phase_scope.move_top_disk(tower, pile_id)?;
                }
            }
        }
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "Buffer"
    }
}
