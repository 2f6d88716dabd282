//! Puzzle state.
//!
//! Towers are stored in a zero-based arena; every public API addresses them
//! by their one-based [`TowerId`], resolved through [`Puzzle::index_of`].

use hanoi_core::{classify, Disk, DiskId, HanoiError, MoveEvent, Result, Strategy, Tower, TowerId};

use crate::report::SolveReport;
use crate::solver::Solver;

/// The towers with a fixed role during solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerRoles {
    /// Tower 1, holding every disk initially.
    pub source: TowerId,
    /// Spare tower of the traditional pass, the tower before the destination.
    pub working: TowerId,
    /// The last tower.
    pub destination: TowerId,
}

impl TowerRoles {
    /// Conventional roles for `tower_count` towers.
    pub fn for_tower_count(tower_count: usize) -> Self {
        Self {
            source: TowerId::new(1),
            working: TowerId::new(tower_count.saturating_sub(1)),
            destination: TowerId::new(tower_count),
        }
    }
}

/// A generalized Tower of Hanoi instance.
///
/// # Example
///
/// ```
/// use hanoi_solver::{Puzzle, Strategy};
///
/// let mut puzzle = Puzzle::new(5, 3).unwrap();
/// assert_eq!(puzzle.strategy(), Strategy::ShiftAndStack);
///
/// let report = puzzle.solve();
/// assert!(report.is_success());
/// assert_eq!(report.move_count(), 6);
/// assert!(puzzle.is_solved());
/// ```
#[derive(Debug)]
pub struct Puzzle {
    tower_count: usize,
    disk_count: usize,
    towers: Vec<Tower>,
    roles: TowerRoles,
    strategy: Strategy,
}

impl Puzzle {
    /// Creates a puzzle with every disk on the source tower, disk 1 on top.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::UnsupportedConfiguration`] for fewer than three towers.
    pub fn new(tower_count: usize, disk_count: usize) -> Result<Self> {
        let strategy = classify(tower_count, disk_count)?;
        let roles = TowerRoles::for_tower_count(tower_count);

        let mut towers: Vec<Tower> = (1..=tower_count)
            .map(|id| Tower::new(TowerId::new(id)))
            .collect();
        for id in (1..=disk_count).rev() {
            towers[0].push(Disk::new(DiskId::new(id)));
        }

        Ok(Self {
            tower_count,
            disk_count,
            towers,
            roles,
            strategy,
        })
    }

    pub fn tower_count(&self) -> usize {
        self.tower_count
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn roles(&self) -> TowerRoles {
        self.roles
    }

    /// All towers, ordered by id.
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// Maps a tower id onto its arena index.
    pub fn index_of(&self, id: TowerId) -> Option<usize> {
        let index = id.get().checked_sub(1)?;
        (index < self.towers.len()).then_some(index)
    }

    /// Looks up a tower by id.
    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.index_of(id).map(|index| &self.towers[index])
    }

    /// Looks up a tower by id, failing on unknown ids.
    pub fn require_tower(&self, id: TowerId) -> Result<&Tower> {
        self.tower(id).ok_or(HanoiError::UnknownTower(id))
    }

    /// Returns true when the destination holds every disk.
    pub fn is_solved(&self) -> bool {
        self.towers.iter().all(|tower| {
            if tower.id() == self.roles.destination {
                tower.disk_count() == self.disk_count && tower.is_ordered()
            } else {
                tower.is_empty()
            }
        })
    }

    /// Disk ids per tower, top first.
    pub fn snapshot(&self) -> Vec<Vec<usize>> {
        self.towers
            .iter()
            .map(|tower| tower.disks().map(|disk| disk.id().get()).collect())
            .collect()
    }

    /// Verifies ordering on every tower and that each disk appears exactly once.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = vec![false; self.disk_count];

        for tower in &self.towers {
            let mut below: Option<&Disk> = None;
            // Walk bottom to top so each disk is compared with the one it rests on.
            for disk in tower.disks().rev() {
                if let Some(resting) = below {
                    if !disk.fits_on(resting) {
                        return Err(HanoiError::OrderViolation {
                            tower: tower.id(),
                            moving: disk.id(),
                            resting: resting.id(),
                        });
                    }
                }
                below = Some(disk);

                let slot = disk
                    .id()
                    .get()
                    .checked_sub(1)
                    .and_then(|index| seen.get_mut(index))
                    .ok_or(HanoiError::ConservationViolation(disk.id()))?;
                if *slot {
                    return Err(HanoiError::ConservationViolation(disk.id()));
                }
                *slot = true;
            }
        }

        match seen.iter().position(|present| !present) {
            Some(missing) => Err(HanoiError::ConservationViolation(DiskId::new(missing + 1))),
            None => Ok(()),
        }
    }

    /// Moves the top disk of `from` onto `to`.
    ///
    /// Returns `Ok(None)` without touching state when either id is unknown.
    /// The ordering check happens before any mutation, so a rejected move
    /// leaves both towers as they were.
    pub(crate) fn apply_move(
        &mut self,
        from: TowerId,
        to: TowerId,
        sequence: u64,
    ) -> Result<Option<MoveEvent>> {
        let (Some(from_index), Some(to_index)) = (self.index_of(from), self.index_of(to)) else {
            return Ok(None);
        };

        let moving = self.towers[from_index]
            .peek_top()
            .map(Disk::id)
            .ok_or(HanoiError::EmptyTower(from))?;
        if from_index != to_index {
            if let Some(resting) = self.towers[to_index].peek_top().map(Disk::id) {
                if moving > resting {
                    return Err(HanoiError::OrderViolation {
                        tower: to,
                        moving,
                        resting,
                    });
                }
            }
        }

        let disk = self.towers[from_index].pop()?;
        self.towers[to_index].push(disk);

        Ok(Some(MoveEvent {
            sequence,
            disk: moving,
            from,
            to,
        }))
    }

    /// Solves the puzzle headless, with no listeners attached.
    pub fn solve(&mut self) -> SolveReport {
        Solver::new().solve(self)
    }
}

#[cfg(test)]
#[path = "puzzle_tests.rs"]
mod tests;
