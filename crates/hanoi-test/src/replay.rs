//! Independent replay of a move stream.

use std::fmt;
use std::sync::Mutex;

use hanoi_core::{MoveEvent, MoveListener};

/// The first inconsistency seen while replaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayViolation {
    /// A move named a tower outside the board.
    UnknownTower { sequence: u64, tower: usize },
    /// The moved disk was not the top of its source tower.
    NotOnTop {
        sequence: u64,
        disk: usize,
        tower: usize,
        top: Option<usize>,
    },
    /// A disk landed on a smaller one.
    LargerOnSmaller {
        sequence: u64,
        disk: usize,
        resting: usize,
    },
    /// Sequence numbers skipped or repeated.
    OutOfSequence { expected: u64, got: u64 },
}

impl fmt::Display for ReplayViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTower { sequence, tower } => {
                write!(f, "move {sequence}: unknown tower {tower}")
            }
            Self::NotOnTop {
                sequence,
                disk,
                tower,
                top,
            } => write!(
                f,
                "move {sequence}: disk {disk} is not on top of tower {tower} (top {top:?})"
            ),
            Self::LargerOnSmaller {
                sequence,
                disk,
                resting,
            } => write!(f, "move {sequence}: disk {disk} placed on disk {resting}"),
            Self::OutOfSequence { expected, got } => {
                write!(f, "expected move {expected}, got move {got}")
            }
        }
    }
}

#[derive(Debug)]
struct ReplayState {
    // Bottom first.
    towers: Vec<Vec<usize>>,
    moves: u64,
    violation: Option<ReplayViolation>,
}

/// A [`MoveListener`] that replays every move on its own stacks.
///
/// The first violation is recorded and replay stops there, so a test can
/// run a whole solve and then check [`ReplayBoard::violation`].
///
/// # Example
///
/// ```
/// use hanoi_core::{DiskId, MoveEvent, MoveListener, TowerId};
/// use hanoi_test::ReplayBoard;
///
/// let board = ReplayBoard::new(3, 1);
/// board.on_move(&MoveEvent {
///     sequence: 1,
///     disk: DiskId::new(1),
///     from: TowerId::new(1),
///     to: TowerId::new(3),
/// });
///
/// assert!(board.violation().is_none());
/// assert_eq!(board.snapshot(), vec![vec![], vec![], vec![1]]);
/// ```
#[derive(Debug)]
pub struct ReplayBoard {
    state: Mutex<ReplayState>,
}

impl ReplayBoard {
    /// Creates a board with disks `1..=disk_count` on tower 1.
    pub fn new(tower_count: usize, disk_count: usize) -> Self {
        let mut towers = vec![Vec::new(); tower_count];
        if let Some(source) = towers.first_mut() {
            source.extend((1..=disk_count).rev());
        }
        Self {
            state: Mutex::new(ReplayState {
                towers,
                moves: 0,
                violation: None,
            }),
        }
    }

    /// Number of moves replayed without a violation.
    pub fn move_count(&self) -> u64 {
        self.lock().moves
    }

    pub fn violation(&self) -> Option<ReplayViolation> {
        self.lock().violation.clone()
    }

    /// Disk ids per tower, top first.
    pub fn snapshot(&self) -> Vec<Vec<usize>> {
        self.lock()
            .towers
            .iter()
            .map(|tower| tower.iter().rev().copied().collect())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ReplayState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ReplayState {
    fn replay(&mut self, event: &MoveEvent) -> Result<(), ReplayViolation> {
        let sequence = event.sequence;
        if sequence != self.moves + 1 {
            return Err(ReplayViolation::OutOfSequence {
                expected: self.moves + 1,
                got: sequence,
            });
        }

        let disk = event.disk.get();
        let from = self.index(sequence, event.from.get())?;
        let to = self.index(sequence, event.to.get())?;

        let top = self.towers[from].last().copied();
        if top != Some(disk) {
            return Err(ReplayViolation::NotOnTop {
                sequence,
                disk,
                tower: event.from.get(),
                top,
            });
        }
        if let Some(&resting) = self.towers[to].last() {
            if from != to && resting < disk {
                return Err(ReplayViolation::LargerOnSmaller {
                    sequence,
                    disk,
                    resting,
                });
            }
        }

        self.towers[from].pop();
        self.towers[to].push(disk);
        self.moves += 1;
        Ok(())
    }

    fn index(&self, sequence: u64, tower: usize) -> Result<usize, ReplayViolation> {
        tower
            .checked_sub(1)
            .filter(|&index| index < self.towers.len())
            .ok_or(ReplayViolation::UnknownTower { sequence, tower })
    }
}

impl MoveListener for ReplayBoard {
    fn on_move(&self, event: &MoveEvent) {
        let mut state = self.lock();
        if state.violation.is_some() {
            return;
        }
        if let Err(violation) = state.replay(event) {
            state.violation = Some(violation);
        }
    }
}

/// Asserts that `snapshot` (top first per tower) has every disk on the
/// last tower in order and nothing elsewhere.
///
/// # Panics
///
/// Panics with the offending snapshot when the board is not solved.
pub fn assert_solved(snapshot: &[Vec<usize>], disk_count: usize) {
    let expected: Vec<usize> = (1..=disk_count).collect();
    let Some((destination, rest)) = snapshot.split_last() else {
        panic!("board has no towers");
    };
    assert!(
        rest.iter().all(Vec::is_empty),
        "disks left off the destination: {snapshot:?}"
    );
    assert_eq!(destination, &expected, "destination out of order: {snapshot:?}");
}
