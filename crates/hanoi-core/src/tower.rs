//! Towers holding ordered stacks of disks.

use std::fmt;

use crate::disk::{Disk, DiskId};
use crate::error::{HanoiError, Result};

/// One-based tower identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerId(usize);

impl TowerId {
    /// Creates an id from its one-based value.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the one-based value.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A peg holding a stack of disks, smallest on top.
///
/// The stack is stored bottom-first, so the top disk is the last element.
#[derive(Debug)]
pub struct Tower {
    id: TowerId,
    disks: Vec<Disk>,
}

impl Tower {
    /// Creates an empty tower.
    pub fn new(id: TowerId) -> Self {
        Self {
            id,
            disks: Vec::new(),
        }
    }

    pub fn id(&self) -> TowerId {
        self.id
    }

    /// Places `disk` on top.
    ///
    /// Ordering is the caller's responsibility; debug builds assert it.
    pub fn push(&mut self, disk: Disk) {
        debug_assert!(
            self.peek_top().map_or(true, |top| disk.fits_on(top)),
            "disk {} pushed onto smaller disk on tower {}",
            disk.id(),
            self.id
        );
        self.disks.push(disk);
    }

    /// Removes and returns the top disk.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::EmptyTower`] when the tower has no disks.
    pub fn pop(&mut self) -> Result<Disk> {
        self.disks.pop().ok_or(HanoiError::EmptyTower(self.id))
    }

    /// Returns the top disk without removing it.
    pub fn peek_top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Iterates over the disks from top to bottom.
    pub fn disks(&self) -> impl DoubleEndedIterator<Item = &Disk> + ExactSizeIterator {
        self.disks.iter().rev()
    }

    /// Disk ids from top to bottom.
    pub fn disk_ids(&self) -> Vec<DiskId> {
        self.disks().map(Disk::id).collect()
    }

    /// Returns true when sizes strictly increase from top to bottom.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].fits_on(&pair[0]))
    }
}

#[cfg(test)]
#[path = "tower_tests.rs"]
mod tests;
