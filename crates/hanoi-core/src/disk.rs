//! Disks and their identifiers.

use std::fmt;

/// One-based disk identifier. A larger id is a larger disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskId(usize);

impl DiskId {
    /// Creates an id from its one-based value.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the one-based value, which is also the disk's size.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A disk of the puzzle.
///
/// Neither `Clone` nor `Copy`: a disk changes towers by being
/// moved out of one and into another, so it can never be duplicated.
#[derive(Debug, PartialEq, Eq)]
pub struct Disk {
    id: DiskId,
}

impl Disk {
    pub fn new(id: DiskId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> DiskId {
        self.id
    }

    /// Returns true when this disk may rest on `other`.
    pub fn fits_on(&self, other: &Disk) -> bool {
        self.id < other.id
    }
}
