//! Error types for the Hanoi solver

use thiserror::Error;

use crate::{DiskId, TowerId};

/// Main error type for puzzle operations.
///
/// Apart from `UnsupportedConfiguration`, every variant marks a broken
/// invariant: a correct strategy never produces one during solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// Pop was attempted on a tower without disks.
    #[error("Tower {0} has no disks")]
    EmptyTower(TowerId),

    /// A tower id does not resolve to a tower of this puzzle.
    #[error("Tower {0} does not exist")]
    UnknownTower(TowerId),

    /// The tower/disk counts cannot be solved by any strategy.
    #[error("Unsupported configuration: {towers} towers, {disks} disks ({reason})")]
    UnsupportedConfiguration {
        towers: usize,
        disks: usize,
        reason: &'static str,
    },

    /// A disk ended up on top of a smaller one.
    #[error("Disk {moving} placed on smaller disk {resting} on tower {tower}")]
    OrderViolation {
        tower: TowerId,
        moving: DiskId,
        resting: DiskId,
    },

    /// A disk is missing or present more than once.
    #[error("Disk {0} is missing or duplicated")]
    ConservationViolation(DiskId),

    /// The traditional pass would need more than `u64::MAX` iterations.
    #[error("Traditional pass over {0} disks overflows the move counter")]
    MoveCountOverflow(usize),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for puzzle operations
pub type Result<T> = std::result::Result<T, HanoiError>;
