//! Strategy classification.
//!
//! The strategy is a pure function of the tower and disk counts. Towers
//! 2..=T can hold size-ordered sub-piles of 1, 2, ..., T-1 disks, so up to
//! `T * (T - 1) / 2` disks can be buffered without any traditional Hanoi
//! pass.

use std::fmt;

use crate::error::{HanoiError, Result};

/// Move-generation algorithm for a puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Fewer disks than towers: spread one disk per tower, then stack.
    ShiftAndStack,
    /// Buffer into sub-piles, then merge them onto the destination.
    BufferUnbuffer,
    /// Buffer what fits, run a traditional pass on the rest, then merge.
    BufferHanoiUnbuffer,
    /// Classic three-peg algorithm.
    TraditionalHanoi,
}

impl Strategy {
    /// Returns true when the strategy includes a traditional Hanoi pass.
    pub fn uses_hanoi_pass(self) -> bool {
        matches!(self, Strategy::BufferHanoiUnbuffer | Strategy::TraditionalHanoi)
    }

    /// Returns true when the strategy buffers disks into sub-piles.
    pub fn uses_buffering(self) -> bool {
        matches!(self, Strategy::BufferUnbuffer | Strategy::BufferHanoiUnbuffer)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::ShiftAndStack => "Shift and Stack",
            Strategy::BufferUnbuffer => "Buffer/Unbuffer",
            Strategy::BufferHanoiUnbuffer => "Buffer/Hanoi/Unbuffer",
            Strategy::TraditionalHanoi => "Traditional Hanoi",
        };
        f.write_str(name)
    }
}

/// Number of disks towers 2..=`tower_count` can hold as sub-piles.
pub fn buffer_capacity(tower_count: usize) -> usize {
    tower_count.saturating_sub(1) * tower_count / 2
}

/// Classifies a puzzle instance.
///
/// # Errors
///
/// Returns [`HanoiError::UnsupportedConfiguration`] for fewer than three towers.
///
/// # Examples
///
/// ```
/// use hanoi_core::{classify, Strategy};
///
/// assert_eq!(classify(3, 12).unwrap(), Strategy::TraditionalHanoi);
/// assert_eq!(classify(6, 15).unwrap(), Strategy::BufferUnbuffer);
/// assert_eq!(classify(6, 16).unwrap(), Strategy::BufferHanoiUnbuffer);
/// ```
pub fn classify(tower_count: usize, disk_count: usize) -> Result<Strategy> {
    if tower_count < 3 {
        return Err(HanoiError::UnsupportedConfiguration {
            towers: tower_count,
            disks: disk_count,
            reason: "at least three towers are required",
        });
    }

    let strategy = if tower_count == 3 {
        Strategy::TraditionalHanoi
    } else if disk_count < tower_count {
        Strategy::ShiftAndStack
    } else if disk_count <= buffer_capacity(tower_count) {
        Strategy::BufferUnbuffer
    } else {
        Strategy::BufferHanoiUnbuffer
    };
    Ok(strategy)
}
