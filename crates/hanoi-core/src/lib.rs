//! Hanoi Core - Core types for the generalized Tower of Hanoi solver
//!
//! This crate provides the fundamental building blocks:
//! - Disks and towers with their one-based identifiers
//! - Strategy classification from tower and disk counts
//! - Move events and the listener trait that observes them
//! - The error type shared across the workspace

pub mod disk;
pub mod error;
pub mod event;
pub mod strategy;
pub mod tower;

pub use disk::{Disk, DiskId};
pub use error::{HanoiError, Result};
pub use event::{MoveEvent, MoveListener};
pub use strategy::{buffer_capacity, classify, Strategy};
pub use tower::{Tower, TowerId};
