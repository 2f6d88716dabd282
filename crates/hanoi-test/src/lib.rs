//! Shared test fixtures for the hanoi crates.
//!
//! This crate provides pure helpers for testing and depends only on
//! `hanoi-core`, so the solver can use it without a cycle.
//!
//! - [`replay`] - A listener that replays moves on its own board
//! - [`configs`] - Puzzle sizes that solve quickly
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! hanoi-test = { workspace = true }
//! ```

pub mod configs;
pub mod replay;

pub use configs::{bounded_configurations, residual_disks};
pub use replay::{assert_solved, ReplayBoard, ReplayViolation};
