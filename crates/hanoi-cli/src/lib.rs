//! Interactive front end for the hanoi solver.
//!
//! - [`args`] - Command line arguments
//! - [`prompt`] - Reading tower and disk counts
//! - [`run`] - One session: read counts, solve, print the boards

pub mod args;
pub mod prompt;
mod session;

pub use session::{run, Outcome};
