//! Entry point of the `hanoi` binary.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use hanoi_cli::args::{validate_args, Args};

/// Parses and validates the arguments, then runs one interactive session
/// on stdin/stdout.
fn main() -> Result<ExitCode> {
    let args = Args::parse();
    validate_args(&args)?;

    hanoi_console::init();

    let stdin = io::stdin().lock();
    let (outcome, _) = hanoi_cli::run(&args, stdin, io::stdout())?;
    Ok(outcome.exit_code())
}
