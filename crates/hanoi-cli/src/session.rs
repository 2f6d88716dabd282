//! One interactive session.

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use hanoi_config::{ConfigError, HanoiConfig};
use hanoi_console::{render_board, write_banner, PrintMoveListener};
use hanoi_solver::{Puzzle, SolveReport, SolverBuilder};
use tracing::{debug, warn};

use crate::args::Args;
use crate::prompt::{prompt_count, PromptReply, PromptText, DISKS, QUIT_MESSAGE, TOWERS};

const DEFAULT_CONFIG_FILE: &str = "hanoi.toml";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The puzzle was solved in this many moves.
    Solved { moves: u64 },
    /// The user quit at a prompt.
    Quit,
    /// The solver reported a fault.
    Failed { reason: String },
}

impl Outcome {
    /// 0 when solved, 1 on quit, 2 on a solver fault.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Solved { .. } => ExitCode::SUCCESS,
            Outcome::Quit => ExitCode::from(1),
            Outcome::Failed { .. } => ExitCode::from(2),
        }
    }
}

/// Runs one session: banner, counts, before board, moves, after board.
///
/// The writer is handed back so callers can inspect buffered output.
pub fn run<R, W>(args: &Args, mut input: R, mut out: W) -> Result<(Outcome, W)>
where
    R: BufRead,
    W: Write + Send + 'static,
{
    let config = load_config(args)?;
    let limits = &config.limits;
    write_banner(&mut out, limits)?;

    let preset = config.puzzle;
    let towers = match preset_or_prompt(
        &mut input,
        &mut out,
        args.towers.or(preset.map(|p| p.towers)),
        &TOWERS,
        &limits.tower_range(),
    )? {
        PromptReply::Value(towers) => towers,
        PromptReply::Quit => return quit(out),
    };
    let disks = match preset_or_prompt(
        &mut input,
        &mut out,
        args.disks.or(preset.map(|p| p.disks)),
        &DISKS,
        &limits.disk_range(),
    )? {
        PromptReply::Value(disks) => disks,
        PromptReply::Quit => return quit(out),
    };

    let mut puzzle = Puzzle::new(towers, disks)?;
    let pad = config.display.max_height_padding;
    out.write_all(render_board(puzzle.towers(), disks, pad).as_bytes())?;

    let (report, mut out) = solve(&config, &mut puzzle, out)?;

    out.write_all(render_board(puzzle.towers(), disks, pad).as_bytes())?;
    let outcome = match report.fault() {
        None => {
            writeln!(
                out,
                "Solved with {} in {} moves.",
                report.strategy(),
                report.move_count()
            )?;
            Outcome::Solved {
                moves: report.move_count(),
            }
        }
        Some(fault) => {
            writeln!(out, "Solver failed after {} moves: {fault}", report.move_count())?;
            Outcome::Failed {
                reason: fault.to_string(),
            }
        }
    };
    out.flush()?;
    Ok((outcome, out))
}

fn load_config(args: &Args) -> Result<HanoiConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => HanoiConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_default(),
    };
    if args.quiet {
        config.display.show_moves = false;
    }
    if args.board_each_move {
        config.display.show_board_each_move = true;
    }
    debug!("Using configuration {:?}", config);
    Ok(config)
}

/// Reads YAML for `.yaml`/`.yml` files and TOML otherwise.
fn load_config_file(path: &Path) -> std::result::Result<HanoiConfig, ConfigError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let config = if is_yaml {
        HanoiConfig::from_yaml_file(path)?
    } else {
        HanoiConfig::from_toml_file(path)?
    };
    config.validate()?;
    Ok(config)
}

/// Uses `preset` when it is inside `range`, prompting otherwise.
fn preset_or_prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    preset: Option<usize>,
    text: &PromptText,
    range: &std::ops::RangeInclusive<usize>,
) -> Result<PromptReply> {
    match preset {
        Some(value) if range.contains(&value) => return Ok(PromptReply::Value(value)),
        Some(value) => {
            warn!("Preset count {} is outside {:?}", value, range);
            writeln!(out, "{}", text.out_of_range)?;
        }
        None => {}
    }
    Ok(prompt_count(input, out, text, range)?)
}

fn quit<W: Write>(mut out: W) -> Result<(Outcome, W)> {
    writeln!(out, "{QUIT_MESSAGE}")?;
    out.flush()?;
    Ok((Outcome::Quit, out))
}

/// Solves with the move printer attached when moves are shown, and takes
/// the writer back from the printer afterwards.
fn solve<W>(config: &HanoiConfig, puzzle: &mut Puzzle, out: W) -> Result<(SolveReport, W)>
where
    W: Write + Send + 'static,
{
    let builder = SolverBuilder::from_config(config);
    if !config.display.show_moves {
        return Ok((builder.build().solve(puzzle), out));
    }

    let printer = Arc::new(
        PrintMoveListener::new(out).with_board_each_move(config.display.show_board_each_move),
    );
    let solver = builder.with_listener(printer.clone()).build();
    let report = solver.solve(puzzle);
    drop(solver);

    let printer = Arc::try_unwrap(printer).map_err(|_| anyhow!("move printer is still shared"))?;
    Ok((report, printer.into_inner()))
}
