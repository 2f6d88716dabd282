//! Console output for the hanoi solver.
//!
//! - [`board`] - Fixed-width text rendering of the towers
//! - [`listener`] - A move listener printing one line per move
//! - [`init`] - A `tracing` layer that formats solver events with colors
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solving/phase start/end)
//! - **DEBUG**: Listener events
//! - **TRACE**: Individual moves

pub mod board;
pub mod listener;

pub use board::{print_board, render_board};
pub use listener::PrintMoveListener;

use hanoi_config::LimitsConfig;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `hanoi_solver=info` directive.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hanoi_solver=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HanoiConsoleLayer)
            .try_init();
    });
}

/// Prints the program title and prompt instructions for the default limits.
pub fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = write_banner(&mut stdout, &LimitsConfig::default());
    let _ = stdout.flush();
}

/// Writes the program title and prompt instructions.
pub fn write_banner<W: Write>(out: &mut W, limits: &LimitsConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Tower of Hanoi".bright_cyan().bold())?;
    writeln!(out, "\tType Q or QUIT at the prompt to Quit")?;
    writeln!(
        out,
        "\tTowers range From {} to {}",
        limits.min_towers, limits.max_towers
    )?;
    writeln!(
        out,
        "\tDisk range from {} to {}",
        limits.min_disks, limits.max_disks
    )
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats solver events with colors.
pub struct HanoiConsoleLayer;

impl<S: Subscriber> Layer<S> for HanoiConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("hanoi_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    strategy: Option<String>,
    error: Option<String>,
    phase_index: Option<u64>,
    towers: Option<u64>,
    disks: Option<u64>,
    moves: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    step: Option<u64>,
    disk: Option<u64>,
    from: Option<u64>,
    to: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "strategy" => self.strategy = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "towers" => self.towers = Some(value),
            "disks" => self.disks = Some(value),
            "moves" => self.moves = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "step" => self.step = Some(value),
            "disk" => self.disk = Some(value),
            "from" => self.from = Some(value),
            "to" => self.to = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "move" => format_move(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let towers = v.towers.unwrap_or(0);
    let disks = v.disks.unwrap_or(0);
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} Solving │ {} towers │ {} disks │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(towers).bright_yellow(),
        format_count(disks).bright_yellow(),
        strategy.bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let moves = format_count(v.moves.unwrap_or(0));
    let duration = format_duration_ms(v.duration_ms.unwrap_or(0));

    match v.error.as_deref() {
        None => format!(
            "{} {} Solving complete │ {} moves │ {} │ {}",
            format_elapsed(),
            "■".bright_cyan().bold(),
            moves.white().bold(),
            duration.yellow(),
            "SOLVED".bright_green().bold()
        ),
        Some(error) => format!(
            "{} {} Solving failed │ {} moves │ {} │ {}",
            format_elapsed(),
            "■".bright_red().bold(),
            moves.white().bold(),
            duration.yellow(),
            error.bright_red()
        ),
    }
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let moves = v.moves.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} ended │ {} │ {} moves │ {} moves/s",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        format_count(moves).white(),
        format_count(speed).bright_magenta().bold(),
    )
}

fn format_move(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Move {:>10} │ Disk {:>3} │ {} → {}",
        format_elapsed(),
        "·".bright_black(),
        format_count(v.step.unwrap_or(0)).bright_black(),
        v.disk.unwrap_or(0),
        v.from.unwrap_or(0),
        v.to.unwrap_or(0)
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
