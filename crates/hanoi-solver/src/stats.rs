//! Solve statistics.
//!
//! Stack-allocated counters for solver and phase progress.

use std::time::{Duration, Instant};

/// Solver-level statistics.
///
/// Tracks aggregate metrics across all phases of a solve run.
///
/// # Example
///
/// ```
/// use hanoi_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_move();
/// stats.record_move();
///
/// assert_eq!(stats.move_count, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Total moves applied across all phases.
    pub move_count: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.move_count = 0;
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records an applied move.
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// Returns the moves per second rate.
    pub fn moves_per_second(&self) -> u64 {
        per_second(self.move_count, self.elapsed())
    }
}

/// Phase-level statistics.
///
/// # Example
///
/// ```
/// use hanoi_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new(0, "Buffer");
/// stats.record_move();
/// stats.finish();
///
/// assert_eq!(stats.phase_index, 0);
/// assert_eq!(stats.phase_type, "Buffer");
/// assert_eq!(stats.move_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    /// Number of moves applied in this phase.
    pub move_count: u64,
    start_time: Instant,
    duration: Option<Duration>,
}

impl PhaseStats {
    /// Creates new phase statistics, starting the clock.
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            move_count: 0,
            start_time: Instant::now(),
            duration: None,
        }
    }

    /// Records an applied move.
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// Stops the clock.
    pub fn finish(&mut self) {
        self.duration.get_or_insert_with(|| self.start_time.elapsed());
    }

    /// Returns the phase duration, or the running time if not finished.
    pub fn elapsed(&self) -> Duration {
        self.duration.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Returns the moves per second rate.
    pub fn moves_per_second(&self) -> u64 {
        per_second(self.move_count, self.elapsed())
    }
}

fn per_second(count: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (count as f64 / secs) as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_stats_start_resets() {
        let mut stats = SolverStats::default();
        stats.record_move();
        stats.start();

        assert_eq!(stats.move_count, 0);
    }

    #[test]
    fn test_phase_stats_finish_freezes_duration() {
        let mut stats = PhaseStats::new(2, "Unbuffer");
        stats.finish();
        let first = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));

        assert_eq!(stats.elapsed(), first);
    }

    #[test]
    fn test_per_second_without_elapsed_time() {
        assert_eq!(per_second(10, Duration::ZERO), 0);
        assert_eq!(per_second(10, Duration::from_secs(2)), 5);
    }
}
