//! Printing move listener.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use hanoi_core::{MoveEvent, MoveListener};

use crate::board::render_snapshot;

/// Writes `MOVING Disk:d From Tower:f To Tower:t` for every move.
///
/// With [`with_board_each_move`](Self::with_board_each_move) the listener
/// also keeps its own copy of the towers, rebuilt from the solve-started
/// notification, and renders it after each move.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hanoi_console::PrintMoveListener;
/// use hanoi_solver::{Puzzle, Solver};
///
/// let printer = Arc::new(PrintMoveListener::new(Vec::new()));
/// let mut puzzle = Puzzle::new(5, 3).unwrap();
/// Solver::new().with_listener(printer.clone()).solve(&mut puzzle);
///
/// let output = String::from_utf8(printer.writer_clone()).unwrap();
/// assert!(output.starts_with("MOVING Disk:1 From Tower:1 To Tower:2\n"));
/// assert_eq!(output.lines().count(), 6);
/// ```
pub struct PrintMoveListener<W> {
    state: Mutex<PrintState<W>>,
    board_each_move: bool,
}

struct PrintState<W> {
    out: W,
    // Bottom first.
    towers: Vec<Vec<usize>>,
    disk_count: usize,
    write_failed: bool,
}

impl PrintMoveListener<io::Stdout> {
    /// Prints to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> PrintMoveListener<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(PrintState {
                out,
                towers: Vec::new(),
                disk_count: 0,
                write_failed: false,
            }),
            board_each_move: false,
        }
    }

    /// Gives the writer back.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .out
    }

    /// Also renders the board after every move.
    pub fn with_board_each_move(mut self, enabled: bool) -> Self {
        self.board_each_move = enabled;
        self
    }

    /// Whether any write to the underlying writer has failed so far.
    pub fn has_write_failed(&self) -> bool {
        self.lock().write_failed
    }

    fn lock(&self) -> MutexGuard<'_, PrintState<W>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send + Clone> PrintMoveListener<W> {
    /// Returns a copy of the writer, for in-memory buffers.
    pub fn writer_clone(&self) -> W {
        self.lock().out.clone()
    }
}

impl<W> fmt::Debug for PrintMoveListener<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintMoveListener")
            .field("board_each_move", &self.board_each_move)
            .finish()
    }
}

impl<W> PrintState<W> {
    // Warns on the first failure only; later failures are dropped silently.
    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            if !self.write_failed {
                self.write_failed = true;
                tracing::warn!(
                    error = %err,
                    "move output write failed, further write errors ignored"
                );
            }
        }
    }

    fn apply(&mut self, event: &MoveEvent) {
        let from = event.from.get().wrapping_sub(1);
        let to = event.to.get().wrapping_sub(1);
        if from >= self.towers.len() || to >= self.towers.len() {
            return;
        }
        if let Some(disk) = self.towers[from].pop() {
            self.towers[to].push(disk);
        }
    }

    fn snapshot(&self) -> Vec<Vec<usize>> {
        self.towers
            .iter()
            .map(|tower| tower.iter().rev().copied().collect())
            .collect()
    }
}

impl<W: Write + Send> MoveListener for PrintMoveListener<W> {
    fn on_solve_started(&self, tower_count: usize, disk_count: usize) {
        let mut state = self.lock();
        state.towers = vec![Vec::new(); tower_count];
        if let Some(source) = state.towers.first_mut() {
            source.extend((1..=disk_count).rev());
        }
        state.disk_count = disk_count;
    }

    fn on_move(&self, event: &MoveEvent) {
        let mut state = self.lock();
        let result = writeln!(
            state.out,
            "MOVING Disk:{} From Tower:{} To Tower:{}",
            event.disk, event.from, event.to
        );
        state.record(result);

        if self.board_each_move {
            state.apply(event);
            let board = render_snapshot(&state.snapshot(), state.disk_count, false);
            let result = state.out.write_all(board.as_bytes());
            state.record(result);
        }
    }

    fn on_solve_ended(&self, _success: bool) {
        let mut state = self.lock();
        let result = state.out.flush();
        state.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{DiskId, TowerId};

    fn event(sequence: u64, disk: usize, from: usize, to: usize) -> MoveEvent {
        MoveEvent {
            sequence,
            disk: DiskId::new(disk),
            from: TowerId::new(from),
            to: TowerId::new(to),
        }
    }

    #[test]
    fn test_prints_move_line() {
        let printer = PrintMoveListener::new(Vec::new());
        printer.on_move(&event(1, 12, 1, 5));

        let output = String::from_utf8(printer.writer_clone()).unwrap();
        assert_eq!(output, "MOVING Disk:12 From Tower:1 To Tower:5\n");
    }

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failure_is_recorded_and_moves_continue() {
        let printer = PrintMoveListener::new(BrokenPipe).with_board_each_move(true);
        assert!(!printer.has_write_failed());

        printer.on_solve_started(3, 2);
        printer.on_move(&event(1, 1, 1, 2));
        printer.on_move(&event(2, 2, 1, 3));
        printer.on_move(&event(3, 1, 2, 3));
        printer.on_solve_ended(true);

        assert!(printer.has_write_failed());
        let state = printer.lock();
        assert_eq!(state.snapshot(), vec![vec![], vec![], vec![1, 2]]);
    }

    #[test]
    fn test_board_each_move_tracks_towers() {
        let printer = PrintMoveListener::new(Vec::new()).with_board_each_move(true);
        printer.on_solve_started(3, 2);
        printer.on_move(&event(1, 1, 1, 3));

        let output = String::from_utf8(printer.writer_clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "MOVING Disk:1 From Tower:1 To Tower:3");
        assert_eq!(lines[2], "Towers: 3  Disks: 2");
        assert_eq!(lines[5], "  2             1    ");
        assert_eq!(lines.len(), 6);
    }
}
