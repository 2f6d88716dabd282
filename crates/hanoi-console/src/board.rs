//! Fixed-width text rendering of the towers.
//!
//! Every tower takes a 7-character column. Disks are bottom-aligned, so a
//! short tower shows blanks above its top disk.

use std::fmt::Write as _;
use std::io::{self, Write};

use hanoi_core::Tower;

const DIVIDER: &str =
    "---------------------------------------------------------------------";
const COLUMN_RULE: &str = "----   ";
const BLANK_CELL: &str = "       ";

/// Renders the board.
///
/// With `use_max_height_padding` the board always has `disk_count` rows;
/// otherwise it is as tall as the tallest tower.
///
/// # Example
///
/// ```
/// use hanoi_console::render_board;
/// use hanoi_solver::Puzzle;
///
/// let puzzle = Puzzle::new(5, 3).unwrap();
/// let board = render_board(puzzle.towers(), puzzle.disk_count(), true);
///
/// assert!(board.contains("Towers: 5  Disks: 3"));
/// assert_eq!(board.lines().count(), 4 + 3);
/// ```
pub fn render_board(towers: &[Tower], disk_count: usize, use_max_height_padding: bool) -> String {
    let snapshot: Vec<Vec<usize>> = towers
        .iter()
        .map(|tower| tower.disks().map(|disk| disk.id().get()).collect())
        .collect();
    render_snapshot(&snapshot, disk_count, use_max_height_padding)
}

/// Renders a board given as disk ids per tower, top first.
pub fn render_snapshot(
    snapshot: &[Vec<usize>],
    disk_count: usize,
    use_max_height_padding: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{DIVIDER}");
    let _ = writeln!(out, "Towers: {}  Disks: {}", snapshot.len(), disk_count);

    for number in 1..=snapshot.len() {
        let _ = write!(out, "{number:>3}    ");
    }
    out.push('\n');
    out.push_str(&COLUMN_RULE.repeat(snapshot.len()));
    out.push('\n');

    let height = if use_max_height_padding {
        disk_count
    } else {
        snapshot.iter().map(Vec::len).max().unwrap_or(0)
    };

    for row in 0..height {
        for tower in snapshot {
            // Rows above the top disk of this tower are blank.
            match (row + tower.len()).checked_sub(height) {
                Some(index) if index < tower.len() => {
                    let _ = write!(out, "{:>3}    ", tower[index]);
                }
                _ => out.push_str(BLANK_CELL),
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the rendered board to stdout.
pub fn print_board(towers: &[Tower], disk_count: usize, use_max_height_padding: bool) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(render_board(towers, disk_count, use_max_height_padding).as_bytes());
    let _ = stdout.flush();
}
