//! Tests for the individual phases.

use super::*;
use crate::event::MoveEventSupport;
use crate::puzzle::Puzzle;
use crate::scope::SolverScope;
use hanoi_core::HanoiError;

/// Runs a single phase against the puzzle and returns its move count.
fn run_phase(puzzle: &mut Puzzle, phase: &mut dyn Phase) -> Result<u64> {
    let events = MoveEventSupport::new();
    let mut solver_scope = SolverScope::new(puzzle, &events);
    solver_scope.start_solving();
    let mut phase_scope = PhaseScope::new(&mut solver_scope, 0, phase.phase_type_name());
    phase.solve(&mut phase_scope)?;
    Ok(phase_scope.finish().move_count)
}

#[test]
fn test_phases_for_each_strategy() {
    let names = |strategy| {
        phases_for(strategy, 6)
            .iter()
            .map(|phase| phase.phase_type_name())
            .collect::<Vec<_>>()
    };

    assert_eq!(names(Strategy::ShiftAndStack), vec!["ShiftAndStack"]);
    assert_eq!(names(Strategy::BufferUnbuffer), vec!["Buffer", "Unbuffer"]);
    assert_eq!(
        names(Strategy::BufferHanoiUnbuffer),
        vec!["Buffer", "TraditionalHanoi", "Unbuffer"]
    );
    assert_eq!(names(Strategy::TraditionalHanoi), vec!["TraditionalHanoi"]);
}

#[test]
fn test_shift_and_stack_five_towers_three_disks() {
    let mut puzzle = Puzzle::new(5, 3).unwrap();

    let moves = run_phase(&mut puzzle, &mut ShiftAndStackPhase::new()).unwrap();

    assert_eq!(moves, 6);
    assert_eq!(puzzle.snapshot()[4], vec![1, 2, 3]);
    assert!(puzzle.is_solved());
}

#[test]
fn test_shift_and_stack_skips_disk_spread_onto_destination() {
    // Four disks on five towers: disk 4 is spread straight onto tower 5.
    let mut puzzle = Puzzle::new(5, 4).unwrap();

    let moves = run_phase(&mut puzzle, &mut ShiftAndStackPhase::new()).unwrap();

    assert_eq!(moves, 7);
    assert!(puzzle.is_solved());
}

#[test]
fn test_buffer_builds_triangular_piles() {
    let mut puzzle = Puzzle::new(6, 15).unwrap();

    run_phase(&mut puzzle, &mut BufferPhase::new(6)).unwrap();

    assert_eq!(
        puzzle.snapshot(),
        vec![
            vec![],
            vec![1, 2, 3, 4, 5],
            vec![6, 7, 8, 9],
            vec![10, 11, 12],
            vec![13, 14],
            vec![15],
        ]
    );
}

#[test]
fn test_buffer_stops_when_source_empties() {
    let mut puzzle = Puzzle::new(5, 5).unwrap();

    run_phase(&mut puzzle, &mut BufferPhase::new(5)).unwrap();

    assert_eq!(
        puzzle.snapshot(),
        vec![vec![], vec![1, 2, 3, 4], vec![5], vec![], vec![]]
    );
}

#[test]
fn test_buffer_reserving_two_towers_leaves_residual() {
    let mut puzzle = Puzzle::new(5, 12).unwrap();

    run_phase(&mut puzzle, &mut BufferPhase::new(3)).unwrap();

    let snapshot = puzzle.snapshot();
    assert_eq!(snapshot[1], vec![1, 2, 3, 4]);
    assert_eq!(snapshot[2], vec![5, 6, 7]);
    assert_eq!(snapshot[0], vec![8, 9, 10, 11, 12]);
    assert!(snapshot[3].is_empty());
    assert!(snapshot[4].is_empty());
}

#[test]
fn test_unbuffer_merges_piles() {
    let mut puzzle = Puzzle::new(6, 15).unwrap();
    run_phase(&mut puzzle, &mut BufferPhase::new(6)).unwrap();

    run_phase(&mut puzzle, &mut UnbufferPhase::new()).unwrap();

    assert!(puzzle.is_solved());
    assert_eq!(puzzle.snapshot()[5], (1..=15).collect::<Vec<_>>());
}

#[test]
fn test_unbuffer_on_empty_piles_is_noop() {
    let mut puzzle = Puzzle::new(5, 0).unwrap();

    let moves = run_phase(&mut puzzle, &mut UnbufferPhase::new()).unwrap();

    assert_eq!(moves, 0);
}

#[test]
fn test_traditional_move_counts() {
    for disks in 1..=8 {
        let mut puzzle = Puzzle::new(3, disks).unwrap();

        let moves = run_phase(&mut puzzle, &mut TraditionalHanoiPhase::new()).unwrap();

        assert_eq!(moves, (1u64 << disks) - 1, "{disks} disks");
        assert!(puzzle.is_solved(), "{disks} disks");
    }
}

#[test]
fn test_traditional_uses_last_two_towers() {
    let mut puzzle = Puzzle::new(6, 4).unwrap();

    let moves = run_phase(&mut puzzle, &mut TraditionalHanoiPhase::new()).unwrap();

    assert_eq!(moves, 15);
    assert!(puzzle.is_solved());
    assert!(puzzle.snapshot()[1..4].iter().all(Vec::is_empty));
}

#[test]
fn test_iteration_count_limits() {
    assert_eq!(traditional::iteration_count(0).unwrap(), 0);
    assert_eq!(traditional::iteration_count(3).unwrap(), 7);
    assert_eq!(traditional::iteration_count(40).unwrap(), (1u64 << 40) - 1);
    assert_eq!(traditional::iteration_count(64).unwrap(), u64::MAX);
    assert_eq!(
        traditional::iteration_count(65).unwrap_err(),
        HanoiError::MoveCountOverflow(65)
    );
}

#[test]
fn test_shift_and_stack_on_empty_source_is_noop() {
    let mut puzzle = Puzzle::new(5, 3).unwrap();
    run_phase(&mut puzzle, &mut ShiftAndStackPhase::new()).unwrap();

    let moves = run_phase(&mut puzzle, &mut ShiftAndStackPhase::new()).unwrap();

    assert_eq!(moves, 0);
    assert!(puzzle.is_solved());
}
