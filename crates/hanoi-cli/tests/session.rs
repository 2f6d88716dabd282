use std::io::{Cursor, Write};

use hanoi_cli::args::Args;
use hanoi_cli::{run, Outcome};

fn session(args: &Args, input: &str) -> (Outcome, String) {
    let (outcome, out) = run(args, Cursor::new(input.as_bytes().to_vec()), Vec::new()).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_prompted_session_solves() {
    let (outcome, out) = session(&Args::default(), "5\n3\n");

    assert_eq!(outcome, Outcome::Solved { moves: 6 });
    assert!(out.contains("Enter Number of Towers:Enter Number of Disks:"));
    assert!(out.contains("MOVING Disk:1 From Tower:1 To Tower:2\n"));
    assert!(out.contains("MOVING Disk:1 From Tower:2 To Tower:5\n"));
    assert_eq!(out.matches("Towers: 5  Disks: 3").count(), 2);
    assert!(out.contains("Solved with Shift and Stack in 6 moves."));
}

#[test]
fn test_quit_at_tower_prompt() {
    let (outcome, out) = session(&Args::default(), "q\n");

    assert_eq!(outcome, Outcome::Quit);
    assert!(out.ends_with("Quitting...  Bye!\n"));
    assert!(!out.contains("MOVING"));
}

#[test]
fn test_quit_at_disk_prompt_after_bad_input() {
    let (outcome, out) = session(&Args::default(), "4\nseven\n6\n99\nQUIT\n");

    assert_eq!(outcome, Outcome::Quit);
    assert!(out.contains("Bad Number of Towers Entered.  Try Again."));
    assert!(out.contains("Bad Number of Towers.   Try again or type QUIT."));
    assert!(out.contains("Bad Number of Discs Entered.  Try Again."));
}

#[test]
fn test_end_of_input_is_quit() {
    let (outcome, _) = session(&Args::default(), "");
    assert_eq!(outcome, Outcome::Quit);
}

#[test]
fn test_arguments_skip_prompts_and_quiet_hides_moves() {
    let args = Args {
        towers: Some(6),
        disks: Some(15),
        quiet: true,
        ..Args::default()
    };

    let (outcome, out) = session(&args, "");

    assert!(matches!(outcome, Outcome::Solved { .. }));
    assert!(!out.contains("Enter Number"));
    assert!(!out.contains("MOVING"));
    assert!(out.contains("Solved with Buffer/Unbuffer"));
}

#[test]
fn test_out_of_range_argument_falls_back_to_prompt() {
    let args = Args {
        towers: Some(12),
        ..Args::default()
    };

    let (outcome, out) = session(&args, "5\n4\n");

    assert_eq!(outcome, Outcome::Solved { moves: 7 });
    assert!(out.contains("Bad Number of Towers Entered.  Try Again.\nEnter Number of Towers:"));
}

#[test]
fn test_config_file_preset_and_display() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
environment_mode = "full_assert"

[display]
show_moves = true
show_board_each_move = true

[puzzle]
towers = 5
disks = 3
"#
    )
    .unwrap();
    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let (outcome, out) = session(&args, "");

    assert_eq!(outcome, Outcome::Solved { moves: 6 });
    // Before, after, and one board per move.
    assert_eq!(out.matches("Towers: 5  Disks: 3").count(), 2 + 6);
}

#[test]
fn test_exit_codes() {
    use std::process::ExitCode;

    assert_eq!(Outcome::Solved { moves: 1 }.exit_code(), ExitCode::SUCCESS);
    assert_eq!(Outcome::Quit.exit_code(), ExitCode::from(1));
    assert_eq!(
        Outcome::Failed {
            reason: String::new()
        }
        .exit_code(),
        ExitCode::from(2)
    );
}

#[test]
fn test_yaml_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "display:\n  show_moves: false\npuzzle:\n  towers: 5\n  disks: 4"
    )
    .unwrap();
    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let (outcome, out) = session(&args, "");

    assert_eq!(outcome, Outcome::Solved { moves: 7 });
    assert!(!out.contains("MOVING"));
}
