use std::path::PathBuf;

use anyhow::{bail, Result};

#[derive(Debug, Default, clap::Parser)]
#[command(
    version,
    name = "hanoi",
    about = "Solve the Tower of Hanoi on 5 to 10 towers",
    args_override_self = true
)]
pub struct Args {
    /// Number of towers; prompted for when missing or out of range.
    #[arg(long)]
    pub towers: Option<usize>,

    /// Number of disks; prompted for when missing or out of range.
    #[arg(long)]
    pub disks: Option<usize>,

    /// Configuration file, instead of `hanoi.toml` in the working directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not print a line per move.
    #[arg(long, short)]
    pub quiet: bool,

    /// Print the board after every move.
    #[arg(long, conflicts_with = "quiet")]
    pub board_each_move: bool,
}

pub fn validate_args(args: &Args) -> Result<()> {
    if let Some(path) = &args.config {
        if !path.is_file() {
            bail!("configuration file {} does not exist", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "hanoi",
            "--towers",
            "6",
            "--disks",
            "15",
            "--board-each-move",
        ])
        .unwrap();

        assert_eq!(args.towers, Some(6));
        assert_eq!(args.disks, Some(15));
        assert!(args.board_each_move);
        assert!(!args.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_board_each_move() {
        assert!(Args::try_parse_from(["hanoi", "-q", "--board-each-move"]).is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/hanoi.toml")),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());
        assert!(validate_args(&Args::default()).is_ok());
    }
}
