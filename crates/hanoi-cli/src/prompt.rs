//! Line-oriented prompts for the tower and disk counts.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Answer to a count prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptReply {
    Value(usize),
    Quit,
}

/// Wording of one prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptText {
    pub prompt: &'static str,
    pub not_a_number: &'static str,
    pub out_of_range: &'static str,
}

pub const TOWERS: PromptText = PromptText {
    prompt: "Enter Number of Towers:",
    not_a_number: "Bad Number of Towers.   Try again or type QUIT.",
    out_of_range: "Bad Number of Towers Entered.  Try Again.",
};

pub const DISKS: PromptText = PromptText {
    prompt: "Enter Number of Disks:",
    not_a_number: "Bad Number of Disks.   Try again or type QUIT.",
    out_of_range: "Bad Number of Discs Entered.  Try Again.",
};

pub const QUIT_MESSAGE: &str = "Quitting...  Bye!";

/// Returns true for `Q` or `QUIT` in any case.
pub fn is_quit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// Prompts until a count inside `range` is entered or the user quits.
///
/// End of input counts as quitting.
pub fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &PromptText,
    range: &RangeInclusive<usize>,
) -> io::Result<PromptReply> {
    let mut line = String::new();
    loop {
        write!(out, "{}", text.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(PromptReply::Quit);
        }
        if is_quit(&line) {
            return Ok(PromptReply::Quit);
        }

        // Negative numbers parse, so they are reported as out of range.
        match line.trim().parse::<i64>() {
            Err(_) => writeln!(out, "{}", text.not_a_number)?,
            Ok(value) => match usize::try_from(value) {
                Ok(value) if range.contains(&value) => return Ok(PromptReply::Value(value)),
                _ => writeln!(out, "{}", text.out_of_range)?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str, text: &PromptText) -> (PromptReply, String) {
        let mut input = Cursor::new(input.as_bytes());
        let mut out = Vec::new();
        let reply = prompt_count(&mut input, &mut out, text, &(5..=10)).unwrap();
        (reply, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepts_value_in_range() {
        let (reply, out) = ask("7\n", &TOWERS);
        assert_eq!(reply, PromptReply::Value(7));
        assert_eq!(out, "Enter Number of Towers:");
    }

    #[test]
    fn test_retries_after_bad_input() {
        let (reply, out) = ask("abc\n11\n-5\n 5 \n", &TOWERS);

        assert_eq!(reply, PromptReply::Value(5));
        let expected = [
            "Enter Number of Towers:Bad Number of Towers.   Try again or type QUIT.",
            "Enter Number of Towers:Bad Number of Towers Entered.  Try Again.",
            "Enter Number of Towers:Bad Number of Towers Entered.  Try Again.",
            "Enter Number of Towers:",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_disk_prompt_wording() {
        let (_, out) = ask("x\n50\nq\n", &DISKS);
        assert!(out.contains("Bad Number of Disks.   Try again or type QUIT."));
        assert!(out.contains("Bad Number of Discs Entered.  Try Again."));
    }

    #[test]
    fn test_quit_words() {
        for word in ["q", "Q", "quit", "QUIT", "  Quit  "] {
            assert!(is_quit(word), "{word}");
        }
        assert!(!is_quit("quitting"));
        assert_eq!(ask("QUIT\n", &TOWERS).0, PromptReply::Quit);
    }

    #[test]
    fn test_end_of_input_quits() {
        assert_eq!(ask("", &TOWERS).0, PromptReply::Quit);
        assert_eq!(ask("abc\n", &TOWERS).0, PromptReply::Quit);
    }
}
