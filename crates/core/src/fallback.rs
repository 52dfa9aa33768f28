//! Behaviour when the raw-mode selector cannot run.
//!
//! [`Capabilities`] decides up front whether a session can be interactive at
//! all. When it cannot, the engine takes the default without asking. When the
//! terminal looked usable but raw mode still could not be acquired, the
//! numbered plain-text prompts here are used instead.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ConfirmDefault;

const TERM_ENV: &str = "TERM";
const DUMB_TERMINAL: &str = "dumb";

/// What the host terminal can do for the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub stdin_tty: bool,
    pub output_tty: bool,
    pub raw_mode_available: bool,
}

impl Capabilities {
    /// Probes stdin, the given output stream and the raw-mode capability.
    pub fn probe<T: IsTerminal>(output: &T) -> Self {
        let capabilities = Self {
            stdin_tty: io::stdin().is_terminal(),
            output_tty: output.is_terminal(),
            raw_mode_available: raw_mode_available(),
        };
        debug!("Probed terminal capabilities: {capabilities:?}");
        capabilities
    }

    #[must_use]
    pub fn interactive() -> Self {
        Self {
            stdin_tty: true,
            output_tty: true,
            raw_mode_available: true,
        }
    }

    #[must_use]
    pub fn non_interactive() -> Self {
        Self {
            stdin_tty: false,
            output_tty: false,
            raw_mode_available: false,
        }
    }

    #[must_use]
    pub fn is_tty(&self) -> bool {
        self.stdin_tty && self.output_tty
    }

    /// True when the session should return its default without prompting.
    #[must_use]
    pub fn should_short_circuit(&self) -> bool {
        !self.is_tty() || !self.raw_mode_available
    }
}

fn raw_mode_available() -> bool {
    let dumb = env::var(TERM_ENV).is_ok_and(|term| term == DUMB_TERMINAL);
    !dumb && crossterm::terminal::size().is_ok()
}

/// Parses a 1-based answer to the numbered prompt into a 0-based index.
///
/// # Errors
///
/// Returns [`Error::InvalidFallbackInput`] for non-numeric or out of range
/// answers.
pub fn parse_choice(answer: &str, option_count: usize) -> Result<usize> {
    match answer.trim().parse::<usize>() {
        Ok(number) if (1..=option_count).contains(&number) => Ok(number - 1),
        _ => Err(Error::invalid_fallback_input(answer.trim(), option_count)),
    }
}

/// Lists the options as `1. option` ... `N. option` and reads a number.
///
/// Returns `None` when the user enters nothing, input ends, or the terminal
/// fails. Invalid answers are reported and asked again.
pub fn prompt_numbered<R, W, S>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    options: &[S],
) -> Option<usize>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    match numbered_prompt(input, output, prompt, options) {
        Ok(choice) => choice,
        Err(e) => {
            warn!("Plain-text menu prompt failed: {e}");
            None
        }
    }
}

fn numbered_prompt<R, W, S>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    options: &[S],
) -> Result<Option<usize>>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    writeln!(output, "{prompt}")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option.as_ref())?;
    }

    loop {
        write!(output, "Choose (1-{}): ", options.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        match parse_choice(answer, options.len()) {
            Ok(index) => return Ok(Some(index)),
            Err(e) => {
                debug!("Rejected plain-text answer: {e}");
                writeln!(output, "{e}")?;
            }
        }
    }
}

/// Asks a `(y/n)` question on a line-buffered terminal.
///
/// An empty answer takes `default`; end of input or a terminal failure
/// declines.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> bool {
    match yes_no_prompt(input, output, prompt, default) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Plain-text confirmation prompt failed: {e}");
            false
        }
    }
}

fn yes_no_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    loop {
        write!(output, "{prompt} (y/n) [{}]: ", ConfirmDefault::from(default))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }

        match answer.parse::<ConfirmDefault>() {
            Ok(answer) => return Ok(answer.into()),
            Err(_) => writeln!(output, "Please answer y or n.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_numbered(input: &str, options: &[&str]) -> (Option<usize>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let choice = prompt_numbered(&mut reader, &mut output, "Pick one", options);
        (choice, String::from_utf8(output).unwrap())
    }

    fn run_yes_no(input: &str, default: bool) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = prompt_yes_no(&mut reader, &mut output, "proceed?", default);
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_short_circuit_rules() {
        assert!(!Capabilities::interactive().should_short_circuit());
        assert!(Capabilities::non_interactive().should_short_circuit());

        let no_output = Capabilities {
            output_tty: false,
            ..Capabilities::interactive()
        };
        assert!(no_output.should_short_circuit());

        let no_raw_mode = Capabilities {
            raw_mode_available: false,
            ..Capabilities::interactive()
        };
        assert!(no_raw_mode.is_tty());
        assert!(no_raw_mode.should_short_circuit());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3).unwrap(), 0);
        assert_eq!(parse_choice(" 3 ", 3).unwrap(), 2);
        assert!(matches!(
            parse_choice("4", 3),
            Err(Error::InvalidFallbackInput { ref input, max: 3 }) if input == "4"
        ));
        assert!(parse_choice("0", 3).is_err());
        assert!(parse_choice("two", 3).is_err());
        assert!(parse_choice("-1", 3).is_err());
    }

    #[test]
    fn test_numbered_prompt_lists_options() {
        let (choice, output) = run_numbered("2\n", &["alpha", "beta", "gamma"]);
        assert_eq!(choice, Some(1));
        assert!(output.starts_with("Pick one\n1. alpha\n2. beta\n3. gamma\nChoose (1-3): "));
    }

    #[test]
    fn test_numbered_prompt_reprompts_until_valid() {
        let (choice, output) = run_numbered("x\n9\n3\n", &["alpha", "beta", "gamma"]);
        assert_eq!(choice, Some(2));
        assert_eq!(output.matches("Choose (1-3): ").count(), 3);
        assert!(output.contains("Invalid choice `x`"));
        assert!(output.contains("Invalid choice `9`"));
    }

    #[test]
    fn test_numbered_prompt_empty_input_cancels() {
        assert_eq!(run_numbered("\n", &["alpha"]).0, None);
    }

    #[test]
    fn test_numbered_prompt_end_of_input_cancels() {
        assert_eq!(run_numbered("", &["alpha"]).0, None);
        assert_eq!(run_numbered("nope\n", &["alpha"]).0, None);
    }

    #[test]
    fn test_yes_no_answers() {
        assert!(run_yes_no("y\n", false).0);
        assert!(!run_yes_no("no\n", true).0);
    }

    #[test]
    fn test_yes_no_empty_takes_default() {
        let (answer, output) = run_yes_no("\n", true);
        assert!(answer);
        assert_eq!(output, "proceed? (y/n) [y]: ");
        assert!(!run_yes_no("\n", false).0);
    }

    #[test]
    fn test_yes_no_reprompts_and_declines_at_end_of_input() {
        let (answer, output) = run_yes_no("maybe\n", true);
        assert!(!answer);
        assert!(output.contains("Please answer y or n."));
    }
}
