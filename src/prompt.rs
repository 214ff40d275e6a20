//! Interactive value sources
//!
//! The resolver asks a [`ValueSource`] for each variable left unset after
//! explicit values were applied. The production source prompts on the
//! console; tests substitute a scripted source.

use std::io::{self, BufRead, Write};

/// Provider of values for unresolved template variables.
///
/// Called once per unset variable, in first-appearance order.
/// Implementations may block.
pub trait ValueSource {
    /// Produce the value to bind to `name`.
    fn value_for(&mut self, name: &str) -> io::Result<String>;
}

/// Prompts `name=` on stdout and reads one line from stdin.
///
/// Only the line terminator is stripped from the answer; interior and
/// leading/trailing whitespace is preserved, and an empty line binds the
/// empty string.
pub struct StdinPrompt;

impl ValueSource for StdinPrompt {
    fn value_for(&mut self, name: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}=", name)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("stdin closed while prompting for '{}'", name),
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
