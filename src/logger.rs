//! Invocation-scoped logger
//!
//! One [`Logger`] is built from the CLI verbosity flags and handed to the
//! code that reports progress. Messages go to stderr so prompts and shell
//! redirection of stdout stay clean.

use colored::Colorize;

/// Output level, from `-q` and the repeated `-v` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// No output at all
    Quiet,
    /// Errors, warnings and informational messages
    Normal,
    /// Adds debug messages
    Verbose,
    /// Maximum verbosity
    Debug,
}

/// Logger collaborator for one CLI invocation
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: Level,
}

impl Logger {
    /// Build a logger from the `-v` count and the `-q` flag
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::Quiet
        } else {
            match verbosity {
                0 => Level::Normal,
                1 => Level::Verbose,
                _ => Level::Debug,
            }
        };
        Self { level }
    }

    /// Current output level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Log a fatal or non-recoverable condition
    pub fn error(&self, message: &str) {
        if self.level >= Level::Normal {
            eprintln!("{} {}", "error:".red().bold(), message);
        }
    }

    /// Log a non-fatal anomaly
    pub fn warning(&self, message: &str) {
        if self.level >= Level::Normal {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }

    /// Log an informational message
    pub fn info(&self, message: &str) {
        if self.level >= Level::Normal {
            eprintln!("{}", message);
        }
    }

    /// Log a debug message (shown with `-v` and above)
    pub fn debug(&self, message: &str) {
        if self.level >= Level::Verbose {
            eprintln!("{} {}", "debug:".blue(), message);
        }
    }
}
