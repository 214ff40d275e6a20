//! Error types for the command-line pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateError;
use crate::values::ValuesError;

/// Errors surfaced by one invocation of the CLI.
///
/// Every variant is fatal; the process logs the message and exits with a
/// non-zero status. Unknown `-t` names are deliberately not represented
/// here: they are warnings, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The template file is missing or unreadable
    #[error("cannot read template file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written
    #[error("cannot write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading an interactive value failed
    #[error("failed to read interactive input: {0}")]
    Prompt(#[source] io::Error),

    /// The values file could not be loaded
    #[error(transparent)]
    Values(#[from] ValuesError),

    /// Variables were left unset after resolution
    #[error(transparent)]
    Template(#[from] TemplateError),
}
