//! Values file support
//!
//! Variables can be supplied in bulk from a TOML file instead of repeated
//! `-t` flags. Explicit `-t` pairs are applied after the file, so they
//! override it.
//!
//! ```toml
//! [values]
//! host = "example.org"
//! port = "8080"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a values file
#[derive(Error, Debug)]
pub enum ValuesError {
    #[error("failed to read values file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse values TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML structure for deserializing a values file
#[derive(Deserialize)]
struct TomlValues {
    values: BTreeMap<String, String>,
}

/// A set of variable values loaded from a TOML file
#[derive(Debug, Clone, Default)]
pub struct ValuesFile {
    /// Value mappings: variable name -> value, in lexicographic key order
    pub values: BTreeMap<String, String>,
}

impl ValuesFile {
    /// Load values from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ValuesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load values from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ValuesError> {
        let parsed: TomlValues = toml::from_str(content)?;
        Ok(ValuesFile {
            values: parsed.values,
        })
    }

    /// The values as ordered `(name, value)` pairs
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
