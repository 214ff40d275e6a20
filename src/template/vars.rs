//! Variable mapping for discovered placeholders

use thiserror::Error;

/// Errors raised while resolving template variables
#[derive(Debug, Error)]
pub enum TemplateError {
    /// One or more discovered variables have no value after resolution
    #[error("the following template variables are not set: {}", names.join(", "))]
    UnsetVariables { names: Vec<String> },
}

/// Ordered mapping from variable name to an optional resolved value.
///
/// Keys are kept in first-appearance order, which drives interactive
/// prompting order and the name list carried by
/// [`TemplateError::UnsetVariables`]. An unset value is distinct from an
/// empty-string value.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    entries: Vec<(String, Option<String>)>,
}

impl VariableMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of distinct variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no variables were discovered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a name as unset. Repeated occurrences of the same name
    /// collapse to the first entry.
    pub fn insert_unset(&mut self, name: &str) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), None));
        }
    }

    /// Check whether a name was discovered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Assign a value to a known name, overwriting any prior value.
    ///
    /// Returns `false` if the name was never discovered; the mapping is left
    /// untouched in that case.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Resolved value for a name, if the name is known and set
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// True when the name is known and has a value bound
    pub fn is_set(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// All variable names, in first-appearance order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Names still without a value, in first-appearance order
    pub fn unset_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.clone())
            .collect()
    }
}
