//! Stencil - placeholder substitution for text templates
//!
//! This library backs the `stencil` binary. A template is plain text with
//! `${name}` placeholders; resolution assigns each discovered name a value
//! and substitution rewrites the text with every placeholder replaced.
//!
//! # Example
//!
//! ```rust
//! use stencil::fill;
//!
//! let out = fill(
//!     "This test is ${great}",
//!     &[("great".to_string(), "brilliant".to_string())],
//! )
//! .unwrap();
//! assert_eq!(out, "This test is brilliant");
//! ```

pub mod error;
pub mod logger;
pub mod prompt;
pub mod quotes;
pub mod template;
pub mod values;

pub use error::Error;
pub use logger::{Level, Logger};
pub use prompt::{StdinPrompt, ValueSource};
pub use template::{
    apply_explicit, apply_interactive, discover, substitute, validate, TemplateError, VariableMap,
};
pub use values::{ValuesError, ValuesFile};

/// Fill every placeholder in `text` using the supplied `(name, value)` pairs.
///
/// This is the non-interactive convenience entry point: it discovers the
/// placeholders, overlays the pairs (silently skipping names that are not
/// template variables), validates completeness, and substitutes. Callers
/// that need unknown-name warnings or interactive prompting drive the
/// [`template`] operations individually instead.
///
/// # Example
///
/// ```rust
/// use stencil::fill;
///
/// let out = fill(
///     "${greeting}, ${name}!",
///     &[
///         ("greeting".to_string(), "Hello".to_string()),
///         ("name".to_string(), "world".to_string()),
///     ],
/// )
/// .unwrap();
/// assert_eq!(out, "Hello, world!");
/// ```
pub fn fill(text: &str, pairs: &[(String, String)]) -> Result<String, TemplateError> {
    let mut vars = template::discover(text);
    template::apply_explicit(&mut vars, pairs);
    template::validate(&vars)?;
    Ok(template::substitute(text, &vars))
}
