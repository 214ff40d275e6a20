//! Template resolver
//!
//! This module implements the pipeline that turns a raw template into its
//! resolved form: discover the `${name}` placeholders, overlay values from
//! the caller (and optionally an interactive value source), check that
//! nothing is left unset, then substitute.
//!
//! # Example
//!
//! ```text
//! // template text
//! listen = ${host}:${port}
//!
//! // after resolution with host=example.org, port=8080
//! listen = example.org:8080
//! ```

mod resolver;
mod vars;

pub use resolver::{apply_explicit, apply_interactive, discover, substitute, validate};
pub use vars::{TemplateError, VariableMap};
