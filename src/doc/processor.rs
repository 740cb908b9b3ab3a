//! Processing API for doc comment text
//!
//! One call from a comment body to formatted output:
//!
//! ```rust,ignore
//! use doc_tokens::doc::processor::process;
//!
//! let output = process("see {@link Foo}", "simple")?;
//! assert_eq!(output, "<text:see ><inline-tag:link| Foo>");
//! ```
//!
//! Format names are looked up in the default [FormatRegistry]; see [available_formats].

use crate::doc::formats::{FormatError, FormatRegistry};
use crate::doc::tokenizer::tokenize;
use tracing::debug;

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Unknown format '{name}' (available: {})", .available.join(", "))]
    UnknownFormat {
        name: String,
        available: Vec<String>,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tokenize `source` and serialize the tokens in `format`
pub fn process(source: &str, format: &str) -> Result<String, ProcessingError> {
    process_with_registry(source, format, &FormatRegistry::with_defaults())
}

/// Like [process], resolving the format in a caller-provided registry
pub fn process_with_registry(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let formatter = registry
        .get(format)
        .ok_or_else(|| ProcessingError::UnknownFormat {
            name: format.to_string(),
            available: registry.list_formats(),
        })?;
    debug!(format = %format, "resolved output format");

    let tokens = tokenize(source);
    Ok(formatter.serialize(&tokens)?)
}

/// Get all available format names
pub fn available_formats() -> Vec<String> {
    FormatRegistry::with_defaults().list_formats()
}
