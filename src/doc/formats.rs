//! Output format implementations for token streams
//!
//! This module contains the formats a token sequence can be serialized to:
//! - simple: one bracketed item per token, readable in a terminal
//! - json: serde representation of the tokens
//! - raw: the tokens turned back into source text (detokenizer)

pub mod detokenizer;
pub mod json;
pub mod registry;
pub mod simple;

pub use detokenizer::{detokenize, RawFormatter, ToDocString};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use simple::{to_simple_str, SimpleFormatter};
