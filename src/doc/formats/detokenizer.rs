//! Detokenizer for doc comment tokens
//!
//! Converts a token sequence back into the text it was tokenized from. Every token keeps its
//! raw source slice, so this is a plain concatenation. Useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Renderers that rewrite a few tags and pass everything else through untouched

use super::registry::{FormatError, Formatter};
use crate::doc::token::Token;

/// Trait for converting a token back to its source text
pub trait ToDocString {
    fn to_doc_string(&self) -> String;
}

impl ToDocString for Token {
    fn to_doc_string(&self) -> String {
        self.value().to_string()
    }
}

/// Detokenize a token sequence into a string
///
/// ```ignore
/// let source = "see {@link Foo}\nthen";
/// assert_eq!(detokenize(&tokenize(source)), source);
/// ```
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.value().len()).sum());
    for token in tokens {
        result.push_str(token.value());
    }
    result
}

/// The `raw` format: tokens back to source text
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn name(&self) -> &str {
        "raw"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }

    fn description(&self) -> &str {
        "Source text reassembled from the tokens"
    }
}
