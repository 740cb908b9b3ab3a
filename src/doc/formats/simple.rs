//! Simple bracketed token format
//!
//! Renders one item per token, mirroring the source layout:
//!
//!     <text:see ><inline-tag:link| Foo#bar><text: now><line-break:\n>
//!     <text:next line>
//!
//! Each line break item is followed by a real newline so the output keeps the comment's
//! line structure. Control characters inside items are escaped.

use super::registry::{FormatError, Formatter};
use crate::doc::token::Token;

/// Render tokens in the simple format
pub fn to_simple_str(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        match token {
            Token::Text(value) => {
                result.push_str(&format!("<text:{}>", escape(value)));
            }
            Token::LineBreak(value) => {
                result.push_str(&format!("<line-break:{}>\n", escape(value)));
            }
            Token::InlineTag { tag, .. } => {
                result.push_str(&format!(
                    "<inline-tag:{}|{}>",
                    escape(tag.name()),
                    escape(tag.content())
                ));
            }
        }
    }
    result
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The `simple` format
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(to_simple_str(tokens))
    }

    fn description(&self) -> &str {
        "One bracketed item per token, line breaks kept"
    }
}
