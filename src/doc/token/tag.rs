//! Inline tag data
//!
//!     A tag is the parsed form of an inline marker such as `{@link Foo#bar}`. It holds the
//!     two surface fields only: the name right after `{@` and the raw content up to the
//!     closing brace. What a name means is decided by the renderer, not here.

use std::fmt;

/// An inline documentation tag: `{@name content}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tag {
    name: String,
    content: String,
}

impl Tag {
    /// Create a tag. Any string is accepted for either field, including empty ones.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The identifier immediately following `{@`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything between the name and the closing `}`, leading whitespace included
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Renders the marker form, which is the exact source text for tokenizer-produced tags.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{@{}{}}}", self.name, self.content)
    }
}
