//! Token types for documentation comment text
//!
//!     A doc comment body is split into a flat, ordered sequence of tokens. There are
//!     exactly three kinds and every one of them keeps the raw slice of source it came
//!     from, so the sequence can always be turned back into the original text.
//!
//! Token Kinds
//!
//!         - Text: a maximal run of characters containing no marker
//!         - LineBreak: `\n` or `\r\n`, kept as written (a bare `\r` is text)
//!         - InlineTag: a `{@name content}` marker plus its parsed [Tag]
//!
//!     Tokens are never mutated once built; nothing in this crate hands out `&mut` access.
//!     Renderers are expected to `match` on [Token] directly; the `is_*`
//!     predicates exist for call sites that only need a yes/no answer.

pub mod tag;

pub use tag::Tag;

use std::fmt;

/// One classified segment of a doc comment
///
/// Deserialization rejects tokens the tokenizer could never produce: a line break other
/// than `\n`/`\r\n`, or an inline tag whose value is not its tag's marker text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TokenRepr")]
pub enum Token {
    /// Literal text between markers
    Text(String),
    /// A line feed, optionally preceded by a carriage return
    LineBreak(String),
    /// An inline tag marker and its parsed tag
    InlineTag { value: String, tag: Tag },
}

/// Error for a deserialized token that breaks a token invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidToken {
    #[error("line break must be \"\\n\" or \"\\r\\n\", got {0:?}")]
    LineBreak(String),
    #[error("inline tag value {value:?} does not match its tag {tag:?}")]
    TagMismatch { value: String, tag: String },
}

/// Unchecked wire shape of [Token]
#[derive(serde::Deserialize)]
enum TokenRepr {
    Text(String),
    LineBreak(String),
    InlineTag { value: String, tag: Tag },
}

impl TryFrom<TokenRepr> for Token {
    type Error = InvalidToken;

    fn try_from(repr: TokenRepr) -> Result<Self, Self::Error> {
        match repr {
            TokenRepr::Text(value) => Ok(Token::Text(value)),
            TokenRepr::LineBreak(value) => match value.as_str() {
                "\n" | "\r\n" => Ok(Token::LineBreak(value)),
                _ => Err(InvalidToken::LineBreak(value)),
            },
            TokenRepr::InlineTag { value, tag } => {
                let marker = tag.to_string();
                if marker == value {
                    Ok(Token::InlineTag { value, tag })
                } else {
                    Err(InvalidToken::TagMismatch { value, tag: marker })
                }
            }
        }
    }
}

/// The kind of a token, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    Text,
    LineBreak,
    InlineTag,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text => write!(f, "text"),
            TokenKind::LineBreak => write!(f, "line-break"),
            TokenKind::InlineTag => write!(f, "inline-tag"),
        }
    }
}

impl Token {
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    pub fn line_break(value: impl Into<String>) -> Self {
        Token::LineBreak(value.into())
    }

    pub fn inline_tag(value: impl Into<String>, tag: Tag) -> Self {
        Token::InlineTag {
            value: value.into(),
            tag,
        }
    }

    /// The exact source text this token was produced from
    pub fn value(&self) -> &str {
        match self {
            Token::Text(value) | Token::LineBreak(value) => value,
            Token::InlineTag { value, .. } => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Token::Text(value) | Token::LineBreak(value) => value,
            Token::InlineTag { value, .. } => value,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::LineBreak(_) => TokenKind::LineBreak,
            Token::InlineTag { .. } => TokenKind::InlineTag,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::LineBreak(_))
    }

    pub fn is_inline_tag(&self) -> bool {
        matches!(self, Token::InlineTag { .. })
    }

    /// The parsed tag, only present for inline tags
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Token::InlineTag { tag, .. } => Some(tag),
            Token::Text(_) | Token::LineBreak(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_display() {
        assert_eq!(format!("{}", TokenKind::Text), "text");
        assert_eq!(format!("{}", TokenKind::LineBreak), "line-break");
        assert_eq!(format!("{}", TokenKind::InlineTag), "inline-tag");
    }

    #[test]
    fn test_text_token() {
        let token = Token::text("hello");
        assert_eq!(token.value(), "hello");
        assert_eq!(token.kind(), TokenKind::Text);
        assert!(token.is_text());
        assert!(!token.is_line_break());
        assert!(!token.is_inline_tag());
        assert!(token.tag().is_none());
    }

    #[test]
    fn test_line_break_token() {
        let token = Token::line_break("\r\n");
        assert_eq!(token.value(), "\r\n");
        assert_eq!(token.kind(), TokenKind::LineBreak);
        assert!(token.is_line_break());
        assert!(token.tag().is_none());
    }

    #[test]
    fn test_inline_tag_token() {
        let token = Token::inline_tag("{@link Foo}", Tag::new("link", " Foo"));
        assert_eq!(token.value(), "{@link Foo}");
        assert_eq!(token.kind(), TokenKind::InlineTag);
        assert!(token.is_inline_tag());
        assert_eq!(token.tag(), Some(&Tag::new("link", " Foo")));
        assert_eq!(token.into_value(), "{@link Foo}");
    }

    #[test]
    fn test_token_serde_shape() {
        let token = Token::inline_tag("{@a}", Tag::new("a", ""));
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r#"{"InlineTag":{"value":"{@a}","tag":{"name":"a","content":""}}}"#
        );
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);

        let json = serde_json::to_string(&Token::text("x")).unwrap();
        assert_eq!(json, r#"{"Text":"x"}"#);
    }

    #[test]
    fn test_deserialize_rejects_tag_mismatch() {
        let json = r#"{"InlineTag":{"value":"{@x}","tag":{"name":"y","content":""}}}"#;
        let err = serde_json::from_str::<Token>(json).unwrap_err();
        assert!(err.to_string().contains("does not match its tag"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_bad_line_break() {
        let err = serde_json::from_str::<Token>(r#"{"LineBreak":"\r"}"#).unwrap_err();
        assert!(err.to_string().contains("line break must be"), "{err}");

        let token: Token = serde_json::from_str(r#"{"LineBreak":"\r\n"}"#).unwrap();
        assert_eq!(token, Token::line_break("\r\n"));
    }
}
