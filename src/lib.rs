//! # doc-tokens
//!
//! Tokenizer for documentation comment text.
//!
//! A doc comment body (already stripped of its comment delimiters) is split into a flat,
//! ordered sequence of [Token]s: literal text runs, line breaks, and inline tags such as
//! `{@link Foo#bar}`. The values of the tokens always concatenate back to the input.
//!
//! ```rust,ignore
//! use doc_tokens::{tokenize, Token};
//!
//! for token in tokenize("see {@link Foo#bar}\nnow") {
//!     match token {
//!         Token::Text(text) => print!("{text}"),
//!         Token::LineBreak(_) => println!(),
//!         Token::InlineTag { tag, .. } => print!("[{}]", tag.content().trim()),
//!     }
//! }
//! ```
//!
//! Rendering the tokens, and deciding what a tag name means, is left to the caller. The
//! [formats](doc::formats) module has a few serializations for inspection and tooling.

pub mod doc;

pub use doc::formats::detokenize;
pub use doc::token::{InvalidToken, Tag, Token, TokenKind};
pub use doc::tokenizer::{tokenize, Tokenizer};
