//! Tokenizer for documentation comment text
//!
//!     Splits a doc comment body into [Text](Token::Text), [LineBreak](Token::LineBreak) and
//!     [InlineTag](Token::InlineTag) tokens in a single left-to-right scan.
//!
//! Markers
//!
//!     Two marker classes are combined into one alternation so matches come out in position
//!     order:
//!
//!         1. inline tag: `{@`, an ASCII letter, anything but `}`, then `}`
//!         2. line break: `\n` or `\r\n` (never a bare `\r`)
//!
//!     The inline tag alternative is listed first. A tag that spans a newline is therefore
//!     a single InlineTag token and the newline inside it never becomes a LineBreak. Tags do
//!     not nest: the first `}` after the opening closes the marker.
//!
//!     Everything between markers is emitted as one Text token per run, so the values of the
//!     produced tokens always concatenate back to the input.
//!
//! Tag Decomposition
//!
//!     Once the splitter has found an inline tag, a second anchored pattern splits it into
//!     name and content. Anything the splitter accepts, the tag pattern accepts too. If that
//!     ever stops holding, the two patterns have drifted apart and tokenization panics: it is
//!     a bug in this module, not bad input.

use super::token::{Tag, Token};
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Captures, Regex};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Finds the next inline tag (group 1) or line break (group 2)
static TOKEN_SPLITTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\{@[[:alpha:]][^}]*\})|(\r?\n)").unwrap());

/// Characters that may appear in a tag name.
///
/// Space, line and paragraph separators end a name, except the no-break spaces U+00A0,
/// U+2007 and U+202F. ASCII controls `\t \n \x0B \x0C \r` and U+001C..U+001F end it too.
/// U+0085 does not.
const TAG_NAME_CHAR: &str =
    r"(?:[^\t\n\x0B\x0C\r\x1C-\x1F\p{Zs}\p{Zl}\p{Zp}]|[\x{A0}\x{2007}\x{202F}])";

/// Splits an already matched inline tag into name (group 1) and content (group 2)
static INLINE_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?s)\A\{{@({TAG_NAME_CHAR}+)(.*)\}}\z")).unwrap()
});

/// Tokenize a doc comment body.
///
/// Never fails on input: text that only looks like a tag (`{@}`, `{@ x}`, `{@a` without a
/// closing brace) is plain text.
///
/// ```ignore
/// let tokens = tokenize("see {@link Foo#bar} now");
/// assert_eq!(tokens[1].tag().unwrap().name(), "link");
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Tokenizer::new(source).collect();
    debug!(
        input_len = source.len(),
        token_count = tokens.len(),
        "tokenized doc comment"
    );
    tokens
}

/// Lazy token stream over a doc comment body
///
/// Yields the same sequence as [tokenize]. The scan keeps a byte cursor into the source and
/// advances it past each marker, so it never recurses no matter how many markers there are.
#[derive(Debug)]
pub struct Tokenizer<'s> {
    source: &'s str,
    markers: CaptureMatches<'static, 's>,
    cursor: usize,
    /// Marker found after a leading text run, emitted on the next call
    pending: Option<Token>,
    exhausted: bool,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Self {
        let splitter: &'static Regex = &TOKEN_SPLITTER;
        Tokenizer {
            source,
            markers: splitter.captures_iter(source),
            cursor: 0,
            pending: None,
            exhausted: false,
        }
    }

    fn marker_token(caps: &Captures<'s>, value: &str) -> Token {
        if caps.get(1).is_some() {
            parse_inline_tag(value)
        } else {
            Token::line_break(value)
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.exhausted {
            return None;
        }

        match self.markers.next() {
            Some(caps) => {
                let marker = caps.get(0).expect("group 0 is always present in a match");
                let token = Self::marker_token(&caps, marker.as_str());
                trace!(kind = %token.kind(), range = ?marker.range(), "marker");

                let leading = (marker.start() > self.cursor)
                    .then(|| Token::text(&self.source[self.cursor..marker.start()]));
                self.cursor = marker.end();

                match leading {
                    Some(text) => {
                        self.pending = Some(token);
                        Some(text)
                    }
                    None => Some(token),
                }
            }
            None => {
                self.exhausted = true;
                (self.cursor < self.source.len()).then(|| Token::text(&self.source[self.cursor..]))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Decompose a marker the splitter classified as an inline tag.
///
/// Panics if the tag pattern rejects it, which means the two patterns disagree.
pub(crate) fn parse_inline_tag(value: &str) -> Token {
    let Some(parts) = INLINE_TAG_PATTERN.captures(value) else {
        panic!("inline tag pattern out of sync with token splitter: -->{value}<--");
    };
    Token::inline_tag(value, Tag::new(&parts[1], &parts[2]))
}
