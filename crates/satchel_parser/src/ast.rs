//! Parser combinators over a [`TokenStream`].
//!
//! Every combinator reports one of three outcomes. `Success` carries a node,
//! `Epsilon` means the combinator matched nothing and that was acceptable,
//! and `Fail` means it did not match. A failing combinator leaves the cursor
//! where it found it.

use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::span::Span;
use crate::tokenizer::TokenStream;

/// The outcome of one combinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult<T> {
    /// Matched and produced a node.
    Success(T),
    /// Matched nothing, acceptably.
    Epsilon,
    /// Did not match.
    Fail,
}

impl<T> ParseResult<T> {
    /// Returns true for `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for `Fail`.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Maps the node of a `Success`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            Self::Success(value) => ParseResult::Success(f(value)),
            Self::Epsilon => ParseResult::Epsilon,
            Self::Fail => ParseResult::Fail,
        }
    }

    /// The node of a `Success`.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Epsilon | Self::Fail => None,
        }
    }
}

// =============================================================================
// Leaf nodes
// =============================================================================

/// A base-10 integer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integer {
    /// Parsed value.
    pub value: i64,
    /// Source location.
    pub span: Span,
}

impl Highlight for Integer {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        out.push(CodeBlock::new(self.span, SyntaxClass::Amount));
    }
}

/// A word token that starts with a letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    /// The word.
    pub text: String,
    /// Source location.
    pub span: Span,
}

/// A keyword token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword {
    /// Source location.
    pub span: Span,
    /// How the keyword is highlighted.
    pub class: SyntaxClass,
}

impl Keyword {
    /// Creates a keyword node.
    #[must_use]
    pub const fn new(span: Span, class: SyntaxClass) -> Self {
        Self { span, class }
    }
}

impl Highlight for Keyword {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        out.push(CodeBlock::new(self.span, self.class));
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Parses an integer. The whole token must be a base-10 integer.
pub fn parse_integer(ts: &mut TokenStream) -> ParseResult<Integer> {
    ts.attempt(|ts| {
        let mut spans = Vec::new();
        let Some(text) = ts.consume(&mut spans) else {
            return ParseResult::Fail;
        };
        match text.parse::<i64>() {
            Ok(value) => ParseResult::Success(Integer {
                value,
                span: spans[0],
            }),
            Err(_) => ParseResult::Fail,
        }
    })
}

/// Parses an identifier: a token whose first character is alphabetic.
pub fn parse_identifier(ts: &mut TokenStream) -> ParseResult<Identifier> {
    ts.attempt(|ts| {
        let mut spans = Vec::new();
        let Some(text) = ts.consume(&mut spans) else {
            return ParseResult::Fail;
        };
        if text.chars().next().is_some_and(char::is_alphabetic) {
            ParseResult::Success(Identifier {
                text,
                span: spans[0],
            })
        } else {
            ParseResult::Fail
        }
    })
}

/// Parses one of `words`, case-insensitively.
pub fn parse_keyword(ts: &mut TokenStream, words: &[&str], class: SyntaxClass) -> ParseResult<Keyword> {
    ts.attempt(|ts| {
        let mut spans = Vec::new();
        match ts.consume(&mut spans) {
            Some(text) if words.iter().any(|w| w.eq_ignore_ascii_case(&text)) => {
                ParseResult::Success(Keyword::new(spans[0], class))
            }
            _ => ParseResult::Fail,
        }
    })
}

/// Parses a sequence of keywords, such as `pick up`, as one keyword node.
pub fn parse_phrase(ts: &mut TokenStream, words: &[&str], class: SyntaxClass) -> ParseResult<Keyword> {
    ts.attempt(|ts| {
        let mut spans = Vec::new();
        for word in words {
            match ts.consume(&mut spans) {
                Some(text) if word.eq_ignore_ascii_case(&text) => {}
                _ => return ParseResult::Fail,
            }
        }
        match Span::covering(&spans) {
            Some(span) => ParseResult::Success(Keyword::new(span, class)),
            None => ParseResult::Fail,
        }
    })
}

/// Parses a special symbol token.
pub fn parse_symbol(ts: &mut TokenStream, symbol: char) -> ParseResult<Span> {
    ts.attempt(|ts| {
        let mut spans = Vec::new();
        match ts.consume(&mut spans) {
            Some(text) if text.len() == symbol.len_utf8() && text.starts_with(symbol) => {
                ParseResult::Success(spans[0])
            }
            _ => ParseResult::Fail,
        }
    })
}

/// Turns `Fail` into `Epsilon`.
pub fn optional<T>(
    ts: &mut TokenStream,
    parser: impl FnOnce(&mut TokenStream) -> ParseResult<T>,
) -> ParseResult<T> {
    match ts.attempt(parser) {
        ParseResult::Fail => ParseResult::Epsilon,
        other => other,
    }
}

/// Collects successes until the parser stops succeeding.
pub fn zero_or_more<T>(
    ts: &mut TokenStream,
    mut parser: impl FnMut(&mut TokenStream) -> ParseResult<T>,
) -> Vec<T> {
    let mut nodes = Vec::new();
    while let ParseResult::Success(node) = ts.attempt(&mut parser) {
        nodes.push(node);
    }
    nodes
}

/// Like [`zero_or_more`], but fails when nothing matched.
pub fn one_or_more<T>(
    ts: &mut TokenStream,
    parser: impl FnMut(&mut TokenStream) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let nodes = zero_or_more(ts, parser);
    if nodes.is_empty() {
        ParseResult::Fail
    } else {
        ParseResult::Success(nodes)
    }
}

/// Succeeds only when no tokens remain.
pub fn parse_end(ts: &TokenStream) -> ParseResult<()> {
    if ts.is_at_end() {
        ParseResult::Success(())
    } else {
        ParseResult::Fail
    }
}
