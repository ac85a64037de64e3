//! Command line tokenization.
//!
//! Whitespace separates tokens and each special symbol is a token of its
//! own. The resulting [`TokenStream`] is an immutable token array with a
//! cursor and a stack of saved cursor positions for backtracking.

use log::trace;

use crate::ast::ParseResult;
use crate::span::Span;

/// Characters that always form a token by themselves.
pub const SPECIAL_SYMBOLS: [char; 8] = ['[', ']', ',', '=', ':', '"', '!', '#'];

/// Returns true if `c` is a special symbol.
#[must_use]
pub fn is_special(c: char) -> bool {
    SPECIAL_SYMBOLS.contains(&c)
}

/// A token and where it sits in the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token text.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Splits a line into tokens.
#[must_use]
pub fn tokenize(line: &str) -> TokenStream {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() || is_special(c) {
            if let Some(start) = word_start.take() {
                tokens.push(Token::new(&line[start..i], Span::new(start, i)));
            }
            if is_special(c) {
                let end = i + c.len_utf8();
                tokens.push(Token::new(&line[i..end], Span::new(i, end)));
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::new(&line[start..], Span::new(start, line.len())));
    }

    TokenStream::new(tokens)
}

/// Tokens plus a cursor with push/pop/restore backtracking.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    saved: Vec<usize>,
}

impl TokenStream {
    /// Creates a stream positioned at the first token.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            saved: Vec::new(),
        }
    }

    /// All tokens, consumed or not.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Current cursor index.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of saved cursor positions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns true when every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Consumes the next token, appending its span to `out`.
    pub fn consume(&mut self, out: &mut Vec<Span>) -> Option<String> {
        let token = self.tokens.get(self.cursor)?;
        out.push(token.span);
        self.cursor += 1;
        Some(token.text.clone())
    }

    /// Saves the cursor.
    pub fn push(&mut self) {
        self.saved.push(self.cursor);
    }

    /// Discards the most recently saved cursor.
    pub fn pop(&mut self) {
        self.saved.pop();
    }

    /// Rewinds to the most recently saved cursor without discarding it.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.last() {
            self.cursor = *saved;
        }
    }

    /// Moves the cursor back to the first token and drops saved cursors.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.saved.clear();
    }

    /// Runs a speculative parse.
    ///
    /// On `Fail`, or on `Epsilon` after consuming tokens, the cursor is
    /// rewound to where it was. Nested attempts are fine.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.push();
        let start = self.cursor;
        let result = f(self);
        let rewind = match &result {
            ParseResult::Success(_) => false,
            ParseResult::Epsilon => self.cursor != start,
            ParseResult::Fail => true,
        };
        if rewind {
            trace!("backtrack {} -> {start}", self.cursor);
            self.restore();
        }
        self.pop();
        result
    }
}
