//! Item metadata: `[life=300, modifier=mighty, equip]`.
//!
//! Metadata can be parsed from plain text with [`parse_metadata`] or from a
//! token stream as a [`MetaClause`]. Both go through the same validation.

use satchel_foundation::{MetaOption, Modifier};
use thiserror::Error;

use crate::ast::{Identifier, ParseResult, optional, parse_identifier, parse_integer, parse_symbol};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::span::Span;
use crate::tokenizer::TokenStream;

/// Maximum number of key/value pairs in one metadata block.
pub const MAX_PAIRS: usize = 16;

/// Metadata validation errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    /// A numeric key got something else.
    #[error("metadata {key} requires a number value, but got: {value}")]
    RequiresNumber {
        /// The key.
        key: String,
        /// The offending value.
        value: String,
    },

    /// A name key got a number or no value.
    #[error("metadata {key} requires a string value, but got: {value}")]
    RequiresString {
        /// The key.
        key: String,
        /// The offending value.
        value: String,
    },

    /// No modifier or cook effect matches the name.
    #[error("{0} is not a valid modifier name")]
    InvalidModifier(String),

    /// Unknown key.
    #[error("{0} is not a valid metadata name")]
    InvalidKey(String),

    /// Too many pairs.
    #[error("Key value pairs max depth exceeded")]
    TooManyPairs,
}

const BARE_VALUE: &str = "true";

/// Parses metadata text. Surrounding brackets are optional.
///
/// # Errors
///
/// Returns a [`MetaError`] for unknown keys, wrongly typed values, unknown
/// modifier names and blocks with more than [`MAX_PAIRS`] pairs.
pub fn parse_metadata(text: &str) -> Result<MetaOption, MetaError> {
    let text = text.trim();
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);

    let pairs: Vec<(String, Option<String>)> = text
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(['=', ':']) {
            Some((key, value)) => (key.trim().to_string(), Some(value.trim().to_string())),
            None => (segment.to_string(), None),
        })
        .collect();

    validate_pairs(&pairs)
}

/// Validates key/value pairs into a [`MetaOption`]. A missing value means
/// boolean `true`.
///
/// # Errors
///
/// See [`parse_metadata`].
pub fn validate_pairs(pairs: &[(String, Option<String>)]) -> Result<MetaOption, MetaError> {
    if pairs.len() > MAX_PAIRS {
        return Err(MetaError::TooManyPairs);
    }

    let mut meta = MetaOption::new();
    for (key, value) in pairs {
        let value = value.as_deref();
        meta = match key.to_lowercase().as_str() {
            "life" => meta.with_life(number(key, value)?),
            "price" => meta.with_price(number(key, value)?),
            "hp" => meta.with_hp(number(key, value)?),
            "equip" => meta.with_equip(value.is_none_or(|v| v.eq_ignore_ascii_case(BARE_VALUE))),
            "modifier" => {
                let name = match value {
                    Some(v) if v.parse::<i64>().is_err() => v,
                    _ => {
                        return Err(MetaError::RequiresString {
                            key: key.clone(),
                            value: value.unwrap_or(BARE_VALUE).to_string(),
                        });
                    }
                };
                let modifier = Modifier::from_prefix(name)
                    .ok_or_else(|| MetaError::InvalidModifier(name.to_string()))?;
                meta.with_modifier(modifier)
            }
            _ => return Err(MetaError::InvalidKey(key.clone())),
        };
    }
    Ok(meta)
}

fn number<T: std::str::FromStr>(key: &str, value: Option<&str>) -> Result<T, MetaError> {
    let value = value.unwrap_or(BARE_VALUE);
    value.parse().map_err(|_| MetaError::RequiresNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Token-level clause
// =============================================================================

/// A metadata value token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaValue {
    /// Value text.
    pub text: String,
    /// Source location.
    pub span: Span,
    /// Whether the value was an integer.
    pub numeric: bool,
}

/// `key` or `key=value` inside a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaPair {
    /// The key.
    pub key: Identifier,
    /// The `=` or `:` separator.
    pub separator: Option<Span>,
    /// The value, if given.
    pub value: Option<MetaValue>,
}

/// A bracketed metadata clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaClause {
    /// Brackets and commas.
    pub delimiters: Vec<Span>,
    /// Pairs in order.
    pub pairs: Vec<MetaPair>,
}

impl MetaClause {
    /// Validates the clause.
    ///
    /// # Errors
    ///
    /// See [`parse_metadata`].
    pub fn to_meta_option(&self) -> Result<MetaOption, MetaError> {
        let pairs: Vec<(String, Option<String>)> = self
            .pairs
            .iter()
            .map(|pair| (pair.key.text.clone(), pair.value.as_ref().map(|v| v.text.clone())))
            .collect();
        validate_pairs(&pairs)
    }
}

impl Highlight for MetaClause {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        for span in &self.delimiters {
            out.push(CodeBlock::new(*span, SyntaxClass::Delimiter));
        }
        for pair in &self.pairs {
            out.push(CodeBlock::new(pair.key.span, SyntaxClass::MetaKey));
            if let Some(separator) = pair.separator {
                out.push(CodeBlock::new(separator, SyntaxClass::Delimiter));
            }
            if let Some(value) = &pair.value {
                let class = if value.numeric {
                    SyntaxClass::MetaValue
                } else {
                    SyntaxClass::MetaConst
                };
                out.push(CodeBlock::new(value.span, class));
            }
        }
    }
}

fn parse_meta_value(ts: &mut TokenStream) -> ParseResult<MetaValue> {
    if let ParseResult::Success(integer) = parse_integer(ts) {
        return ParseResult::Success(MetaValue {
            text: integer.value.to_string(),
            span: integer.span,
            numeric: true,
        });
    }
    parse_identifier(ts).map(|ident| MetaValue {
        text: ident.text,
        span: ident.span,
        numeric: false,
    })
}

fn parse_meta_pair(ts: &mut TokenStream) -> ParseResult<MetaPair> {
    ts.attempt(|ts| {
        let ParseResult::Success(key) = parse_identifier(ts) else {
            return ParseResult::Fail;
        };
        let separator = ts.attempt(|ts| match parse_symbol(ts, '=') {
            ParseResult::Success(span) => ParseResult::Success(span),
            _ => parse_symbol(ts, ':'),
        });
        let (separator, value) = match separator {
            ParseResult::Success(span) => match parse_meta_value(ts) {
                ParseResult::Success(value) => (Some(span), Some(value)),
                _ => return ParseResult::Fail,
            },
            _ => (None, None),
        };
        ParseResult::Success(MetaPair {
            key,
            separator,
            value,
        })
    })
}

/// Parses `[` pair (`,` pair)* `]`.
pub fn parse_meta_clause(ts: &mut TokenStream) -> ParseResult<MetaClause> {
    ts.attempt(|ts| {
        let ParseResult::Success(open) = parse_symbol(ts, '[') else {
            return ParseResult::Fail;
        };
        let mut delimiters = vec![open];
        let mut pairs = Vec::new();

        let ParseResult::Success(first) = parse_meta_pair(ts) else {
            return ParseResult::Fail;
        };
        pairs.push(first);
        while let ParseResult::Success(comma) = optional(ts, |ts| parse_symbol(ts, ',')) {
            delimiters.push(comma);
            let ParseResult::Success(pair) = parse_meta_pair(ts) else {
                return ParseResult::Fail;
            };
            pairs.push(pair);
        }

        let ParseResult::Success(close) = parse_symbol(ts, ']') else {
            return ParseResult::Fail;
        };
        delimiters.push(close);
        ParseResult::Success(MetaClause { delimiters, pairs })
    })
}
