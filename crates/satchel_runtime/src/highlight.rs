//! Syntax highlighting for the REPL.
//!
//! Colors come from the code blocks the parser attaches to every command,
//! so highlighting always agrees with how the line parses.

use std::borrow::Cow;

use satchel_foundation::NoItems;
use satchel_parser::{CodeBlock, SyntaxClass, parse_command};

const RESET: &str = "\x1b[0m";

/// Highlighter for command lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct SatchelHighlighter;

impl SatchelHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// Item names are not resolved, so lines naming unknown items still
    /// highlight by shape.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str) -> Cow<'l, str> {
        let command = parse_command(line, &NoItems);
        render(line, command.code_blocks())
    }
}

/// ANSI color for a class.
#[must_use]
pub const fn color(class: SyntaxClass) -> &'static str {
    match class {
        SyntaxClass::Command => "\x1b[1;32m",      // bold green
        SyntaxClass::SuperCommand => "\x1b[1;35m", // bold magenta
        SyntaxClass::Keyword => "\x1b[32m",        // green
        SyntaxClass::ItemName => "\x1b[36m",       // cyan
        SyntaxClass::Amount | SyntaxClass::SlotNumber => "\x1b[35m",
        SyntaxClass::MetaKey => "\x1b[34m",
        SyntaxClass::MetaValue => "\x1b[33m",
        SyntaxClass::MetaConst => "\x1b[1;33m",
        SyntaxClass::Delimiter => "\x1b[1m",
        SyntaxClass::Unknown => "\x1b[31m",
        SyntaxClass::Comment => "\x1b[2;3m", // dim italic
    }
}

/// Wraps every block of `line` in its color. Text between blocks is kept as is.
#[must_use]
pub fn render<'l>(line: &'l str, blocks: &[CodeBlock]) -> Cow<'l, str> {
    if blocks.is_empty() {
        return Cow::Borrowed(line);
    }

    let mut result = String::with_capacity(line.len() * 2);
    let mut cursor = 0;
    for block in blocks {
        let (start, end) = (block.span.start, block.span.end);
        if start < cursor {
            continue;
        }
        let (Some(gap), Some(text)) = (line.get(cursor..start), line.get(start..end)) else {
            continue;
        };
        result.push_str(gap);
        result.push_str(color(block.class));
        result.push_str(text);
        result.push_str(RESET);
        cursor = end;
    }
    result.push_str(line.get(cursor..).unwrap_or_default());
    Cow::Owned(result)
}
