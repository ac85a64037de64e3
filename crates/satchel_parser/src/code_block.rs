//! Syntax highlighting blocks.

use std::fmt;

use crate::span::Span;

/// Highlight class of a code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxClass {
    /// Command keyword such as `get` or `initialize`.
    Command,
    /// Super command keyword such as `!swap`.
    SuperCommand,
    /// Connecting word such as `to`, `in` or `slot`.
    Keyword,
    /// An item name.
    ItemName,
    /// A count.
    Amount,
    /// Metadata key.
    MetaKey,
    /// Numeric metadata value.
    MetaValue,
    /// Named metadata value, save name or trial name.
    MetaConst,
    /// A slot number.
    SlotNumber,
    /// Brackets and separators.
    Delimiter,
    /// Text the parser could not place.
    Unknown,
    /// Comment text.
    Comment,
}

impl SyntaxClass {
    /// Stable class name for renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "keyword.command",
            Self::SuperCommand => "keyword.super",
            Self::Keyword => "keyword.other",
            Self::ItemName => "item.name",
            Self::Amount => "item.amount",
            Self::MetaKey => "meta.key",
            Self::MetaValue => "meta.value",
            Self::MetaConst => "meta.const",
            Self::SlotNumber => "slot.number",
            Self::Delimiter => "delimiter",
            Self::Unknown => "unknown",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for SyntaxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A highlighted region of a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    /// Region of the line.
    pub span: Span,
    /// How to highlight it.
    pub class: SyntaxClass,
}

impl CodeBlock {
    /// Creates a code block.
    #[must_use]
    pub const fn new(span: Span, class: SyntaxClass) -> Self {
        Self { span, class }
    }
}

/// AST nodes that can emit their code blocks.
pub trait Highlight {
    /// Appends this node's code blocks to `out`.
    fn highlight(&self, out: &mut Vec<CodeBlock>);

    /// This node's code blocks, ordered by start offset.
    fn code_blocks(&self) -> Vec<CodeBlock> {
        let mut out = Vec::new();
        self.highlight(&mut out);
        out.sort_by_key(|block| block.span.start);
        out
    }
}

impl<T: Highlight> Highlight for Option<T> {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        if let Some(node) = self {
            node.highlight(out);
        }
    }
}

impl<T: Highlight> Highlight for Vec<T> {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        for node in self {
            node.highlight(out);
        }
    }
}
