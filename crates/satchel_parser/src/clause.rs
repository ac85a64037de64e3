//! Slot clauses: `in slot N` and `from slot N`.

use crate::ast::{Integer, Keyword, ParseResult, parse_integer, parse_keyword};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::tokenizer::TokenStream;

/// `in slot N` or `from slot N`. The number is 1-based as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotClause {
    /// `in`/`from` and `slot`.
    pub keywords: [Keyword; 2],
    /// Slot number as written.
    pub number: Integer,
}

impl SlotClause {
    /// The 1-based slot number. Negative numbers become 0.
    #[must_use]
    pub fn slot(&self) -> usize {
        usize::try_from(self.number.value).unwrap_or(0)
    }
}

impl Highlight for SlotClause {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.to_vec().highlight(out);
        out.push(CodeBlock::new(self.number.span, SyntaxClass::SlotNumber));
    }
}

/// Parses a slot clause introduced by one of `prepositions`.
pub fn parse_slot_clause(ts: &mut TokenStream, prepositions: &[&str]) -> ParseResult<SlotClause> {
    ts.attempt(|ts| {
        let ParseResult::Success(preposition) = parse_keyword(ts, prepositions, SyntaxClass::Keyword)
        else {
            return ParseResult::Fail;
        };
        let ParseResult::Success(slot) = parse_keyword(ts, &["slot", "slots"], SyntaxClass::Keyword)
        else {
            return ParseResult::Fail;
        };
        parse_integer(ts).map(|number| SlotClause {
            keywords: [preposition, slot],
            number,
        })
    })
}

/// Returns true if a slot clause starts at the cursor. Never consumes.
pub fn at_slot_clause(ts: &mut TokenStream) -> bool {
    ts.push();
    let found = parse_slot_clause(ts, &["in", "from"]).is_success();
    ts.restore();
    ts.pop();
    found
}
