//! Super commands: `!swap`, `!sort material`, `!add slot`.
//!
//! These edit the pouch directly, with no game logic and no sync.

use satchel_foundation::ItemResolver;

use super::apply;
use crate::ast::{Integer, Keyword, ParseResult, one_or_more, parse_integer, parse_keyword, parse_symbol};
use crate::clause::{SlotClause, parse_slot_clause};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::item::{ItemLiteral, parse_item_literal, resolve_all};
use crate::tokenizer::TokenStream;

/// Parses `!` immediately followed by `word`, as one keyword.
fn parse_bang(ts: &mut TokenStream, word: &str) -> ParseResult<Keyword> {
    ts.attempt(|ts| {
        let ParseResult::Success(bang) = parse_symbol(ts, '!') else {
            return ParseResult::Fail;
        };
        parse_keyword(ts, &[word], SyntaxClass::SuperCommand)
            .map(|kw| Keyword::new(bang.to(kw.span), SyntaxClass::SuperCommand))
    })
}

// =============================================================================
// !swap
// =============================================================================

struct SwapAst {
    keyword: Keyword,
    slots: [Integer; 2],
}

impl Highlight for SwapAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keyword.highlight(out);
        for slot in &self.slots {
            out.push(CodeBlock::new(slot.span, SyntaxClass::SlotNumber));
        }
    }
}

fn parse_swap(ts: &mut TokenStream) -> ParseResult<SwapAst> {
    let ParseResult::Success(keyword) = parse_bang(ts, "swap") else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(first) = parse_integer(ts) else {
        return ParseResult::Fail;
    };
    parse_integer(ts).map(|second| SwapAst {
        keyword,
        slots: [first, second],
    })
}

fn lower_swap(ast: &SwapAst, _: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let index = |n: &Integer| {
        usize::try_from(n.value).map_err(|_| vec![format!("{} is not a valid slot index", n.value)])
    };
    Ok(CommandKind::Swap(index(&ast.slots[0])?, index(&ast.slots[1])?))
}

pub(super) fn swap(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_swap, lower_swap)
}

// =============================================================================
// !sort material
// =============================================================================

struct SortAst {
    keyword: Keyword,
    target: Keyword,
}

impl Highlight for SortAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keyword.highlight(out);
        self.target.highlight(out);
    }
}

fn parse_sort(ts: &mut TokenStream) -> ParseResult<SortAst> {
    let ParseResult::Success(keyword) = parse_bang(ts, "sort") else {
        return ParseResult::Fail;
    };
    parse_keyword(ts, &["material", "materials"], SyntaxClass::Keyword)
        .map(|target| SortAst { keyword, target })
}

pub(super) fn sort_material(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_sort, |_, _| Ok(CommandKind::SortMaterial))
}

// =============================================================================
// !add slot
// =============================================================================

struct AddSlotAst {
    keywords: [Keyword; 2],
    items: Vec<ItemLiteral>,
    from: SlotClause,
}

impl Highlight for AddSlotAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.to_vec().highlight(out);
        self.items.highlight(out);
        self.from.highlight(out);
    }
}

fn parse_add_slot(ts: &mut TokenStream) -> ParseResult<AddSlotAst> {
    let ParseResult::Success(add) = parse_bang(ts, "add") else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(slot) = parse_keyword(ts, &["slot", "slots"], SyntaxClass::SuperCommand)
    else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(items) = one_or_more(ts, parse_item_literal) else {
        return ParseResult::Fail;
    };
    parse_slot_clause(ts, &["from"]).map(|from| AddSlotAst {
        keywords: [add, slot],
        items,
        from,
    })
}

fn lower_add_slot(ast: &AddSlotAst, resolver: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    Ok(CommandKind::AddSlot {
        stacks: resolve_all(&ast.items, resolver)?,
        slot: ast.from.slot(),
    })
}

pub(super) fn add_slot(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_add_slot, lower_add_slot)
}
