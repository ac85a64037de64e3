//! Game-level commands: saves, broken slots, closing, syncing, flags.

use satchel_foundation::ItemResolver;
use satchel_inventory::GameFlag;

use super::inventory::parse_removal_items;
use super::{apply, highlight_words, join_words};
use crate::ast::{
    Identifier, Integer, Keyword, ParseResult, one_or_more, optional, parse_identifier,
    parse_integer, parse_keyword, parse_phrase, zero_or_more,
};
use crate::clause::SlotClause;
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::item::{ItemLiteral, resolve_removals};
use crate::tokenizer::TokenStream;

/// A command made only of keywords.
struct KeywordAst(Keyword);

impl Highlight for KeywordAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.0.highlight(out);
    }
}

/// A command keyword followed by save name words.
struct NamedAst {
    keywords: Vec<Keyword>,
    name: Vec<Identifier>,
}

impl NamedAst {
    fn name(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(join_words(&self.name))
        }
    }
}

impl Highlight for NamedAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.highlight(out);
        highlight_words(&self.name, SyntaxClass::MetaConst, out);
    }
}

// =============================================================================
// Saves
// =============================================================================

fn parse_save(ts: &mut TokenStream) -> ParseResult<NamedAst> {
    let ParseResult::Success(save) = parse_keyword(ts, &["save"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    match optional(ts, |ts| parse_keyword(ts, &["as"], SyntaxClass::Keyword)) {
        ParseResult::Success(as_kw) => one_or_more(ts, parse_identifier).map(|name| NamedAst {
            keywords: vec![save, as_kw],
            name,
        }),
        _ => ParseResult::Success(NamedAst {
            keywords: vec![save],
            name: Vec::new(),
        }),
    }
}

pub(super) fn save(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_save, |ast, _| Ok(CommandKind::Save(ast.name())))
}

fn parse_reload(ts: &mut TokenStream) -> ParseResult<NamedAst> {
    parse_keyword(ts, &["reload"], SyntaxClass::Command).map(|reload| NamedAst {
        keywords: vec![reload],
        name: zero_or_more(ts, parse_identifier),
    })
}

pub(super) fn reload(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_reload, |ast, _| Ok(CommandKind::Reload(ast.name())))
}

fn parse_use(ts: &mut TokenStream) -> ParseResult<NamedAst> {
    let ParseResult::Success(keyword) = parse_keyword(ts, &["use"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    one_or_more(ts, parse_identifier).map(|name| NamedAst {
        keywords: vec![keyword],
        name,
    })
}

pub(super) fn use_save(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_use, |ast, _| {
        Ok(CommandKind::UseSave(join_words(&ast.name)))
    })
}

// =============================================================================
// break N slots [with <stacks> [from slot M]]
// =============================================================================

/// `with <stacks> [from slot M]`
struct WithClause {
    keyword: Keyword,
    items: Vec<ItemLiteral>,
    slot: Option<SlotClause>,
}

impl Highlight for WithClause {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keyword.highlight(out);
        self.items.highlight(out);
        self.slot.highlight(out);
    }
}

struct BreakAst {
    keywords: [Keyword; 2],
    count: Integer,
    with: Option<WithClause>,
}

impl Highlight for BreakAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.to_vec().highlight(out);
        self.count.highlight(out);
        self.with.highlight(out);
    }
}

fn parse_with(ts: &mut TokenStream) -> ParseResult<WithClause> {
    let ParseResult::Success(keyword) = parse_keyword(ts, &["with"], SyntaxClass::Keyword) else {
        return ParseResult::Fail;
    };
    parse_removal_items(ts).map(|(items, slot)| WithClause {
        keyword,
        items,
        slot,
    })
}

fn parse_break(ts: &mut TokenStream) -> ParseResult<BreakAst> {
    let ParseResult::Success(verb) = parse_keyword(ts, &["break"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(count) = parse_integer(ts) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(slots) = parse_keyword(ts, &["slot", "slots"], SyntaxClass::Keyword)
    else {
        return ParseResult::Fail;
    };
    let with = optional(ts, parse_with).success();
    ParseResult::Success(BreakAst {
        keywords: [verb, slots],
        count,
        with,
    })
}

fn lower_break(ast: &BreakAst, resolver: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let (stacks, slot) = match &ast.with {
        Some(with) => (
            resolve_removals(&with.items, resolver)?,
            with.slot.as_ref().map_or(1, SlotClause::slot),
        ),
        None => (Vec::new(), 1),
    };
    Ok(CommandKind::BreakSlots {
        count: ast.count.value,
        stacks,
        slot,
    })
}

pub(super) fn break_slots(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_break, lower_break)
}

// =============================================================================
// close game / sync gamedata
// =============================================================================

fn parse_close(ts: &mut TokenStream) -> ParseResult<KeywordAst> {
    match parse_phrase(ts, &["close", "game"], SyntaxClass::Command) {
        ParseResult::Success(kw) => ParseResult::Success(KeywordAst(kw)),
        _ => parse_phrase(ts, &["exit", "game"], SyntaxClass::Command).map(KeywordAst),
    }
}

pub(super) fn close_game(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_close, |_, _| Ok(CommandKind::CloseGame))
}

fn parse_sync(ts: &mut TokenStream) -> ParseResult<KeywordAst> {
    parse_phrase(ts, &["sync", "gamedata"], SyntaxClass::Command).map(KeywordAst)
}

pub(super) fn sync_game_data(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_sync, |_, _| Ok(CommandKind::SyncGameData))
}

// =============================================================================
// has [not] N <flag>
// =============================================================================

struct HasAst {
    keywords: Vec<Keyword>,
    negated: bool,
    value: Option<Integer>,
    flag: Vec<Identifier>,
}

impl Highlight for HasAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.highlight(out);
        self.value.highlight(out);
        highlight_words(&self.flag, SyntaxClass::MetaKey, out);
    }
}

fn parse_has(ts: &mut TokenStream) -> ParseResult<HasAst> {
    let ParseResult::Success(has) = parse_keyword(ts, &["has"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    let mut keywords = vec![has];
    let negated = match optional(ts, |ts| parse_keyword(ts, &["not"], SyntaxClass::Keyword)) {
        ParseResult::Success(not) => {
            keywords.push(not);
            true
        }
        _ => false,
    };
    let value = optional(ts, parse_integer).success();
    one_or_more(ts, parse_identifier).map(|flag| HasAst {
        keywords,
        negated,
        value,
        flag,
    })
}

fn lower_has(ast: &HasAst, _: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let words: String = ast.flag.iter().map(|w| w.text.as_str()).collect();
    let flag = GameFlag::from_prefix(&words)
        .ok_or_else(|| vec![format!("{} is not a valid flag", join_words(&ast.flag))])?;
    let value = match (ast.negated, ast.value) {
        (true, _) => 0,
        (false, Some(value)) => i32::try_from(value.value)
            .map_err(|_| vec![format!("{} is not a valid flag value", value.value)])?,
        (false, None) => return Err(vec![format!("flag {flag} requires a value")]),
    };
    Ok(CommandKind::SetFlag { flag, value })
}

pub(super) fn set_flag(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_has, lower_has)
}
