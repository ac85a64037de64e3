//! `write <meta> to <item> [in slot N]`

use satchel_foundation::ItemResolver;

use super::apply;
use crate::ast::{Keyword, ParseResult, optional, parse_keyword};
use crate::clause::{SlotClause, parse_slot_clause};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::item::{ItemLiteral, parse_item_name};
use crate::metadata::{MetaClause, parse_meta_clause};
use crate::tokenizer::TokenStream;

struct WriteAst {
    keywords: [Keyword; 2],
    meta: MetaClause,
    item: ItemLiteral,
    slot: Option<SlotClause>,
}

impl Highlight for WriteAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.to_vec().highlight(out);
        self.meta.highlight(out);
        self.item.highlight(out);
        self.slot.highlight(out);
    }
}

fn parse(ts: &mut TokenStream) -> ParseResult<WriteAst> {
    let ParseResult::Success(write) = parse_keyword(ts, &["write"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(meta) = parse_meta_clause(ts) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(to) = parse_keyword(ts, &["to"], SyntaxClass::Keyword) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(item) = parse_item_name(ts) else {
        return ParseResult::Fail;
    };
    let slot = optional(ts, |ts| parse_slot_clause(ts, &["in"])).success();
    ParseResult::Success(WriteAst {
        keywords: [write, to],
        meta,
        item,
        slot,
    })
}

fn lower(ast: &WriteAst, resolver: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let meta = ast.meta.to_meta_option().map_err(|e| vec![e.to_string()])?;
    let arg = ast.item.resolve(resolver).map_err(|e| vec![e])?;
    Ok(CommandKind::Write {
        stack: arg.stack,
        slot: ast.slot.as_ref().map_or(1, SlotClause::slot),
        meta,
    })
}

pub(super) fn write(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse, lower)
}
