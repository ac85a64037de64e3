//! `initialize [gamedata] <stacks>*`

use satchel_foundation::ItemResolver;

use super::apply;
use crate::ast::{Keyword, ParseResult, parse_keyword, zero_or_more};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::item::{ItemLiteral, parse_item_literal, resolve_all};
use crate::tokenizer::TokenStream;

struct InitializeAst {
    keyword: Keyword,
    game_data: Option<Keyword>,
    items: Vec<ItemLiteral>,
}

impl Highlight for InitializeAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keyword.highlight(out);
        self.game_data.highlight(out);
        self.items.highlight(out);
    }
}

fn parse(ts: &mut TokenStream, game_data: bool) -> ParseResult<InitializeAst> {
    let ParseResult::Success(keyword) = parse_keyword(ts, &["init", "initialize"], SyntaxClass::Command)
    else {
        return ParseResult::Fail;
    };
    let game_data = if game_data {
        match parse_keyword(ts, &["gamedata"], SyntaxClass::Command) {
            ParseResult::Success(kw) => Some(kw),
            _ => return ParseResult::Fail,
        }
    } else {
        None
    };
    let items = zero_or_more(ts, parse_item_literal);
    ParseResult::Success(InitializeAst {
        keyword,
        game_data,
        items,
    })
}

pub(super) fn initialize(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(
        ts,
        resolver,
        |ts| parse(ts, false),
        |ast, resolver| resolve_all(&ast.items, resolver).map(CommandKind::Initialize),
    )
}

pub(super) fn init_game_data(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(
        ts,
        resolver,
        |ts| parse(ts, true),
        |ast, resolver| resolve_all(&ast.items, resolver).map(CommandKind::InitGameData),
    )
}
