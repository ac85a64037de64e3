//! Command grammar.
//!
//! Every rule parses a command AST that must cover the whole line, then
//! lowers it with an [`ItemResolver`] into a [`Command`]. A rule whose AST
//! parsed but whose lowering failed produces a `CmdErr::Guess` hint carrying
//! the lowering messages and a usage line.

mod game;
mod initialize;
mod inventory;
mod super_cmd;
mod trial;
mod write;

use log::trace;
use satchel_foundation::ItemResolver;

use crate::ast::{Identifier, ParseResult};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{CmdErr, Command, CommandKind};
use crate::guess;
use crate::tokenizer::TokenStream;

/// A grammar rule. `None` means the rule does not apply to the line.
pub(crate) type Rule = fn(&mut TokenStream, &dyn ItemResolver) -> Option<Command>;

/// Rules in the order they are tried.
pub(crate) const RULES: &[(&str, Rule)] = &[
    ("init gamedata", initialize::init_game_data),
    ("initialize", initialize::initialize),
    ("write", write::write),
    ("!swap", super_cmd::swap),
    ("!sort", super_cmd::sort_material),
    ("!add slot", super_cmd::add_slot),
    ("trial", trial::trial),
    ("add", inventory::add),
    ("remove all", inventory::remove_all),
    ("remove", inventory::remove),
    ("unequip all", inventory::unequip_all),
    ("equip", inventory::equip),
    ("shoot", inventory::shoot),
    ("save", game::save),
    ("reload", game::reload),
    ("use", game::use_save),
    ("break", game::break_slots),
    ("close game", game::close_game),
    ("sync gamedata", game::sync_game_data),
    ("has", game::set_flag),
];

/// Runs one rule: parse the whole line, then lower.
pub(crate) fn apply<A: Highlight>(
    ts: &mut TokenStream,
    resolver: &dyn ItemResolver,
    parse: impl FnOnce(&mut TokenStream) -> ParseResult<A>,
    lower: impl FnOnce(&A, &dyn ItemResolver) -> Result<CommandKind, Vec<String>>,
) -> Option<Command> {
    ts.reset();
    let ast = ts
        .attempt(|ts| match parse(ts) {
            ParseResult::Success(ast) if ts.is_at_end() => ParseResult::Success(ast),
            _ => ParseResult::Fail,
        })
        .success()?;

    let blocks = ast.code_blocks();
    match lower(&ast, resolver) {
        Ok(kind) => Some(Command::new(kind, blocks)),
        Err(mut messages) => {
            trace!("lowering failed: {messages:?}");
            if let Some(usage) = guess::usage(ts.tokens()) {
                messages.push(guess::usage_message(usage));
            }
            Some(Command::hint(CmdErr::Guess, messages, blocks))
        }
    }
}

/// Highlights words with one class.
pub(crate) fn highlight_words(words: &[Identifier], class: SyntaxClass, out: &mut Vec<CodeBlock>) {
    for word in words {
        out.push(CodeBlock::new(word.span, class));
    }
}

/// Joins words with single spaces.
pub(crate) fn join_words(words: &[Identifier]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tries every rule in order.
pub(crate) fn parse_rules(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    RULES.iter().find_map(|(name, rule)| {
        let command = rule(ts, resolver);
        if command.is_some() {
            trace!("rule {name} matched");
        }
        command
    })
}
