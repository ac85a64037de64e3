//! `enter|exit|leave eventide|tots`

use satchel_foundation::ItemResolver;

use super::apply;
use crate::ast::{Identifier, Keyword, ParseResult, parse_identifier, parse_keyword};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind, Trial};
use crate::tokenizer::TokenStream;

struct TrialAst {
    keyword: Keyword,
    active: bool,
    name: Identifier,
    trial: Trial,
}

impl Highlight for TrialAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keyword.highlight(out);
        out.push(CodeBlock::new(self.name.span, SyntaxClass::MetaConst));
    }
}

fn parse(ts: &mut TokenStream) -> ParseResult<TrialAst> {
    let (keyword, active) = match parse_keyword(ts, &["enter"], SyntaxClass::Command) {
        ParseResult::Success(kw) => (kw, true),
        _ => match parse_keyword(ts, &["exit", "leave"], SyntaxClass::Command) {
            ParseResult::Success(kw) => (kw, false),
            _ => return ParseResult::Fail,
        },
    };
    let ParseResult::Success(name) = parse_identifier(ts) else {
        return ParseResult::Fail;
    };
    match Trial::from_name(&name.text) {
        Some(trial) => ParseResult::Success(TrialAst {
            keyword,
            active,
            name,
            trial,
        }),
        None => ParseResult::Fail,
    }
}

pub(super) fn trial(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse, |ast, _| {
        Ok(CommandKind::Trial {
            trial: ast.trial,
            active: ast.active,
        })
    })
}
