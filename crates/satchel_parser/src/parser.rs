//! Line-level entry point.

use log::debug;
use satchel_foundation::ItemResolver;

use crate::code_block::{CodeBlock, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::grammar;
use crate::guess;
use crate::span::Span;
use crate::tokenizer::tokenize;

/// Parses one line into a command.
///
/// Never fails: lines that do not parse become hint commands whose
/// [`CmdErr`](crate::CmdErr) says why.
#[must_use]
pub fn parse_command(line: &str, resolver: &dyn ItemResolver) -> Command {
    let content = line.trim_end();
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Command::nop();
    }
    if trimmed.starts_with('#') {
        let start = content.len() - trimmed.len();
        let block = CodeBlock::new(Span::new(start, content.len()), SyntaxClass::Comment);
        return Command::new(CommandKind::Nop, vec![block]);
    }

    let mut ts = tokenize(line);
    if let Some(command) = grammar::parse_rules(&mut ts, resolver) {
        return command;
    }
    let hint = guess::fallback(ts.tokens());
    debug!("{line:?} did not parse: {}", hint.cmd_err());
    hint
}

/// Parses every line of a script.
#[must_use]
pub fn parse_script(script: &str, resolver: &dyn ItemResolver) -> Vec<Command> {
    script.lines().map(|line| parse_command(line, resolver)).collect()
}
