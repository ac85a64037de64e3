//! Usage guesses for lines that did not parse.
//!
//! Each entry is a list of word prefixes. The first entry whose prefixes all
//! match the leading words of the line wins. A leading `!` is joined with the
//! following word, so `!sw` matches `! swap`.

use crate::code_block::{CodeBlock, SyntaxClass};
use crate::command::{CmdErr, Command};
use crate::tokenizer::Token;

struct Guess {
    prefixes: &'static [&'static str],
    usage: &'static str,
}

const GUESSES: &[Guess] = &[
    Guess { prefixes: &["a"], usage: "add [amount] <item>..." },
    Guess {
        prefixes: &["br"],
        usage: "break <count> slots [with [amount|all] <item>... [from slot N]]",
    },
    Guess { prefixes: &["bu"], usage: "buy [amount] <item>..." },
    Guess { prefixes: &["cl"], usage: "close game" },
    Guess { prefixes: &["co"], usage: "cook [amount] <item>..." },
    Guess { prefixes: &["d&"], usage: "dnp [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["dn"], usage: "dnp [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["dr"], usage: "drop [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["ea"], usage: "eat [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["en"], usage: "enter eventide|tots" },
    Guess { prefixes: &["eq"], usage: "equip <item> [in slot N]" },
    Guess { prefixes: &["exit", "g"], usage: "exit game" },
    Guess { prefixes: &["ex"], usage: "exit eventide|tots" },
    Guess { prefixes: &["g"], usage: "get [amount] <item>..." },
    Guess { prefixes: &["init", "ga"], usage: "initialize gamedata [amount] <item>..." },
    Guess { prefixes: &["i"], usage: "initialize [amount] <item>..." },
    Guess { prefixes: &["l"], usage: "leave eventide|tots" },
    Guess { prefixes: &["p"], usage: "pick up [amount] <item>..." },
    Guess { prefixes: &["rel"], usage: "reload [save name]" },
    Guess { prefixes: &["rem", "a"], usage: "remove all <type>" },
    Guess { prefixes: &["rem"], usage: "remove [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["save", "a"], usage: "save as <save name>" },
    Guess { prefixes: &["sa"], usage: "save" },
    Guess { prefixes: &["se"], usage: "sell [amount|all] <item>... [from slot N]" },
    Guess { prefixes: &["sh"], usage: "shoot [amount] arrows" },
    Guess { prefixes: &["sy"], usage: "sync gamedata" },
    Guess { prefixes: &["us"], usage: "use <save name>" },
    Guess { prefixes: &["unequip", "a"], usage: "unequip all <type>" },
    Guess { prefixes: &["u"], usage: "unequip <item> [in slot N]" },
    Guess { prefixes: &["w"], usage: "write [<key>=<value>, ...] to <item> [in slot N]" },
    Guess { prefixes: &["h"], usage: "has [not] <value> <flag>" },
    Guess { prefixes: &["!sw"], usage: "!swap <i> <j>" },
    Guess { prefixes: &["!so"], usage: "!sort material" },
    Guess { prefixes: &["!a"], usage: "!add slot [amount] <item>... from slot N" },
];

/// Lowercased leading words, with a leading `!` joined to the next word.
/// Also returns how many tokens the first word spans.
fn words(tokens: &[Token]) -> (Vec<String>, usize) {
    let mut words: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    if words.first().is_some_and(|w| w == "!") && words.len() > 1 {
        let next = words.remove(1);
        words[0].push_str(&next);
        return (words, 2);
    }
    let head = usize::from(!words.is_empty());
    (words, head)
}

/// The usage line for the command the tokens most likely meant.
#[must_use]
pub fn usage(tokens: &[Token]) -> Option<&'static str> {
    let (words, _) = words(tokens);
    GUESSES
        .iter()
        .find(|guess| {
            guess.prefixes.len() <= words.len()
                && guess
                    .prefixes
                    .iter()
                    .zip(&words)
                    .all(|(prefix, word)| word.starts_with(prefix))
        })
        .map(|guess| guess.usage)
}

/// Formats a usage line as a hint message.
#[must_use]
pub fn usage_message(usage: &str) -> String {
    format!("usage: {usage}")
}

/// Builds the hint for a line no grammar rule accepted.
///
/// A guess is `CmdErr::Guess`. With no guess, a line starting with `!` is
/// `CmdErr::Parse` and anything else is `CmdErr::Ast`.
#[must_use]
pub fn fallback(tokens: &[Token]) -> Command {
    let (words, head) = words(tokens);
    let super_command = tokens.first().is_some_and(|t| t.text == "!");

    let guessed = usage(tokens);
    let head_class = match (guessed.is_some(), super_command) {
        (false, _) => SyntaxClass::Unknown,
        (true, true) => SyntaxClass::SuperCommand,
        (true, false) => SyntaxClass::Command,
    };
    let blocks = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let class = if i < head { head_class } else { SyntaxClass::Unknown };
            CodeBlock::new(token.span, class)
        })
        .collect();

    let first = words.first().cloned().unwrap_or_default();
    match guessed {
        Some(usage) => Command::hint(CmdErr::Guess, vec![usage_message(usage)], blocks),
        None if super_command => Command::hint(
            CmdErr::Parse,
            vec![format!("Unknown super command: {first}")],
            blocks,
        ),
        None => Command::hint(CmdErr::Ast, vec![format!("Unknown command: {first}")], blocks),
    }
}
