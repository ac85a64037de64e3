//! In-game inventory actions: obtain, remove, equip, shoot.

use satchel_foundation::{ItemResolver, ItemType};

use super::apply;
use crate::ast::{
    Identifier, Integer, Keyword, ParseResult, one_or_more, optional, parse_identifier,
    parse_integer, parse_keyword, parse_phrase,
};
use crate::clause::{SlotClause, parse_slot_clause};
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::command::{Command, CommandKind};
use crate::item::{
    ItemLiteral, parse_item_literal, parse_item_name, parse_removal_literal, resolve_all,
    resolve_removals,
};
use crate::tokenizer::TokenStream;

const OBTAIN_VERBS: [&str; 4] = ["get", "add", "buy", "cook"];
const REMOVE_VERBS: [&str; 3] = ["remove", "sell", "drop"];
const DNP_VERBS: [&str; 2] = ["dnp", "d&p"];

const ARMOR: [ItemType; 3] = [ItemType::ArmorUpper, ItemType::ArmorMiddle, ItemType::ArmorLower];

// =============================================================================
// get / add / buy / cook / pick up
// =============================================================================

struct ObtainAst {
    verb: Keyword,
    items: Vec<ItemLiteral>,
}

impl Highlight for ObtainAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.verb.highlight(out);
        self.items.highlight(out);
    }
}

fn parse_obtain(ts: &mut TokenStream) -> ParseResult<ObtainAst> {
    let verb = match parse_keyword(ts, &OBTAIN_VERBS, SyntaxClass::Command) {
        ParseResult::Success(verb) => verb,
        _ => match parse_phrase(ts, &["pick", "up"], SyntaxClass::Command) {
            ParseResult::Success(verb) => verb,
            _ => return ParseResult::Fail,
        },
    };
    one_or_more(ts, parse_item_literal).map(|items| ObtainAst { verb, items })
}

pub(super) fn add(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_obtain, |ast, resolver| {
        resolve_all(&ast.items, resolver).map(CommandKind::Add)
    })
}

// =============================================================================
// remove / sell / drop / eat / dnp
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum RemoveVerb {
    Remove,
    Eat,
    DropAndPickUp,
}

struct RemoveAst {
    verb: Keyword,
    action: RemoveVerb,
    items: Vec<ItemLiteral>,
    slot: Option<SlotClause>,
}

impl Highlight for RemoveAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.verb.highlight(out);
        self.items.highlight(out);
        self.slot.highlight(out);
    }
}

fn parse_remove_verb(ts: &mut TokenStream) -> ParseResult<(Keyword, RemoveVerb)> {
    let verbs: [(&[&str], RemoveVerb); 3] = [
        (&REMOVE_VERBS, RemoveVerb::Remove),
        (&["eat"], RemoveVerb::Eat),
        (&DNP_VERBS, RemoveVerb::DropAndPickUp),
    ];
    for (words, action) in verbs {
        if let ParseResult::Success(verb) = parse_keyword(ts, words, SyntaxClass::Command) {
            return ParseResult::Success((verb, action));
        }
    }
    ParseResult::Fail
}

/// `<stacks>+ [from slot N]` where a count may be `all`.
pub(super) fn parse_removal_items(ts: &mut TokenStream) -> ParseResult<(Vec<ItemLiteral>, Option<SlotClause>)> {
    let ParseResult::Success(items) = one_or_more(ts, parse_removal_literal) else {
        return ParseResult::Fail;
    };
    let slot = optional(ts, |ts| parse_slot_clause(ts, &["from"])).success();
    ParseResult::Success((items, slot))
}

fn parse_remove(ts: &mut TokenStream) -> ParseResult<RemoveAst> {
    let ParseResult::Success((verb, action)) = parse_remove_verb(ts) else {
        return ParseResult::Fail;
    };
    parse_removal_items(ts).map(|(items, slot)| RemoveAst {
        verb,
        action,
        items,
        slot,
    })
}

fn lower_remove(ast: &RemoveAst, resolver: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let stacks = resolve_removals(&ast.items, resolver)?;
    let slot = ast.slot.as_ref().map_or(1, SlotClause::slot);
    Ok(match ast.action {
        RemoveVerb::DropAndPickUp => CommandKind::DropAndPickUp { stacks, slot },
        action => CommandKind::Remove {
            stacks,
            slot,
            eat: action == RemoveVerb::Eat,
        },
    })
}

pub(super) fn remove(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_remove, lower_remove)
}

// =============================================================================
// remove all <type> / unequip all <type>
// =============================================================================

/// An item type written as words: `weapons`, `key items`, ...
struct TypeWords {
    words: Vec<Identifier>,
    types: Vec<ItemType>,
}

impl Highlight for TypeWords {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        super::highlight_words(&self.words, SyntaxClass::ItemName, out);
    }
}

fn singular(word: &str) -> String {
    let word = word.to_lowercase();
    word.strip_suffix('s').map_or_else(|| word.clone(), str::to_string)
}

fn parse_item_types(ts: &mut TokenStream) -> ParseResult<TypeWords> {
    ts.attempt(|ts| {
        let ParseResult::Success(first) = parse_identifier(ts) else {
            return ParseResult::Fail;
        };
        let types = match singular(&first.text).as_str() {
            "weapon" => vec![ItemType::Weapon],
            "bow" => vec![ItemType::Bow],
            "arrow" => vec![ItemType::Arrow],
            "shield" => vec![ItemType::Shield],
            "armor" => ARMOR.to_vec(),
            "material" => vec![ItemType::Material],
            "food" => vec![ItemType::Food],
            "key" => {
                let ParseResult::Success(second) = parse_identifier(ts) else {
                    return ParseResult::Fail;
                };
                if singular(&second.text) != "item" {
                    return ParseResult::Fail;
                }
                return ParseResult::Success(TypeWords {
                    words: vec![first, second],
                    types: vec![ItemType::Key],
                });
            }
            _ => return ParseResult::Fail,
        };
        ParseResult::Success(TypeWords {
            words: vec![first],
            types,
        })
    })
}

struct ByTypeAst {
    keywords: [Keyword; 2],
    types: TypeWords,
}

impl Highlight for ByTypeAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.keywords.to_vec().highlight(out);
        self.types.highlight(out);
    }
}

fn parse_by_type(ts: &mut TokenStream, verb: &str) -> ParseResult<ByTypeAst> {
    let ParseResult::Success(verb) = parse_keyword(ts, &[verb], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    let ParseResult::Success(all) = parse_keyword(ts, &["all"], SyntaxClass::Keyword) else {
        return ParseResult::Fail;
    };
    parse_item_types(ts).map(|types| ByTypeAst {
        keywords: [verb, all],
        types,
    })
}

pub(super) fn remove_all(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(
        ts,
        resolver,
        |ts| parse_by_type(ts, "remove"),
        |ast, _| Ok(CommandKind::RemoveAll(ast.types.types.clone())),
    )
}

pub(super) fn unequip_all(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(
        ts,
        resolver,
        |ts| parse_by_type(ts, "unequip"),
        |ast, _| Ok(CommandKind::UnequipAll(ast.types.types.clone())),
    )
}

// =============================================================================
// equip / unequip
// =============================================================================

struct EquipAst {
    verb: Keyword,
    equip: bool,
    item: ItemLiteral,
    slot: Option<SlotClause>,
}

impl Highlight for EquipAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.verb.highlight(out);
        self.item.highlight(out);
        self.slot.highlight(out);
    }
}

fn parse_equip(ts: &mut TokenStream) -> ParseResult<EquipAst> {
    let (verb, equip) = match parse_keyword(ts, &["equip"], SyntaxClass::Command) {
        ParseResult::Success(verb) => (verb, true),
        _ => match parse_keyword(ts, &["unequip"], SyntaxClass::Command) {
            ParseResult::Success(verb) => (verb, false),
            _ => return ParseResult::Fail,
        },
    };
    let ParseResult::Success(item) = parse_item_name(ts) else {
        return ParseResult::Fail;
    };
    let slot = optional(ts, |ts| parse_slot_clause(ts, &["in"])).success();
    ParseResult::Success(EquipAst {
        verb,
        equip,
        item,
        slot,
    })
}

fn lower_equip(ast: &EquipAst, resolver: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    let stack = ast.item.resolve(resolver).map_err(|e| vec![e])?.stack;
    let slot = ast.slot.as_ref().map(SlotClause::slot);
    Ok(if ast.equip {
        CommandKind::Equip {
            stack,
            slot: slot.unwrap_or(1),
        }
    } else {
        CommandKind::Unequip { stack, slot }
    })
}

pub(super) fn equip(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_equip, lower_equip)
}

// =============================================================================
// shoot
// =============================================================================

struct ShootAst {
    verb: Keyword,
    amount: Option<Integer>,
    arrows: Keyword,
}

impl Highlight for ShootAst {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.verb.highlight(out);
        self.amount.highlight(out);
        self.arrows.highlight(out);
    }
}

fn parse_shoot(ts: &mut TokenStream) -> ParseResult<ShootAst> {
    let ParseResult::Success(verb) = parse_keyword(ts, &["shoot"], SyntaxClass::Command) else {
        return ParseResult::Fail;
    };
    let amount = optional(ts, parse_integer).success();
    parse_keyword(ts, &["arrow", "arrows"], SyntaxClass::Keyword).map(|arrows| ShootAst {
        verb,
        amount,
        arrows,
    })
}

fn lower_shoot(ast: &ShootAst, _: &dyn ItemResolver) -> Result<CommandKind, Vec<String>> {
    match ast.amount {
        None => Ok(CommandKind::Shoot(1)),
        Some(amount) => i32::try_from(amount.value)
            .ok()
            .filter(|count| *count >= 0)
            .map(CommandKind::Shoot)
            .ok_or_else(|| vec![format!("{} is not a valid amount", amount.value)]),
    }
}

pub(super) fn shoot(ts: &mut TokenStream, resolver: &dyn ItemResolver) -> Option<Command> {
    apply(ts, resolver, parse_shoot, lower_shoot)
}
