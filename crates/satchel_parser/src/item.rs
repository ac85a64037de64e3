//! Item literals: `[amount] word+ [meta]`.

use satchel_foundation::{Amount, ItemResolver, ItemStack, ItemStackArg, RemoveArg};

use crate::ast::{
    Identifier, Integer, Keyword, ParseResult, optional, parse_identifier, parse_integer,
    parse_keyword,
};
use crate::clause::at_slot_clause;
use crate::code_block::{CodeBlock, Highlight, SyntaxClass};
use crate::metadata::{MetaClause, parse_meta_clause};
use crate::tokenizer::TokenStream;

/// An item as written in a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemLiteral {
    /// Leading count.
    pub amount: Option<Integer>,
    /// `all` written instead of a count.
    pub all: Option<Keyword>,
    /// Name words.
    pub words: Vec<Identifier>,
    /// Trailing metadata.
    pub meta: Option<MetaClause>,
}

impl ItemLiteral {
    /// The name words joined with spaces, as written.
    #[must_use]
    pub fn name(&self) -> String {
        self.words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The resolver query: the name words concatenated.
    #[must_use]
    pub fn query(&self) -> String {
        self.words.iter().map(|word| word.text.as_str()).collect()
    }

    fn count(&self) -> Result<i32, String> {
        match self.amount {
            Some(amount) => i32::try_from(amount.value)
                .map_err(|_| format!("{} is not a valid amount", amount.value)),
            None => Ok(1),
        }
    }

    fn resolve_stack(&self, resolver: &dyn ItemResolver) -> Result<ItemStack, String> {
        let stack = resolver
            .search_item(&self.query())
            .ok_or_else(|| format!("Cannot find item: {}", self.name()))?;
        match &self.meta {
            Some(clause) => {
                let meta = clause.to_meta_option().map_err(|e| e.to_string())?;
                Ok(stack.modify_meta(&meta))
            }
            None => Ok(stack),
        }
    }

    /// Resolves the item, applies metadata and attaches the count.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the item is unknown, the amount
    /// does not fit, or the metadata is invalid. An unstackable item may not
    /// ask for more than [`ItemStackArg::MAX_COPIES`] slots, and `all` is not
    /// an amount that can be added.
    pub fn resolve(&self, resolver: &dyn ItemResolver) -> Result<ItemStackArg, String> {
        if self.all.is_some() {
            return Err(format!("Cannot add all of {}", self.name()));
        }
        let count = self.count()?;
        let stack = self.resolve_stack(resolver)?;
        if !stack.item().stackable && count > ItemStackArg::MAX_COPIES {
            return Err(format!(
                "{count} is too many of {} (at most {})",
                self.name(),
                ItemStackArg::MAX_COPIES
            ));
        }
        Ok(ItemStackArg::new(stack, count))
    }

    /// Resolves the item for a removing command. `all` becomes
    /// [`Amount::All`].
    ///
    /// # Errors
    ///
    /// Same as [`ItemLiteral::resolve`], without the copy limit.
    pub fn resolve_removal(&self, resolver: &dyn ItemResolver) -> Result<RemoveArg, String> {
        let amount = if self.all.is_some() {
            Amount::All
        } else {
            Amount::Count(self.count()?)
        };
        Ok(RemoveArg::new(self.resolve_stack(resolver)?, amount))
    }
}

impl Highlight for ItemLiteral {
    fn highlight(&self, out: &mut Vec<CodeBlock>) {
        self.amount.highlight(out);
        self.all.highlight(out);
        for word in &self.words {
            out.push(CodeBlock::new(word.span, SyntaxClass::ItemName));
        }
        self.meta.highlight(out);
    }
}

/// Resolves every literal, collecting all failure messages.
///
/// # Errors
///
/// Returns one message per literal that failed to resolve.
pub fn resolve_all(
    literals: &[ItemLiteral],
    resolver: &dyn ItemResolver,
) -> Result<Vec<ItemStackArg>, Vec<String>> {
    resolve_each(literals, |literal| literal.resolve(resolver))
}

/// Resolves every literal of a removing command.
///
/// # Errors
///
/// Returns one message per literal that failed to resolve.
pub fn resolve_removals(
    literals: &[ItemLiteral],
    resolver: &dyn ItemResolver,
) -> Result<Vec<RemoveArg>, Vec<String>> {
    resolve_each(literals, |literal| literal.resolve_removal(resolver))
}

fn resolve_each<T>(
    literals: &[ItemLiteral],
    resolve: impl Fn(&ItemLiteral) -> Result<T, String>,
) -> Result<Vec<T>, Vec<String>> {
    let mut args = Vec::with_capacity(literals.len());
    let mut errors = Vec::new();
    for literal in literals {
        match resolve(literal) {
            Ok(arg) => args.push(arg),
            Err(message) => errors.push(message),
        }
    }
    if errors.is_empty() { Ok(args) } else { Err(errors) }
}

/// What may stand before the item name.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Quantity {
    None,
    Count,
    CountOrAll,
}

fn parse_words(ts: &mut TokenStream) -> Vec<Identifier> {
    let mut words = Vec::new();
    while !at_slot_clause(ts) {
        match parse_identifier(ts) {
            ParseResult::Success(word) => words.push(word),
            _ => break,
        }
    }
    words
}

fn parse_literal(ts: &mut TokenStream, quantity: Quantity) -> ParseResult<ItemLiteral> {
    ts.attempt(|ts| {
        let all = if quantity == Quantity::CountOrAll {
            optional(ts, |ts| parse_keyword(ts, &["all"], SyntaxClass::Amount)).success()
        } else {
            None
        };
        let amount = if quantity != Quantity::None && all.is_none() {
            optional(ts, parse_integer).success()
        } else {
            None
        };
        let words = parse_words(ts);
        if words.is_empty() {
            return ParseResult::Fail;
        }
        let meta = optional(ts, parse_meta_clause).success();
        ParseResult::Success(ItemLiteral {
            amount,
            all,
            words,
            meta,
        })
    })
}

/// Parses `Integer? Identifier+ MetaClause?`. Words stop before a slot
/// clause.
pub fn parse_item_literal(ts: &mut TokenStream) -> ParseResult<ItemLiteral> {
    parse_literal(ts, Quantity::Count)
}

/// Like [`parse_item_literal`], but the count may also be `all`.
pub fn parse_removal_literal(ts: &mut TokenStream) -> ParseResult<ItemLiteral> {
    parse_literal(ts, Quantity::CountOrAll)
}

/// Parses an item without a leading count.
pub fn parse_item_name(ts: &mut TokenStream) -> ParseResult<ItemLiteral> {
    parse_literal(ts, Quantity::None)
}
