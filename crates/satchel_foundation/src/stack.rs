//! Item stacks: an item plus count or durability, equip flag, and metadata.
//!
//! Stacks are immutable values. Every modifier returns a new stack, so a
//! stack stored in a save can never be changed through the live inventory.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemType};
use crate::meta::{CookEffect, MetaOption};

/// Metadata carried by a stack besides its value and equip flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackMeta {
    /// Hearts recovered (food).
    pub hp: Option<i32>,
    /// Sell price, or weapon modifier bits.
    pub price: Option<i64>,
    /// Cook effect (food).
    pub cook_effect: CookEffect,
}

/// One inventory entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemStack {
    item: Item,
    value: i32,
    equipped: bool,
    meta: StackMeta,
}

impl ItemStack {
    /// Creates a stack with the item's default life, unequipped, no metadata.
    #[must_use]
    pub fn new(item: Item) -> Self {
        let value = item.default_life;
        Self {
            item,
            value,
            equipped: false,
            meta: StackMeta::default(),
        }
    }

    /// The item.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Shortcut for the item's type.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        self.item.item_type
    }

    /// Count for stackables, durability x 100 for equipment.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Durability in display units.
    #[must_use]
    pub fn durability(&self) -> f64 {
        f64::from(self.value) / 100.0
    }

    /// Equipped flag.
    #[must_use]
    pub fn equipped(&self) -> bool {
        self.equipped
    }

    /// Metadata bag.
    #[must_use]
    pub fn meta(&self) -> &StackMeta {
        &self.meta
    }

    /// Returns a copy with a different value.
    #[must_use]
    pub fn with_value(&self, value: i32) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// Returns a copy with a different equip flag.
    #[must_use]
    pub fn with_equipped(&self, equipped: bool) -> Self {
        Self {
            equipped,
            ..self.clone()
        }
    }

    /// Returns a copy with every field present in `option` overwritten.
    #[must_use]
    pub fn modify_meta(&self, option: &MetaOption) -> Self {
        let mut stack = self.clone();
        if let Some(life) = option.life {
            stack.value = life;
        }
        if let Some(equip) = option.equip {
            stack.equipped = equip;
        }
        if let Some(price) = option.price {
            stack.meta.price = Some(price);
        }
        if let Some(hp) = option.hp {
            stack.meta.hp = Some(hp);
        }
        if let Some(effect) = option.cook_effect {
            stack.meta.cook_effect = effect;
        }
        stack
    }

    /// Returns a copy carrying `source`'s hp, price and cook effect.
    #[must_use]
    pub fn with_cook_data_from(&self, source: &ItemStack) -> Self {
        Self {
            meta: source.meta.clone(),
            ..self.clone()
        }
    }

    /// Returns true if both stacks hold the same item (structurally).
    #[must_use]
    pub fn same_item(&self, other: &ItemStack) -> bool {
        Arc::ptr_eq(&self.item, &other.item) || self.item == other.item
    }

    /// Equality ignoring the value.
    #[must_use]
    pub fn equals_except_value(&self, other: &ItemStack) -> bool {
        self.same_item(other) && self.equipped == other.equipped && self.meta == other.meta
    }

    /// Equality ignoring the value and the equip flag.
    #[must_use]
    pub fn equals_except_value_and_equipped(&self, other: &ItemStack) -> bool {
        self.same_item(other) && self.meta == other.meta
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item.item_type.is_equipment() {
            write!(f, "{} (durability {})", self.item.id, self.durability())?;
        } else {
            write!(f, "{}x {}", self.value, self.item.id)?;
        }
        if self.equipped {
            f.write_str(" [equipped]")?;
        }
        if let Some(price) = self.meta.price {
            write!(f, " [price={price}]")?;
        }
        if let Some(hp) = self.meta.hp {
            write!(f, " [hp={hp}]")?;
        }
        if self.meta.cook_effect != CookEffect::None {
            write!(f, " [{}]", self.meta.cook_effect)?;
        }
        Ok(())
    }
}

/// A resolved item and a quantity, as written in a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStackArg {
    /// The resolved stack (metadata already applied).
    pub stack: ItemStack,
    /// Quantity written before the item name.
    pub count: i32,
}

impl ItemStackArg {
    /// Most copies one argument expands to for an unstackable item.
    pub const MAX_COPIES: i32 = 999;

    /// Creates an argument.
    #[must_use]
    pub fn new(stack: ItemStack, count: i32) -> Self {
        Self { stack, count }
    }

    /// Expands the argument into slots.
    ///
    /// A stackable item becomes one slot whose value is `count`. An
    /// unstackable item becomes `count` copies of the stack, at most
    /// [`Self::MAX_COPIES`].
    #[must_use]
    pub fn expand(&self) -> Vec<ItemStack> {
        if self.stack.item().stackable {
            vec![self.stack.with_value(self.count)]
        } else {
            let copies = usize::try_from(self.count.min(Self::MAX_COPIES)).unwrap_or(0);
            vec![self.stack.clone(); copies]
        }
    }

    /// Expands a list of arguments in order.
    #[must_use]
    pub fn expand_all(args: &[ItemStackArg]) -> Vec<ItemStack> {
        args.iter().flat_map(ItemStackArg::expand).collect()
    }
}

/// How much of a stack to take out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    /// Stack size for stackable items, slots for the rest.
    Count(i32),
    /// Every matching slot.
    All,
}

impl Amount {
    /// Whether a removal asking for this amount is satisfied.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Count(n) if n <= 0)
    }

    /// The amount left after taking `n`. `All` stays `All`.
    #[must_use]
    pub fn minus(self, n: i32) -> Self {
        match self {
            Self::Count(count) => Self::Count(count.saturating_sub(n)),
            Self::All => Self::All,
        }
    }
}

impl From<i32> for Amount {
    fn from(count: i32) -> Self {
        Self::Count(count)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// A resolved item and how much of it to take out, as written in a removing
/// command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveArg {
    /// The resolved stack (metadata already applied).
    pub stack: ItemStack,
    /// How much to take.
    pub amount: Amount,
}

impl RemoveArg {
    /// Creates an argument.
    #[must_use]
    pub fn new(stack: ItemStack, amount: Amount) -> Self {
        Self { stack, amount }
    }
}
