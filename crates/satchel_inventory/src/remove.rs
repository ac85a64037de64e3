//! Removing stacks from slots.
//!
//! Removal is not a game routine; it is the simulator's way of taking items
//! out. Stacks that match the request more precisely are consumed first.

use satchel_foundation::{Amount, ItemStack, ItemType};

use crate::slots::Slots;

/// Options for [`Slots::remove`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Which matched slot to start from (0-based). Processing wraps around.
    pub start_slot: usize,
    /// Treat food as stackable (eating).
    pub force_stackable_food: bool,
    /// Delete slots that reach zero, arrows included.
    pub force_delete_zero_slot: bool,
}

impl RemoveOptions {
    /// Options for selling or dropping, starting at `start_slot`.
    #[must_use]
    pub fn from_slot(start_slot: usize) -> Self {
        Self {
            start_slot,
            ..Self::default()
        }
    }

    /// Options for eating, starting at `start_slot`.
    #[must_use]
    pub fn eat(start_slot: usize) -> Self {
        Self {
            start_slot,
            force_stackable_food: true,
            force_delete_zero_slot: true,
        }
    }
}

type Matcher = fn(&ItemStack, &ItemStack) -> bool;

const MATCHERS: [Matcher; 4] = [
    |slot, target| slot == target,
    ItemStack::equals_except_value,
    ItemStack::equals_except_value_and_equipped,
    ItemStack::same_item,
];

impl Slots {
    /// Removes `amount` of `target`, returning how many were removed.
    ///
    /// Stackable slots give up part of their value; unstackable slots count
    /// as one each. `Amount::All` empties every matched slot. Emptied slots
    /// are deleted, except arrows unless `force_delete_zero_slot` is set.
    pub fn remove(&mut self, target: &ItemStack, amount: Amount, options: RemoveOptions) -> i32 {
        let is_stackable = |stack: &ItemStack| {
            stack.item().stackable
                || (options.force_stackable_food && stack.item_type() == ItemType::Food)
        };

        let mut order: Vec<usize> = Vec::new();
        for matcher in MATCHERS {
            let matched: Vec<usize> = self
                .iter()
                .enumerate()
                .filter(|(_, stack)| matcher(stack, target))
                .map(|(i, _)| i)
                .collect();
            if options.start_slot >= matched.len() {
                continue;
            }
            order.extend(matched[options.start_slot..].iter().chain(&matched[..options.start_slot]));
        }

        let mut values: Vec<i32> = self.iter().map(ItemStack::value).collect();
        let mut deleted = vec![false; values.len()];
        let mut count_left = amount;
        let mut removed: i32 = 0;

        for index in order {
            if count_left.is_exhausted() {
                break;
            }
            let Some(stack) = self.get(index) else {
                continue;
            };
            if deleted[index] {
                continue;
            }
            if is_stackable(stack) {
                let value = values[index];
                if value == 0 {
                    continue;
                }
                match count_left {
                    Amount::Count(left) if value > left => {
                        removed = removed.saturating_add(left);
                        values[index] = value - left;
                        count_left = Amount::Count(0);
                    }
                    _ => {
                        removed = removed.saturating_add(value);
                        count_left = count_left.minus(value);
                        values[index] = 0;
                        if options.force_delete_zero_slot {
                            deleted[index] = true;
                        }
                    }
                }
            } else {
                removed = removed.saturating_add(1);
                count_left = count_left.minus(1);
                deleted[index] = true;
            }
        }

        let mut remaining = Vec::with_capacity(values.len());
        for ((stack, value), deleted) in self.iter().zip(values).zip(deleted) {
            let emptied =
                value == 0 && stack.item_type() != ItemType::Arrow && is_stackable(stack);
            if deleted || emptied {
                continue;
            }
            if value == stack.value() {
                remaining.push(stack.clone());
            } else {
                remaining.push(stack.with_value(value));
            }
        }
        *self = remaining.into();
        removed
    }
}
