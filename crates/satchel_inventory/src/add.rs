//! Adding a stack to slots, in game or while a save is loading.

use log::trace;
use satchel_foundation::{ItemStack, ItemType, MASTER_SWORD};

use crate::flags::GameFlags;
use crate::slots::Slots;

/// Largest value a stackable slot reaches through merging.
pub const STACK_CAP: i32 = 999;

/// Maximum number of slots of one tab (arrows counted on their own).
fn tab_limit(item_type: ItemType, flags: &GameFlags) -> usize {
    let flag_limit = |n: i32| usize::try_from(n).unwrap_or(0);
    match item_type {
        ItemType::Weapon => flag_limit(flags.weapon_slots).min(20),
        ItemType::Bow => flag_limit(flags.bow_slots).min(14),
        ItemType::Arrow => 6,
        ItemType::Shield => flag_limit(flags.shield_slots).min(20),
        ItemType::ArmorUpper | ItemType::ArmorMiddle | ItemType::ArmorLower => 100,
        ItemType::Material => 160,
        ItemType::Food => 60,
        ItemType::Key => 40,
    }
}

fn same_limit_group(a: ItemType, b: ItemType) -> bool {
    (a == ItemType::Arrow) == (b == ItemType::Arrow) && a.tab() == b.tab()
}

impl Slots {
    /// Adds a stack the way the game does.
    ///
    /// `m_count` is the item count before the add. `last_added` is the slot
    /// of the previously added item and is returned unchanged when nothing
    /// is added. A new slot returns its index after sorting. Returns `None`
    /// when a broken Master Sword resets its existing slot.
    pub fn add(
        &mut self,
        stack: ItemStack,
        reloading: bool,
        m_count: i64,
        flags: &GameFlags,
        last_added: Option<usize>,
    ) -> Option<usize> {
        let mut stack = stack;
        let mut adding_new_slot = true;

        if stack.item().stackable {
            let mut cap_at_999 = true;
            if stack.item_type() == ItemType::Arrow {
                let first_arrow = self
                    .find_first_tab(ItemType::Arrow, m_count)
                    .and_then(|i| self.get(i));
                if first_arrow.is_none_or(|arrow| arrow.value() == 0) {
                    cap_at_999 = false;
                }
            }
            let existing = self
                .iter()
                .enumerate()
                .find(|(_, s)| s.item() == stack.item())
                .map(|(i, s)| (i, s.value()));
            if let Some((index, value)) = existing {
                if !reloading {
                    let merged = value.saturating_add(stack.value()).min(STACK_CAP);
                    if merged != value {
                        self.modify_slot(index, |s| s.with_value(merged));
                    }
                    trace!("merged {} into slot {index}", stack.item().id);
                    return last_added;
                }
                if cap_at_999 && value.saturating_add(stack.value()) > STACK_CAP {
                    trace!("skipped {}: would exceed {STACK_CAP}", stack.item().id);
                    return last_added;
                }
                adding_new_slot = false;
            }
        }

        if !stack.item().repeatable {
            if let Some(head) = self.find_first_tab(stack.item_type(), m_count) {
                let item_type = stack.item_type();
                let found = self
                    .iter()
                    .enumerate()
                    .skip(head)
                    .take_while(|(_, s)| s.item_type() == item_type)
                    .find(|(_, s)| s.item() == stack.item())
                    .map(|(i, _)| i);
                if let Some(index) = found {
                    if item_type == ItemType::Weapon
                        && stack.item().id == MASTER_SWORD
                        && stack.value() <= 0
                    {
                        self.modify_slot(index, |s| s.with_value(0).with_equipped(false));
                        return None;
                    }
                    trace!("skipped {}: already in first tab", stack.item().id);
                    return last_added;
                }
            }
        }

        if !reloading && is_auto_equip_type(stack.item_type()) {
            let item_type = stack.item_type();
            let should_equip = {
                let mut equipped = self
                    .iter()
                    .filter(|s| s.item_type() == item_type && s.equipped());
                if item_type == ItemType::Arrow {
                    equipped.all(|s| s.value() <= 0)
                } else {
                    equipped.next().is_none()
                }
            };
            if should_equip {
                stack = stack.with_equipped(true);
                if item_type == ItemType::Arrow {
                    self.unequip_first_tab_arrows(m_count);
                }
            }
        }

        if reloading && adding_new_slot {
            let item_type = stack.item_type();
            let current = self
                .iter()
                .filter(|s| same_limit_group(s.item_type(), item_type))
                .count();
            if current >= tab_limit(item_type, flags) {
                trace!("skipped {}: tab full", stack.item().id);
                return last_added;
            }
        }

        self.add_directly(stack);
        let new_index = self.len() - 1;
        if m_count > 0 {
            self.sort_by_tab_tracking(Some(new_index))
        } else {
            Some(new_index)
        }
    }

    fn unequip_first_tab_arrows(&mut self, m_count: i64) {
        let Some(head) = self.find_first_tab(ItemType::Arrow, m_count) else {
            return;
        };
        let mut i = head;
        while self.get(i).is_some_and(|s| s.item_type() == ItemType::Arrow) {
            self.modify_slot(i, |s| s.with_equipped(false));
            i += 1;
        }
    }
}

fn is_auto_equip_type(item_type: ItemType) -> bool {
    item_type.is_equipment() || item_type == ItemType::Arrow
}
