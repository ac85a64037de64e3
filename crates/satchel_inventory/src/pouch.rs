//! The visible inventory ("pouch").
//!
//! The pouch holds every slot the player sees plus an offset: the number of
//! broken slots the game no longer counts. `m_count` is what the game thinks
//! the inventory size is and may drop to zero or below.

use log::warn;
use satchel_foundation::{Amount, Item, ItemStack, ItemType, MetaOption, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::display::SlotDisplay;
use crate::flags::GameFlags;
use crate::game_data::GameData;
use crate::remove::RemoveOptions;
use crate::slots::Slots;

/// Types cleared when entering a trial.
const TRIAL_CLEARED: [ItemType; 9] = [
    ItemType::Weapon,
    ItemType::Bow,
    ItemType::Arrow,
    ItemType::Shield,
    ItemType::ArmorUpper,
    ItemType::ArmorMiddle,
    ItemType::ArmorLower,
    ItemType::Material,
    ItemType::Food,
];

/// Runtime inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleInventory {
    slots: Slots,
    offset: i64,
}

impl VisibleInventory {
    /// Creates an empty pouch with offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pouch from slots with offset 0.
    #[must_use]
    pub fn with_slots(slots: Slots) -> Self {
        Self { slots, offset: 0 }
    }

    /// The slots.
    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Number of items the game tracks.
    #[must_use]
    pub fn m_count(&self) -> i64 {
        self.slots.count().saturating_sub(self.offset)
    }

    /// Number of broken slots.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Adds `delta` broken slots.
    pub fn modify_offset(&mut self, delta: i64) {
        self.offset = self.offset.saturating_add(delta);
    }

    /// Appends without game logic.
    pub fn add_directly(&mut self, stack: ItemStack) {
        self.slots.add_directly(stack);
    }

    /// Inserts without game logic.
    pub fn insert_directly(&mut self, index: usize, stacks: impl IntoIterator<Item = ItemStack>) {
        self.slots.insert_directly(index, stacks);
    }

    /// Adds a stack during a save load. Food takes the cook data of
    /// `cook_source`.
    pub fn add_when_reload(
        &mut self,
        stack: ItemStack,
        cook_source: &ItemStack,
        last_added: Option<usize>,
        flags: &GameFlags,
    ) -> Option<usize> {
        let stack = if stack.item_type() == ItemType::Food {
            stack.with_cook_data_from(cook_source)
        } else {
            stack
        };
        let m_count = self.m_count();
        self.slots.add(stack, true, m_count, flags, last_added)
    }

    /// Adds a stack in game.
    pub fn add_in_game(&mut self, stack: ItemStack, flags: &GameFlags) {
        let m_count = self.m_count();
        self.slots.add(stack, false, m_count, flags, None);
    }

    /// Sells or drops. Returns the number removed.
    pub fn remove(&mut self, stack: &ItemStack, amount: Amount, start_slot: usize) -> i32 {
        self.slots.remove(stack, amount, RemoveOptions::from_slot(start_slot))
    }

    /// Eats. Food counts as stackable and emptied slots are deleted.
    pub fn eat(&mut self, stack: &ItemStack, amount: Amount, start_slot: usize) -> i32 {
        self.slots.remove(stack, amount, RemoveOptions::eat(start_slot))
    }

    /// Equips the `slot`-th occurrence of `item`.
    pub fn equip(&mut self, item: &Item, slot: usize) {
        let m_count = self.m_count();
        self.slots.equip(item, slot, m_count);
    }

    /// Unequips `item`; `None` picks the first equipped occurrence.
    pub fn unequip(&mut self, item: &Item, slot: Option<usize>) {
        self.slots.unequip(item, slot);
    }

    /// Writes metadata onto the `slot`-th occurrence of `item`.
    pub fn set_metadata(&mut self, item: &Item, slot: usize, meta: &MetaOption) -> bool {
        self.slots.set_metadata(item, slot, meta)
    }

    /// Exchanges two slots. Out-of-range indices change nothing.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        self.slots.swap(i, j)
    }

    /// Stable-sorts the material slots.
    pub fn sort_material(&mut self) {
        self.slots.sort_material();
    }

    /// Drops the first `m_count` slots, keeping broken slots.
    pub fn clear_for_reload(&mut self) {
        let count = self.m_count();
        if count > 0 {
            self.slots.clear_first(usize::try_from(count).unwrap_or(usize::MAX));
        }
    }

    /// Keeps key items only.
    pub fn clear_for_trial(&mut self) {
        self.slots.remove_all(&TRIAL_CLEARED);
    }

    /// Removes every slot whose type is in `types`.
    pub fn remove_all(&mut self, types: &[ItemType]) {
        self.slots.remove_all(types);
    }

    /// Unequips every slot whose type is in `types`.
    pub fn unequip_all(&mut self, types: &[ItemType]) {
        self.slots.unequip_all(types);
    }

    /// Writes the durability of the last equipped weapon, bow and shield to
    /// the first equipped slot of that type in game data.
    ///
    /// A slot game data does not have is logged and skipped.
    pub fn update_equipment_durability(&self, game_data: &mut GameData) {
        for item_type in [ItemType::Weapon, ItemType::Bow, ItemType::Shield] {
            let first = self
                .slots
                .iter()
                .position(|stack| stack.equipped() && stack.item_type() == item_type);
            let last = self.slots.find_last_equipped_slot(item_type);
            let (Some(first), Some(last)) = (first, last) else {
                continue;
            };
            let Some(life) = self.slots.get(last).map(ItemStack::value) else {
                continue;
            };
            if let Err(err) = game_data.update_life(life, first) {
                warn!("skipped {item_type} durability update: {err}");
            }
        }
    }

    /// Shoots arrows and patches the same slot in game data.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when game data has no such slot.
    pub fn shoot_arrow(&mut self, count: i32, game_data: &mut GameData) -> Result<()> {
        let Some(slot) = self.slots.shoot_arrow(count) else {
            return Ok(());
        };
        let value = self.slots.get(slot).map_or(0, ItemStack::value);
        game_data.update_life(value, slot)
    }

    /// Display views. Slots past `m_count` show as broken.
    #[must_use]
    pub fn displayed_slots(&self, is_icon_animated: bool) -> Vec<SlotDisplay> {
        let m_count = self.m_count();
        self.slots
            .iter()
            .enumerate()
            .map(|(i, stack)| {
                let broken = i64::try_from(i).unwrap_or(i64::MAX) >= m_count;
                SlotDisplay::new(stack, broken, is_icon_animated)
            })
            .collect()
    }

    /// One line per slot.
    #[must_use]
    pub fn dump(&self) -> Vec<String> {
        self.slots.dump()
    }
}
