//! Game data: the persisted inventory and flags.

use log::debug;
use satchel_foundation::{ItemType, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::display::SlotDisplay;
use crate::flags::{GameFlag, GameFlags};
use crate::pouch::VisibleInventory;
use crate::slots::Slots;

/// The inventory as the save file sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameData {
    slots: Slots,
    flags: GameFlags,
}

impl GameData {
    /// Creates game data with empty slots and default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates game data from slots and flags.
    #[must_use]
    pub fn with_slots(slots: Slots, flags: GameFlags) -> Self {
        Self { slots, flags }
    }

    /// The slots.
    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Replaces the slots.
    pub fn set_slots(&mut self, slots: Slots) {
        self.slots = slots;
    }

    /// The flags.
    #[must_use]
    pub fn flags(&self) -> &GameFlags {
        &self.flags
    }

    /// Reads one flag.
    #[must_use]
    pub fn flag(&self, flag: GameFlag) -> i32 {
        self.flags.get(flag)
    }

    /// Writes one flag.
    pub fn set_flag(&mut self, flag: GameFlag, value: i32) {
        self.flags.set(flag, value);
    }

    /// Copies the pouch slots, or wipes the slots when the pouch count is
    /// zero or negative.
    pub fn sync_with(&mut self, pouch: &VisibleInventory) {
        if pouch.m_count() <= 0 {
            debug!("game data nuked (m_count = {})", pouch.m_count());
            self.slots = Slots::new();
        } else {
            self.slots = pouch.slots().clone();
        }
    }

    /// Ordered structural equality of the slots.
    #[must_use]
    pub fn is_synced_with(&self, pouch: &VisibleInventory) -> bool {
        self.slots == *pouch.slots()
    }

    /// Sets the value of one slot.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when `slot` does not exist.
    pub fn update_life(&mut self, life: i32, slot: usize) -> Result<()> {
        self.slots.update_life(life, slot)
    }

    /// Replays every slot into the pouch the way a save load does.
    ///
    /// Food takes its cook data from a running food index. The index only
    /// advances after a food while an add has registered as last added, so a
    /// skipped food shifts the cook data of every food after it.
    pub fn add_all_to_pouch_on_reload(&self, pouch: &mut VisibleInventory) {
        let all_food: Vec<_> = self
            .slots
            .iter()
            .filter(|stack| stack.item_type() == ItemType::Food)
            .collect();
        let mut next_food = 0;
        let mut last_added = None;
        for stack in &self.slots {
            let is_food = stack.item_type() == ItemType::Food;
            let cook_source = if is_food {
                all_food.get(next_food).copied().unwrap_or(stack)
            } else {
                stack
            };
            last_added = pouch.add_when_reload(stack.clone(), cook_source, last_added, &self.flags);
            if last_added.is_some() && is_food {
                next_food += 1;
            }
        }
    }

    /// Display views of every slot. Game data has no broken slots.
    #[must_use]
    pub fn displayed_slots(&self, is_icon_animated: bool) -> Vec<SlotDisplay> {
        self.slots
            .iter()
            .map(|stack| SlotDisplay::new(stack, false, is_icon_animated))
            .collect()
    }

    /// One line per slot.
    #[must_use]
    pub fn dump(&self) -> Vec<String> {
        self.slots.dump()
    }
}
