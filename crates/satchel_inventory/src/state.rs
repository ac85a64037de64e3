//! Simulation state: the root aggregate advanced one command at a time.

use std::collections::BTreeMap;

use log::debug;
use satchel_foundation::{Amount, Item, ItemStack, ItemStackArg, ItemType, MetaOption, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::GameFlag;
use crate::game_data::GameData;
use crate::pouch::VisibleInventory;

/// Game data, pouch, and saves.
///
/// Cloning yields a fully independent copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationState {
    game_data: GameData,
    pouch: VisibleInventory,
    manual_save: Option<GameData>,
    named_saves: BTreeMap<String, GameData>,
    next_reload_name: Option<String>,
    in_trial: bool,
}

impl SimulationState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Game data.
    #[must_use]
    pub fn game_data(&self) -> &GameData {
        &self.game_data
    }

    /// Visible inventory.
    #[must_use]
    pub fn pouch(&self) -> &VisibleInventory {
        &self.pouch
    }

    /// The manual save, if any.
    #[must_use]
    pub fn manual_save(&self) -> Option<&GameData> {
        self.manual_save.as_ref()
    }

    /// Named saves by name.
    #[must_use]
    pub fn named_saves(&self) -> &BTreeMap<String, GameData> {
        &self.named_saves
    }

    /// Save used by the next unnamed reload.
    #[must_use]
    pub fn next_reload_name(&self) -> Option<&str> {
        self.next_reload_name.as_deref()
    }

    /// Whether a trial is active.
    #[must_use]
    pub fn is_in_trial(&self) -> bool {
        self.in_trial
    }

    /// Replaces the pouch with `stacks` added directly, then syncs.
    pub fn initialize(&mut self, stacks: Vec<ItemStack>) {
        self.pouch = VisibleInventory::new();
        for stack in stacks {
            self.pouch.add_directly(stack);
        }
        self.game_data.sync_with(&self.pouch);
    }

    /// Replaces the game data slots. The pouch is untouched.
    pub fn init_game_data(&mut self, stacks: Vec<ItemStack>) {
        self.game_data.set_slots(stacks.into());
    }

    /// Copies game data into the manual save or a named save.
    pub fn save(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                self.named_saves.insert(name.to_string(), self.game_data.clone());
            }
            None => self.manual_save = Some(self.game_data.clone()),
        }
    }

    /// Reloads a named save, else the next-reload save, else the manual
    /// save. Returns false and changes nothing if that save does not exist.
    pub fn reload(&mut self, name: Option<&str>) -> bool {
        let save = match name.or(self.next_reload_name.as_deref()) {
            Some(name) => self.named_saves.get(name),
            None => self.manual_save.as_ref(),
        };
        let Some(save) = save.cloned() else {
            debug!("reload skipped: save {name:?} not found");
            return false;
        };
        self.reload_from(save);
        true
    }

    fn reload_from(&mut self, data: GameData) {
        debug!("reloading {} slots", data.slots().len());
        self.game_data = data;
        self.pouch.clear_for_reload();
        self.game_data.add_all_to_pouch_on_reload(&mut self.pouch);
        self.pouch.update_equipment_durability(&mut self.game_data);
        self.in_trial = false;
    }

    /// Makes the next unnamed reload use the named save.
    pub fn use_save_for_next_reload(&mut self, name: &str) {
        self.next_reload_name = Some(name.to_string());
    }

    /// Marks `count` more slots as broken.
    pub fn break_slots(&mut self, count: i64) {
        self.pouch.modify_offset(count);
    }

    /// Adds stacks in game, then syncs.
    pub fn obtain(&mut self, stacks: Vec<ItemStack>) {
        let flags = *self.game_data.flags();
        for stack in stacks {
            self.pouch.add_in_game(stack, &flags);
        }
        self.sync_game_data();
    }

    /// Removes `amount` of `stack` starting from the `slot`-th match, then
    /// syncs. Returns how many were removed.
    pub fn remove(&mut self, stack: &ItemStack, amount: Amount, slot: usize) -> i32 {
        let removed = self.pouch.remove(stack, amount, slot);
        self.sync_game_data();
        removed
    }

    /// Eats `amount` of `stack`, then syncs.
    pub fn eat(&mut self, stack: &ItemStack, amount: Amount, slot: usize) -> i32 {
        let removed = self.pouch.eat(stack, amount, slot);
        self.sync_game_data();
        removed
    }

    /// Drops `amount` of `stack` and picks the dropped items back up.
    pub fn drop_and_pick_up(&mut self, stack: &ItemStack, amount: Amount, slot: usize) -> i32 {
        let removed = self.remove(stack, amount, slot);
        if removed > 0 {
            self.obtain(ItemStackArg::new(stack.clone(), removed).expand());
        }
        removed
    }

    /// Removes every pouch slot whose type is in `types`, then syncs.
    pub fn remove_all(&mut self, types: &[ItemType]) {
        self.pouch.remove_all(types);
        self.sync_game_data();
    }

    /// Unequips every pouch slot whose type is in `types`, then syncs.
    pub fn unequip_all(&mut self, types: &[ItemType]) {
        self.pouch.unequip_all(types);
        self.sync_game_data();
    }

    /// Equips, then syncs.
    pub fn equip(&mut self, item: &Item, slot: usize) {
        self.pouch.equip(item, slot);
        self.sync_game_data();
    }

    /// Unequips, then syncs.
    pub fn unequip(&mut self, item: &Item, slot: Option<usize>) {
        self.pouch.unequip(item, slot);
        self.sync_game_data();
    }

    /// Shoots arrows. Game data is patched, not synced.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when game data has no slot for the arrow.
    pub fn shoot_arrow(&mut self, count: i32) -> Result<()> {
        self.pouch.shoot_arrow(count, &mut self.game_data)
    }

    /// Writes metadata onto the `slot`-th occurrence of the stack's item, or
    /// appends the stack with the metadata applied. Does not sync.
    pub fn write_metadata(&mut self, stack: &ItemStack, slot: usize, meta: &MetaOption) {
        if !self.pouch.set_metadata(stack.item(), slot, meta) {
            self.pouch.add_directly(stack.modify_meta(meta));
        }
    }

    /// Swaps two pouch slots. Out-of-range indices change nothing.
    pub fn swap_slots(&mut self, i: usize, j: usize) {
        if !self.pouch.swap(i, j) {
            debug!("swap {i} {j} ignored: out of range");
        }
    }

    /// Stable-sorts the material slots of the pouch.
    pub fn sort_material(&mut self) {
        self.pouch.sort_material();
    }

    /// Inserts stacks into the pouch at `index` without game logic.
    pub fn insert_slots(&mut self, index: usize, stacks: Vec<ItemStack>) {
        self.pouch.insert_directly(index, stacks);
    }

    /// Wipes the pouch and game data and leaves any trial.
    pub fn close_game(&mut self) {
        self.pouch = VisibleInventory::new();
        self.game_data = GameData::new();
        self.in_trial = false;
    }

    /// Enters or leaves a trial. Entering keeps only key items in the pouch;
    /// leaving reloads the pouch from game data.
    pub fn set_trial(&mut self, active: bool) {
        if self.in_trial == active {
            return;
        }
        if active {
            debug!("entering trial");
            self.pouch.clear_for_trial();
        } else {
            debug!("leaving trial");
            self.reload_from(self.game_data.clone());
        }
        self.in_trial = active;
    }

    /// Syncs game data with the pouch unless a trial is active.
    pub fn sync_game_data(&mut self) {
        if !self.in_trial {
            self.game_data.sync_with(&self.pouch);
        }
    }

    /// Sets a game flag.
    pub fn set_flag(&mut self, flag: GameFlag, value: i32) {
        self.game_data.set_flag(flag, value);
    }
}
