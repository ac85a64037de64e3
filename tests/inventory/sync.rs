//! Integration tests for game data sync and reload replay.

use proptest::prelude::*;
use satchel_foundation::{ItemRegistry, ItemStack};
use satchel_inventory::{GameData, GameFlags, Slots, VisibleInventory};

const NAMES: [&str; 5] = ["MaterialA", "MaterialB", "WeaponA", "FoodA", "KeyA"];

fn registry() -> ItemRegistry {
    ItemRegistry::from_names(NAMES)
}

fn pouch(r: &ItemRegistry, picks: &[(usize, i32)], offset: i64) -> VisibleInventory {
    let slots: Slots = picks
        .iter()
        .map(|(name, value)| ItemStack::new(r.lookup(NAMES[*name]).unwrap().clone()).with_value(*value))
        .collect();
    let mut pouch = VisibleInventory::with_slots(slots);
    pouch.modify_offset(offset);
    pouch
}

proptest! {
    #[test]
    fn sync_is_idempotent(
        picks in proptest::collection::vec((0usize..5, 1i32..50), 0..15),
        offset in 0i64..20,
    ) {
        let r = registry();
        let pouch = pouch(&r, &picks, offset);
        let mut once = GameData::new();
        once.sync_with(&pouch);
        let mut twice = once.clone();
        twice.sync_with(&pouch);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sync_nukes_without_counted_items(
        picks in proptest::collection::vec((0usize..5, 1i32..50), 0..15),
        offset in 0i64..20,
    ) {
        let r = registry();
        let pouch = pouch(&r, &picks, offset);
        let mut data = GameData::new();
        data.sync_with(&pouch);
        if pouch.m_count() <= 0 {
            prop_assert!(data.slots().is_empty());
        } else {
            prop_assert!(data.is_synced_with(&pouch));
        }
    }
}

#[test]
fn sync_copies_are_independent() {
    let r = registry();
    let mut pouch = pouch(&r, &[(0, 3)], 0);
    let mut data = GameData::new();
    data.sync_with(&pouch);
    pouch.add_directly(ItemStack::new(r.lookup("MaterialB").unwrap().clone()));
    assert_eq!(data.slots().len(), 1);
    assert!(!data.is_synced_with(&pouch));
}

#[test]
fn reload_replays_into_pouch() {
    let r = registry();
    let source = pouch(&r, &[(2, 100), (0, 5), (3, 1)], 0);
    let mut data = GameData::new();
    data.sync_with(&source);

    let mut fresh = VisibleInventory::new();
    data.add_all_to_pouch_on_reload(&mut fresh);
    assert_eq!(fresh.slots().len(), 3);
    assert!(data.is_synced_with(&fresh));
}

#[test]
fn reload_respects_weapon_slot_flag() {
    let r = registry();
    let weapons: Vec<ItemStack> = (0..5)
        .map(|_| ItemStack::new(r.lookup("WeaponA").unwrap().clone()))
        .collect();
    let mut flags = GameFlags::default();
    flags.weapon_slots = 3;
    let data = GameData::with_slots(weapons.into(), flags);

    let mut fresh = VisibleInventory::new();
    data.add_all_to_pouch_on_reload(&mut fresh);
    assert_eq!(fresh.slots().len(), 3);
}
