//! Integration tests for slot operations.

use proptest::prelude::*;
use satchel_foundation::{ItemRegistry, ItemStack, ItemType};
use satchel_inventory::{GameFlags, Slots};

fn registry() -> ItemRegistry {
    ItemRegistry::from_names([
        "MaterialA",
        "MaterialB",
        "MaterialC",
        "WeaponA",
        "BowA",
        "ArrowA",
        "FoodA",
        "KeyA",
    ])
}

fn stack(r: &ItemRegistry, name: &str) -> ItemStack {
    ItemStack::new(r.lookup(name).unwrap().clone())
}

fn ids(slots: &Slots) -> Vec<String> {
    slots.iter().map(|s| s.item().id.clone()).collect()
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn sort_material_leaves_other_slots() {
    let r = registry();
    let mut slots: Slots = vec![
        stack(&r, "MaterialC"),
        stack(&r, "WeaponA"),
        stack(&r, "MaterialA"),
        stack(&r, "FoodA"),
        stack(&r, "MaterialB"),
    ]
    .into();
    slots.sort_material();
    assert_eq!(
        ids(&slots),
        ["MaterialA", "WeaponA", "MaterialB", "FoodA", "MaterialC"]
    );
}

proptest! {
    #[test]
    fn sort_material_is_stable(values in proptest::collection::vec((0usize..3, 1i32..999), 0..20)) {
        let r = registry();
        let names = ["MaterialA", "MaterialB", "MaterialC"];
        let mut slots: Slots = values
            .iter()
            .map(|(name, value)| stack(&r, names[*name]).with_value(*value))
            .collect();
        slots.sort_material();

        // Equal keys keep their original relative order.
        let mut expected = values.clone();
        expected.sort_by_key(|(name, _)| *name);
        let actual: Vec<(usize, i32)> = slots
            .iter()
            .map(|s| (usize::try_from(s.item().sort_order).unwrap(), s.value()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn swap_twice_is_identity(len in 1usize..12, i in 0usize..12, j in 0usize..12) {
        let r = registry();
        let original: Slots = (0..len)
            .map(|v| stack(&r, "MaterialA").with_value(i32::try_from(v).unwrap()))
            .collect();
        let mut slots = original.clone();
        let swapped = slots.swap(i, j);
        prop_assert_eq!(swapped, i < len && j < len);
        slots.swap(i, j);
        prop_assert_eq!(slots, original);
    }
}

#[test]
fn sort_by_tab_puts_bow_before_arrow() {
    let r = registry();
    let mut slots: Slots = vec![
        stack(&r, "MaterialA"),
        stack(&r, "ArrowA"),
        stack(&r, "BowA"),
        stack(&r, "WeaponA"),
    ]
    .into();
    slots.sort_item_by_tab(4);
    assert_eq!(ids(&slots), ["WeaponA", "BowA", "ArrowA", "MaterialA"]);
}

#[test]
fn sort_by_tab_skipped_for_single_item() {
    let r = registry();
    let mut slots: Slots = vec![stack(&r, "MaterialA"), stack(&r, "WeaponA")].into();
    slots.sort_item_by_tab(1);
    assert_eq!(ids(&slots), ["MaterialA", "WeaponA"]);
}

// =============================================================================
// Life Updates
// =============================================================================

#[test]
fn update_life_out_of_range_does_not_mutate() {
    let r = registry();
    let mut slots: Slots = vec![stack(&r, "MaterialA").with_value(4)].into();
    let before = slots.clone();
    let err = slots.update_life(10, 3).unwrap_err();
    assert!(err.is_index_out_of_bounds());
    assert_eq!(slots, before);
}

#[test]
fn update_life_caps_materials_not_arrows() {
    let r = registry();
    let mut slots: Slots = vec![stack(&r, "MaterialA"), stack(&r, "ArrowA")].into();
    slots.update_life(5000, 0).unwrap();
    slots.update_life(5000, 1).unwrap();
    assert_eq!(slots.get(0).unwrap().value(), 999);
    assert_eq!(slots.get(1).unwrap().value(), 5000);
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn in_game_add_auto_equips_first_weapon() {
    let r = registry();
    let mut slots = Slots::new();
    let flags = GameFlags::default();
    slots.add(stack(&r, "WeaponA"), false, 0, &flags, None);
    slots.add(stack(&r, "WeaponA"), false, 1, &flags, None);
    assert!(slots.get(0).unwrap().equipped());
    assert!(!slots.get(1).unwrap().equipped());
}

#[test]
fn key_items_are_not_repeatable() {
    let r = registry();
    let mut slots = Slots::new();
    let flags = GameFlags::default();
    slots.add(stack(&r, "KeyA"), false, 0, &flags, None);
    slots.add(stack(&r, "KeyA"), false, 1, &flags, None);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots.get(0).unwrap().item_type(), ItemType::Key);
}

#[test]
fn clear_all_but_key_items() {
    let r = registry();
    let mut slots: Slots = vec![
        stack(&r, "WeaponA"),
        stack(&r, "KeyA"),
        stack(&r, "MaterialA"),
    ]
    .into();
    slots.clear_all_but_key_items();
    assert_eq!(ids(&slots), ["KeyA"]);
}
