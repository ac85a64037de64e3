//! Integration tests for items, the registry, modifiers and resolution.

use satchel_foundation::{
    CookEffect, ItemData, ItemRegistry, ItemResolver, ItemTab, ItemType, MASTER_SWORD, Modifier,
    NoItems, WeaponModifier, normalize_query,
};

// =============================================================================
// Item Types
// =============================================================================

#[test]
fn type_inferred_from_name_prefix() {
    assert_eq!(ItemData::type_from_name("ArrowA"), ItemType::Arrow);
    assert_eq!(ItemData::type_from_name("MaterialB"), ItemType::Material);
    assert_eq!(ItemData::type_from_name("FoodC"), ItemType::Food);
    assert_eq!(ItemData::type_from_name("KeyA"), ItemType::Key);
    assert_eq!(ItemData::type_from_name("WeaponA"), ItemType::Weapon);
    assert_eq!(ItemData::type_from_name("BowA"), ItemType::Bow);
    assert_eq!(ItemData::type_from_name("ShieldA"), ItemType::Shield);
    assert_eq!(ItemData::type_from_name("ArmorUpperA"), ItemType::ArmorUpper);
    assert_eq!(ItemData::type_from_name("ArmorMiddleA"), ItemType::ArmorMiddle);
    assert_eq!(ItemData::type_from_name("ArmorLowerA"), ItemType::ArmorLower);
    assert_eq!(ItemData::type_from_name(MASTER_SWORD), ItemType::Weapon);
    assert_eq!(ItemData::type_from_name("Rock"), ItemType::Material);
}

#[test]
fn tabs_order_like_the_game() {
    let tabs: Vec<ItemTab> = ItemType::ALL.iter().map(|t| t.tab()).collect();
    let mut sorted = tabs.clone();
    sorted.sort();
    assert_eq!(tabs, sorted);
    assert_eq!(ItemType::Arrow.tab(), ItemType::Bow.tab());
}

#[test]
fn type_defaults() {
    let material = ItemData::new("MaterialA", ItemType::Material);
    assert!(material.stackable);
    assert!(material.repeatable);

    let key = ItemData::new("KeyA", ItemType::Key);
    assert!(!key.stackable);
    assert!(!key.repeatable);

    let sword = ItemData::new(MASTER_SWORD, ItemType::Weapon);
    assert!(!sword.repeatable);
}

// =============================================================================
// Registry and Resolution
// =============================================================================

#[test]
fn registry_sort_order_is_registration_order() {
    let registry = ItemRegistry::from_names(["MaterialB", "MaterialA"]);
    assert_eq!(registry.lookup("materialb").unwrap().sort_order, 0);
    assert_eq!(registry.lookup("materiala").unwrap().sort_order, 1);
}

#[test]
fn registry_ignores_duplicates() {
    let registry = ItemRegistry::from_names(["MaterialA", "materiala", "MATERIALA"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_normalizes() {
    let registry = ItemRegistry::from_names(["WeaponA"]);
    assert!(registry.lookup("WEAPONA").is_some());
    assert!(registry.lookup("weapon*a").is_some());
    assert_eq!(normalize_query("Weap*onA"), "weapona");
}

#[test]
fn lookup_ignores_whitespace() {
    let registry = ItemRegistry::from_names(["WeaponA"]);
    assert!(registry.lookup("Weapon A").is_some());
    assert_eq!(normalize_query(" Mate ria\tlA "), "materiala");
    assert!(normalize_query("  ").is_empty());
}

#[test]
fn resolver_returns_default_stack() {
    let registry = ItemRegistry::from_names(["MaterialA"]);
    let stack = registry.search_item("materiala").unwrap();
    assert_eq!(stack.value(), 1);
    assert!(!stack.equipped());
    assert!(registry.search_item("").is_none());
    assert!(registry.search_item("mysterybox").is_none());
}

#[test]
fn no_items_resolves_nothing() {
    assert!(NoItems.search_item("materiala").is_none());
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn weapon_modifiers_win_over_cook_effects() {
    assert_eq!(
        Modifier::from_prefix("attack"),
        Some(Modifier::Weapon(WeaponModifier::AttackUp))
    );
    assert_eq!(
        Modifier::from_prefix("Mighty"),
        Some(Modifier::Cook(CookEffect::Mighty))
    );
    assert_eq!(Modifier::from_prefix("qqq"), None);
}

#[test]
fn weapon_modifier_bits_are_distinct() {
    let mut bits: Vec<i64> = WeaponModifier::ALL.iter().map(|m| m.bits()).collect();
    bits.dedup();
    assert_eq!(bits.len(), WeaponModifier::ALL.len());
}
