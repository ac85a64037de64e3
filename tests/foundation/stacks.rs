//! Integration tests for item stacks and stack arguments.

use proptest::prelude::*;
use satchel_foundation::{
    CookEffect, ItemData, ItemRegistry, ItemStack, ItemStackArg, ItemType, MetaOption,
};

fn registry() -> ItemRegistry {
    ItemRegistry::from_names(["MaterialA", "WeaponA", "FoodA", "ArrowA"])
}

fn stack(registry: &ItemRegistry, name: &str) -> ItemStack {
    ItemStack::new(registry.lookup(name).unwrap().clone())
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn equality_is_structural() {
    let a = ItemStack::new(ItemData::new("FoodA", ItemType::Food).into_item());
    let b = ItemStack::new(ItemData::new("FoodA", ItemType::Food).into_item());
    assert_eq!(a, b);
    assert!(a.same_item(&b));
}

#[test]
fn equality_levels() {
    let r = registry();
    let base = stack(&r, "WeaponA").with_value(500);
    let other_value = base.with_value(100);
    let equipped = other_value.with_equipped(true);

    assert_ne!(base, other_value);
    assert!(base.equals_except_value(&other_value));
    assert!(!base.equals_except_value(&equipped));
    assert!(base.equals_except_value_and_equipped(&equipped));
}

proptest! {
    #[test]
    fn equal_regardless_of_construction(
        value in -1000i32..1000,
        equipped in any::<bool>(),
        hp in proptest::option::of(0i32..120),
        price in proptest::option::of(0i64..5000),
    ) {
        let r = registry();
        let mut option = MetaOption::new().with_life(value).with_equip(equipped);
        if let Some(hp) = hp {
            option = option.with_hp(hp);
        }
        if let Some(price) = price {
            option = option.with_price(price);
        }
        let via_meta = stack(&r, "FoodA").modify_meta(&option);

        let mut direct = stack(&r, "FoodA").with_value(value).with_equipped(equipped);
        if hp.is_some() || price.is_some() {
            direct = direct.modify_meta(&MetaOption { hp, price, ..MetaOption::default() });
        }
        prop_assert_eq!(&via_meta, &direct);
    }
}

// =============================================================================
// Metadata
// =============================================================================

#[test]
fn modify_meta_leaves_absent_fields() {
    let r = registry();
    let food = stack(&r, "FoodA")
        .modify_meta(&MetaOption::new().with_hp(8).with_cook_effect(CookEffect::Hasty));
    let repriced = food.modify_meta(&MetaOption::new().with_price(40));
    assert_eq!(repriced.meta().hp, Some(8));
    assert_eq!(repriced.meta().price, Some(40));
    assert_eq!(repriced.meta().cook_effect, CookEffect::Hasty);
    assert!(MetaOption::new().is_empty());
}

#[test]
fn cook_data_copied_from_source() {
    let r = registry();
    let source = stack(&r, "FoodA").modify_meta(&MetaOption::new().with_hp(12));
    let copy = stack(&r, "FoodA").with_cook_data_from(&source);
    assert_eq!(copy.meta(), source.meta());
}

// =============================================================================
// Stack Arguments
// =============================================================================

#[test]
fn stackable_expands_to_one_slot() {
    let r = registry();
    let slots = ItemStackArg::new(stack(&r, "MaterialA"), 5).expand();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].value(), 5);
}

#[test]
fn unstackable_expands_to_copies() {
    let r = registry();
    let slots = ItemStackArg::new(stack(&r, "FoodA"), 3).expand();
    assert_eq!(slots.len(), 3);
    assert!(slots.iter().all(|s| s.value() == 1));
    assert!(ItemStackArg::new(stack(&r, "FoodA"), -2).expand().is_empty());
}

#[test]
fn expand_all_keeps_order() {
    let r = registry();
    let args = [
        ItemStackArg::new(stack(&r, "ArrowA"), 20),
        ItemStackArg::new(stack(&r, "WeaponA"), 2),
    ];
    let slots = ItemStackArg::expand_all(&args);
    let ids: Vec<&str> = slots.iter().map(|s| s.item().id.as_str()).collect();
    assert_eq!(ids, ["ArrowA", "WeaponA", "WeaponA"]);
}

#[test]
fn display_formats() {
    let r = registry();
    assert_eq!(stack(&r, "MaterialA").with_value(3).to_string(), "3x MaterialA");
    assert_eq!(
        stack(&r, "WeaponA").with_value(250).with_equipped(true).to_string(),
        "WeaponA (durability 2.5) [equipped]"
    );
}
