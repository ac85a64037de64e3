//! Scripts that exercise game flows end to end.

use satchel_foundation::{ItemRegistry, ItemType};
use satchel_runtime::Session;

fn session() -> Session {
    Session::with_registry(ItemRegistry::from_names([
        "MaterialA",
        "MaterialB",
        "WeaponA",
        "WeaponB",
        "ArrowA",
        "FoodA",
        "KeyA",
    ]))
}

fn ids(session: &Session) -> Vec<String> {
    session
        .state()
        .pouch()
        .slots()
        .iter()
        .map(|s| s.item().id.clone())
        .collect()
}

#[test]
fn swap_on_a_ten_slot_pouch() {
    let mut session = Session::new();
    let names: Vec<String> = (0..10).map(|i| format!("Material{i}")).collect();
    let init: Vec<String> = names.iter().map(|n| format!("1 {n}")).collect();
    let report = session.run_script(&format!("initialize {}\n!swap 5 8", init.join(" ")), None);
    assert!(report.is_clean());

    let mut expected: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    expected.swap(5, 8);
    assert_eq!(ids(&session), expected);
}

#[test]
fn super_commands_skip_sync() {
    let mut session = session();
    session.run_script("initialize 1 materiala 1 materialb\n!swap 0 1", None);
    let state = session.state();
    assert!(!state.game_data().is_synced_with(state.pouch()));

    session.run_line("sync gamedata");
    let state = session.state();
    assert!(state.game_data().is_synced_with(state.pouch()));
}

#[test]
fn reload_restores_the_save() {
    let mut session = session();
    let report = session.run_script(
        "initialize 3 materiala\nsave\nget 2 materialb\nreload",
        None,
    );
    assert!(report.is_clean());
    assert_eq!(ids(&session), ["MaterialA"]);
    assert_eq!(session.state().pouch().slots().get(0).map(|s| s.value()), Some(3));
}

#[test]
fn named_saves_and_use() {
    let mut session = session();
    session.run_script(
        "initialize 1 weapona\nsave as armed\ninitialize 2 materialb\nsave\nuse armed\nreload",
        None,
    );
    assert_eq!(ids(&session), ["WeaponA"]);
    assert_eq!(session.state().next_reload_name(), Some("armed"));
}

#[test]
fn reloading_a_missing_save_changes_nothing() {
    let mut session = session();
    session.run_script("initialize 2 materiala\nreload nowhere", None);
    assert_eq!(ids(&session), ["MaterialA"]);
    assert!(session.history()[1].outcome.is_executed());
}

#[test]
fn trial_keeps_key_items_then_restores() {
    let mut session = session();
    session.run_script("initialize 2 materiala 1 keya\nenter eventide", None);
    assert_eq!(ids(&session), ["KeyA"]);
    assert!(session.state().is_in_trial());

    session.run_line("leave eventide");
    assert!(!session.state().is_in_trial());
    let mut restored = ids(&session);
    restored.sort();
    assert_eq!(restored, ["KeyA", "MaterialA"]);
}

#[test]
fn close_game_wipes_everything() {
    let mut session = session();
    session.run_script("initialize 2 materiala\nclose game", None);
    assert!(session.state().pouch().slots().is_empty());
    assert!(session.state().game_data().slots().is_empty());
}

#[test]
fn obtained_weapon_is_equipped() {
    let mut session = session();
    session.run_script("get weapona\nget weaponb", None);
    let equipped: Vec<bool> = session
        .state()
        .pouch()
        .slots()
        .iter()
        .map(|s| s.equipped())
        .collect();
    assert_eq!(equipped, [true, false]);
}

#[test]
fn unequip_in_slot_one_targets_first_occurrence() {
    let mut session = session();
    let report = session.run_script(
        "initialize 1 weapona 1 weapona[equip]\nunequip weapona in slot 1",
        None,
    );
    assert!(report.is_clean());
    let equipped: Vec<bool> = session
        .state()
        .pouch()
        .slots()
        .iter()
        .map(|s| s.equipped())
        .collect();
    assert_eq!(equipped, [false, true]);
}

#[test]
fn weapon_slot_flag_caps_reload() {
    let mut session = session();
    session.run_script(
        "has 1 weapon slots\nget weapona\nget weaponb\nsave\nreload",
        None,
    );
    assert_eq!(session.state().game_data().slots().len(), 2);
    let weapons = session
        .state()
        .pouch()
        .slots()
        .iter()
        .filter(|s| s.item_type() == ItemType::Weapon)
        .count();
    assert_eq!(weapons, 1);
}

#[test]
fn broken_slots_survive_reload() {
    let mut session = session();
    session.run_script(
        "initialize 5 materiala 2 materialb\nsave\nbreak 1 slots\nreload",
        None,
    );
    let pouch = session.state().pouch();
    assert_eq!(pouch.offset(), 1);
    assert_eq!(pouch.m_count(), 2);
    assert_eq!(ids(&session), ["MaterialB", "MaterialA", "MaterialB"]);
}

#[test]
fn remove_all_of_a_type() {
    let mut session = session();
    let report = session.run_script(
        "initialize 1 weapona 3 materiala 1 keya\nremove all materials",
        None,
    );
    assert!(report.is_clean());
    assert_eq!(ids(&session), ["WeaponA", "KeyA"]);
    let state = session.state();
    assert!(state.game_data().is_synced_with(state.pouch()));
}

#[test]
fn unequip_all_of_a_type() {
    let mut session = session();
    session.run_script(
        "initialize 1 weapona[equip] 5 arrowa[equip]\nunequip all weapons",
        None,
    );
    let equipped: Vec<bool> = session
        .state()
        .pouch()
        .slots()
        .iter()
        .map(|s| s.equipped())
        .collect();
    assert_eq!(equipped, [false, true]);
}

#[test]
fn drop_and_pick_up_moves_the_stack_to_the_end() {
    let mut session = session();
    let report = session.run_script("initialize 3 materiala 2 materialb\ndnp all materiala", None);
    assert!(report.is_clean());
    assert_eq!(ids(&session), ["MaterialB", "MaterialA"]);
    let values: Vec<i32> = session.state().pouch().slots().iter().map(|s| s.value()).collect();
    assert_eq!(values, [2, 3]);
}

#[test]
fn break_slots_with_items_removes_them() {
    let mut session = session();
    let report = session.run_script(
        "initialize 3 materiala 2 materialb 1 weapona\nbreak 1 slots with 1 materialb",
        None,
    );
    assert!(report.is_clean());
    let state = session.state();
    assert_eq!(state.pouch().offset(), 1);
    assert_eq!(state.pouch().m_count(), 2);
    assert_eq!(state.pouch().slots().get(1).map(|s| s.value()), Some(1));
    assert!(state.game_data().is_synced_with(state.pouch()));
}

// =============================================================================
// Extreme Counts
// =============================================================================

#[test]
fn breaking_past_the_largest_offset_saturates() {
    let mut session = session();
    let report = session.run_script(
        "initialize 2 materiala\nbreak 9223372036854775807 slots\nbreak 1 slots",
        None,
    );
    assert!(report.is_clean());
    let pouch = session.state().pouch();
    assert_eq!(pouch.offset(), i64::MAX);
    assert_eq!(pouch.m_count(), 1 - i64::MAX);
}

#[test]
fn negative_break_then_add() {
    let mut session = session();
    let report = session.run_script(
        "break -9223372036854775808 slots\nadd 1 materiala",
        None,
    );
    assert!(report.is_clean());
    assert_eq!(session.state().pouch().m_count(), i64::MAX);
    assert_eq!(ids(&session), ["MaterialA"]);
}

#[test]
fn removing_huge_arrow_stacks() {
    let mut session = session();
    let report = session.run_script(
        "initialize 2000000000 arrowa 2000000000 arrowa\nremove all arrowa",
        None,
    );
    assert!(report.is_clean());
    let values: Vec<i32> = session.state().pouch().slots().iter().map(|s| s.value()).collect();
    assert_eq!(values, [0, 0]);
}

#[test]
fn shooting_a_negative_count_is_rejected() {
    let mut session = session();
    session.run_script("initialize 5 arrowa[equip]\nshoot -2147483648 arrows", None);
    assert!(!session.history()[1].outcome.is_executed());
    assert_eq!(session.state().pouch().slots().get(0).map(|s| s.value()), Some(5));
}
