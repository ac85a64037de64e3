//! Integration tests for parsing and running commands.

use satchel_foundation::{
    CookEffect, ItemData, ItemRegistry, ItemStack, ItemStackArg, MetaOption, NoItems,
};
use satchel_inventory::SimulationState;
use satchel_parser::{CmdErr, Command, CommandKind, parse_command, parse_script};

const NAMES: [&str; 10] = [
    "Material0", "Material1", "Material2", "Material3", "Material4", "Material5", "Material6",
    "Material7", "Material8", "Material9",
];

fn registry() -> ItemRegistry {
    ItemRegistry::from_names(["MaterialA", "MaterialB", "WeaponA", "FoodA", "ArrowA"])
}

fn stack(r: &ItemRegistry, name: &str) -> ItemStack {
    ItemStack::new(r.lookup(name).unwrap().clone())
}

fn ids(state: &SimulationState) -> Vec<String> {
    state.pouch().slots().iter().map(|s| s.item().id.clone()).collect()
}

#[test]
fn write_with_cook_effect() {
    let r = registry();
    let command = parse_command("write [life=300,modifier=mighty] to materialA", &r);
    assert_eq!(
        command.kind(),
        &CommandKind::Write {
            stack: stack(&r, "MaterialA"),
            slot: 1,
            meta: MetaOption::new()
                .with_life(300)
                .with_cook_effect(CookEffect::Mighty),
        }
    );
    assert_eq!(command.cmd_err(), CmdErr::None);
}

#[test]
fn swap_needs_no_items() {
    let command = parse_command("!swap 5 8", &NoItems);
    assert_eq!(command.kind(), &CommandKind::Swap(5, 8));
}

#[test]
fn swap_exchanges_exactly_two_slots() {
    let r = ItemRegistry::from_names(NAMES);
    let mut state = SimulationState::new();
    let line: Vec<String> = NAMES.iter().map(|name| format!("1 {name}")).collect();
    parse_command(&format!("initialize {}", line.join(" ")), &r)
        .execute(&mut state)
        .unwrap();
    assert_eq!(ids(&state), NAMES);

    parse_command("!swap 5 8", &r).execute(&mut state).unwrap();

    let mut expected: Vec<&str> = NAMES.to_vec();
    expected.swap(5, 8);
    assert_eq!(ids(&state), expected);
}

#[test]
fn swap_out_of_range_is_ignored() {
    let r = ItemRegistry::from_names(NAMES);
    let mut state = SimulationState::new();
    parse_command("initialize 1 material0 1 material1", &r)
        .execute(&mut state)
        .unwrap();
    let before = state.clone();
    parse_command("!swap 0 9", &r).execute(&mut state).unwrap();
    assert_eq!(state, before);
}

#[test]
fn negative_swap_index_is_a_guess() {
    let command = parse_command("!swap -1 2", &NoItems);
    assert_eq!(command.cmd_err(), CmdErr::Guess);
}

#[test]
fn repeated_stacks_stay_separate() {
    let r = registry();
    let command = parse_command("initialize 2 materialb 2 materialb", &r);
    let arg = ItemStackArg::new(stack(&r, "MaterialB"), 2);
    assert_eq!(command.kind(), &CommandKind::Initialize(vec![arg.clone(), arg]));

    let mut state = SimulationState::new();
    command.execute(&mut state).unwrap();
    assert_eq!(state.pouch().slots().len(), 2);
}

#[test]
fn unparseable_lines() {
    let r = registry();
    assert_eq!(parse_command("initialize ???", &r).cmd_err(), CmdErr::Guess);
    assert_eq!(parse_command("leave", &r).cmd_err(), CmdErr::Guess);
    assert_eq!(parse_command("frobnicate 3", &r).cmd_err(), CmdErr::Ast);
    assert_eq!(parse_command("!teleport", &r).cmd_err(), CmdErr::Parse);

    let unknown = parse_command("frobnicate 3", &r);
    assert_eq!(unknown.messages(), ["Unknown command: frobnicate"]);
    let unknown = parse_command("!teleport", &r);
    assert_eq!(unknown.messages(), ["Unknown super command: !teleport"]);
}

#[test]
fn guesses_carry_usage() {
    let hint = parse_command("leave", &registry());
    assert_eq!(hint.messages(), ["usage: leave eventide|tots"]);
    let hint = parse_command("!so", &registry());
    assert_eq!(hint.messages(), ["usage: !sort material"]);
}

#[test]
fn hints_do_not_execute() {
    let mut state = SimulationState::new();
    let hint = parse_command("get 3 unknownthing", &registry());
    hint.execute(&mut state).unwrap();
    assert_eq!(state, SimulationState::new());
}

#[test]
fn equality_ignores_layout() {
    let r = registry();
    let a = parse_command("get 2 materiala", &r);
    let b = parse_command("  ADD   2   MaterialA  ", &r);
    assert_ne!(a.code_blocks(), b.code_blocks());
    assert!(a.equals(&b));
    assert!(!a.equals(&parse_command("get 3 materiala", &r)));
}

#[test]
fn hints_compare_by_error_kind() {
    let r = registry();
    let a = parse_command("get 2 nothing", &r);
    let b = parse_command("leave", &r);
    let c = parse_command("frobnicate", &r);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    assert!(Command::nop().equals(&parse_command("# comment", &r)));
}

#[test]
fn closure_resolver() {
    let resolver = |query: &str| {
        Some(ItemStack::new(
            ItemData::new(query, ItemData::type_from_name(query)).into_item(),
        ))
    };
    let command = parse_command("get 4 weaponx", &resolver);
    let CommandKind::Add(stacks) = command.kind() else {
        panic!("expected add, got {:?}", command.kind());
    };
    assert_eq!(stacks[0].count, 4);
    assert_eq!(stacks[0].stack.item().id, "weaponx");
}

#[test]
fn script_runs_top_to_bottom() {
    let r = registry();
    let script = "\
initialize 5 materiala 1 weapona
# gamedata mirrors the pouch after initialize
get 2 materialb
eat fooda
!sort material";
    let mut state = SimulationState::new();
    for command in parse_script(script, &r) {
        command.execute(&mut state).unwrap();
    }
    assert_eq!(ids(&state), ["WeaponA", "MaterialA", "MaterialB"]);
    assert_eq!(state.game_data().slots().len(), 3);
}
