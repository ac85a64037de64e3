//! Integration tests for code blocks.

use proptest::prelude::*;
use satchel_foundation::{ItemRegistry, NoItems};
use satchel_parser::{SyntaxClass, parse_command};

fn classes(line: &str, registry: &ItemRegistry) -> Vec<(&'static str, String)> {
    parse_command(line, registry)
        .code_blocks()
        .iter()
        .map(|b| (b.class.as_str(), b.span.text(line).to_string()))
        .collect()
}

fn registry() -> ItemRegistry {
    ItemRegistry::from_names(["MaterialA", "WeaponA"])
}

#[test]
fn write_line_blocks() {
    let blocks = classes("write [equip] to weapona in slot 2", &registry());
    assert_eq!(
        blocks,
        [
            ("keyword.command", "write".to_string()),
            ("delimiter", "[".to_string()),
            ("meta.key", "equip".to_string()),
            ("delimiter", "]".to_string()),
            ("keyword.other", "to".to_string()),
            ("item.name", "weapona".to_string()),
            ("keyword.other", "in".to_string()),
            ("keyword.other", "slot".to_string()),
            ("slot.number", "2".to_string()),
        ]
    );
}

#[test]
fn swap_line_blocks() {
    let blocks = classes("!swap 5 8", &registry());
    assert_eq!(
        blocks,
        [
            ("keyword.super", "!swap".to_string()),
            ("slot.number", "5".to_string()),
            ("slot.number", "8".to_string()),
        ]
    );
}

#[test]
fn unresolved_items_keep_their_blocks() {
    let resolved = parse_command("get 2 materiala", &registry());
    let unresolved = parse_command("get 2 materiala", &NoItems);
    assert_eq!(resolved.code_blocks(), unresolved.code_blocks());
}

#[test]
fn unknown_lines_are_marked() {
    let command = parse_command("frobnicate the thing", &NoItems);
    assert!(
        command
            .code_blocks()
            .iter()
            .all(|b| b.class == SyntaxClass::Unknown)
    );
    assert_eq!(command.code_blocks().len(), 3);
}

#[test]
fn guessed_head_is_a_command() {
    let command = parse_command("get", &NoItems);
    assert_eq!(command.code_blocks()[0].class, SyntaxClass::Command);
}

const WORDS: [&str; 16] = [
    "get", "2", "materiala", "[", "life", "=", "3", "]", "to", "in", "slot", "!", "swap", "write",
    "#", "weapona",
];

proptest! {
    #[test]
    fn blocks_are_ordered_and_inside_the_line(
        picks in proptest::collection::vec(0usize..WORDS.len(), 0..10),
    ) {
        let line = picks.iter().map(|i| WORDS[*i]).collect::<Vec<_>>().join(" ");
        let command = parse_command(&line, &registry());
        let blocks = command.code_blocks();
        for block in blocks {
            prop_assert!(block.span.start < block.span.end);
            prop_assert!(block.span.end <= line.len());
        }
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
        }
    }
}
