//! Integration tests for the parser combinators and clauses.

use satchel_parser::ast::{
    one_or_more, optional, parse_end, parse_identifier, parse_integer, parse_keyword,
    parse_phrase, parse_symbol, zero_or_more,
};
use satchel_parser::clause::parse_slot_clause;
use satchel_parser::item::parse_item_literal;
use satchel_parser::{Highlight, ParseResult, Span, SyntaxClass, tokenize};

#[test]
fn keywords_ignore_case() {
    let mut ts = tokenize("INITIALIZE");
    let keyword = parse_keyword(&mut ts, &["initialize", "init"], SyntaxClass::Command);
    assert_eq!(keyword.success().map(|k| k.span), Some(Span::new(0, 10)));
}

#[test]
fn phrase_is_all_or_nothing() {
    let mut ts = tokenize("pick apples");
    assert!(parse_phrase(&mut ts, &["pick", "up"], SyntaxClass::Command).is_fail());
    assert_eq!(ts.position(), 0);

    let mut ts = tokenize("pick  up apples");
    let phrase = parse_phrase(&mut ts, &["pick", "up"], SyntaxClass::Command);
    assert_eq!(phrase.success().map(|k| k.span), Some(Span::new(0, 8)));
    assert_eq!(ts.position(), 2);
}

#[test]
fn optional_turns_fail_into_epsilon() {
    let mut ts = tokenize("apple");
    assert_eq!(optional(&mut ts, parse_integer), ParseResult::Epsilon);
    assert_eq!(ts.position(), 0);
    assert!(optional(&mut ts, parse_identifier).is_success());
}

#[test]
fn repetition() {
    let mut ts = tokenize("1 2 3 go");
    let numbers: Vec<i64> = zero_or_more(&mut ts, parse_integer)
        .into_iter()
        .map(|n| n.value)
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert!(one_or_more(&mut ts, parse_integer).is_fail());
    assert!(parse_end(&ts).is_fail());
    assert!(parse_identifier(&mut ts).is_success());
    assert!(parse_end(&ts).is_success());
}

#[test]
fn symbols_match_exactly() {
    let mut ts = tokenize("[x");
    assert!(parse_symbol(&mut ts, ']').is_fail());
    assert_eq!(parse_symbol(&mut ts, '[').success(), Some(Span::new(0, 1)));
}

#[test]
fn identifiers_start_with_a_letter() {
    assert!(parse_identifier(&mut tokenize("3rd")).is_fail());
    assert!(parse_identifier(&mut tokenize("[")).is_fail());
    assert_eq!(
        parse_identifier(&mut tokenize("apple3")).success().map(|i| i.text),
        Some("apple3".to_string())
    );
}

#[test]
fn slot_clause_is_one_based_as_written() {
    let mut ts = tokenize("from slot 4");
    let clause = parse_slot_clause(&mut ts, &["in", "from"]).success().unwrap();
    assert_eq!(clause.slot(), 4);
    let classes: Vec<SyntaxClass> = clause.code_blocks().iter().map(|b| b.class).collect();
    assert_eq!(
        classes,
        [SyntaxClass::Keyword, SyntaxClass::Keyword, SyntaxClass::SlotNumber]
    );
}

#[test]
fn item_literal_stops_at_slot_clause() {
    let mut ts = tokenize("3 weapon a[life=2] in slot 2");
    let literal = parse_item_literal(&mut ts).success().unwrap();
    assert_eq!(literal.amount.map(|a| a.value), Some(3));
    assert_eq!(literal.name(), "weapon a");
    assert_eq!(literal.query(), "weapona");
    assert!(literal.meta.is_some());
    assert_eq!(ts.peek().map(|t| t.text.as_str()), Some("in"));
}

#[test]
fn item_literal_needs_a_name() {
    let mut ts = tokenize("3 [life=2]");
    assert!(parse_item_literal(&mut ts).is_fail());
    assert_eq!(ts.position(), 0);
}
