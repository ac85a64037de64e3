//! Integration tests for tokenization and backtracking.

use proptest::prelude::*;
use satchel_parser::{ParseResult, Span, tokenize};

fn texts(line: &str) -> Vec<String> {
    tokenize(line).tokens().iter().map(|t| t.text.clone()).collect()
}

#[test]
fn bang_is_its_own_token() {
    assert_eq!(texts("!swap 5 8"), ["!", "swap", "5", "8"]);
}

#[test]
fn quotes_and_hashes_split() {
    assert_eq!(texts("a\"b\"#c"), ["a", "\"", "b", "\"", "#", "c"]);
}

#[test]
fn spans_slice_back_to_text() {
    let line = "  write [life=300]  to materialA";
    for token in tokenize(line).tokens() {
        assert_eq!(token.span.text(line), token.text);
    }
}

#[test]
fn reset_drops_saved_cursors() {
    let mut ts = tokenize("a b c");
    let mut spans = Vec::new();
    ts.push();
    ts.consume(&mut spans);
    ts.push();
    ts.reset();
    assert_eq!(ts.position(), 0);
    assert_eq!(ts.depth(), 0);
}

#[test]
fn epsilon_without_consuming_keeps_cursor() {
    let mut ts = tokenize("a b");
    let mut spans = Vec::new();
    ts.consume(&mut spans);
    let result: ParseResult<()> = ts.attempt(|_| ParseResult::Epsilon);
    assert_eq!(result, ParseResult::Epsilon);
    assert_eq!(ts.position(), 1);
}

#[test]
fn epsilon_after_consuming_rewinds() {
    let mut ts = tokenize("a b");
    let result: ParseResult<()> = ts.attempt(|ts| {
        ts.consume(&mut Vec::new());
        ParseResult::Epsilon
    });
    assert_eq!(result, ParseResult::Epsilon);
    assert_eq!(ts.position(), 0);
}

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9]{1,6}", 0..12)
}

proptest! {
    #[test]
    fn tokens_round_trip_through_spans(words in words()) {
        let line = words.join(" ");
        let ts = tokenize(&line);
        prop_assert_eq!(ts.tokens().len(), words.len());
        for (token, word) in ts.tokens().iter().zip(&words) {
            prop_assert_eq!(&token.text, word);
            prop_assert_eq!(token.span.text(&line), word.as_str());
        }
    }

    #[test]
    fn failed_attempt_restores_cursor(words in words(), skip in 0usize..12, take in 0usize..12) {
        let line = words.join(" ");
        let mut ts = tokenize(&line);
        let mut spans = Vec::new();
        for _ in 0..skip {
            ts.consume(&mut spans);
        }
        let before = ts.position();

        let result: ParseResult<()> = ts.attempt(|ts| {
            for _ in 0..take {
                ts.consume(&mut Vec::new());
            }
            ParseResult::Fail
        });

        prop_assert!(result.is_fail());
        prop_assert_eq!(ts.position(), before);
        prop_assert_eq!(ts.depth(), 0);
    }

    #[test]
    fn successful_attempt_keeps_progress(words in words(), take in 0usize..12) {
        let line = words.join(" ");
        let mut ts = tokenize(&line);
        let result = ts.attempt(|ts| {
            let mut spans = Vec::new();
            for _ in 0..take {
                ts.consume(&mut spans);
            }
            ParseResult::Success(spans)
        });

        let spans: Vec<Span> = result.success().unwrap_or_default();
        prop_assert_eq!(spans.len(), take.min(words.len()));
        prop_assert_eq!(ts.position(), spans.len());
    }
}
