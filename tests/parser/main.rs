//! Integration tests for Layer 2: Parser
//!
//! Tests for the tokenizer, the combinators, command parsing and
//! highlighting blocks.

mod combinators;
mod commands;
mod highlighting;
mod tokenizer;
