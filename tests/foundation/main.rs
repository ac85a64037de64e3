//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: items, stacks, metadata options, and errors.

mod errors;
mod items;
mod stacks;
