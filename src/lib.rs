//! Satchel - Inventory simulator
//!
//! This crate re-exports all layers of the satchel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: satchel_runtime    - Sessions, REPL, CLI, serialization
//! Layer 2: satchel_parser     - Tokenizer, combinators, command grammar
//! Layer 1: satchel_inventory  - Slots, game data, pouch, simulation state
//! Layer 0: satchel_foundation - Items, stacks, metadata, errors
//! ```

pub use satchel_foundation as foundation;
pub use satchel_inventory as inventory;
pub use satchel_parser as parser;
pub use satchel_runtime as runtime;
