//! Command parser for satchel.
//!
//! This crate turns script lines like `get 2 materiala` or
//! `write [life=300] to weapona in slot 2` into [`Command`]s that run against
//! a [`SimulationState`](satchel_inventory::SimulationState).
//!
//! # Architecture
//!
//! ```text
//! "write [life=300] to weapona"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["write", "[", "life", "=", "300", "]", "to", "weapona"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR RULES   │  → WriteAst { meta, item, slot }   (combinators, backtracking)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LOWERING        │  → item resolved, metadata validated
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Write { stack, slot: 1, meta } + code blocks
//! └─────────────────┘
//! ```
//!
//! Lines that fail at any stage become hint commands carrying a [`CmdErr`].
//!
//! # Modules
//!
//! - [`span`] - Byte ranges in a line
//! - [`tokenizer`] - Line to token stream, with backtracking
//! - [`ast`] - Tri-state parser combinators
//! - [`metadata`] - Metadata text and clauses
//! - [`item`] - Item literals
//! - [`clause`] - Slot clauses
//! - [`code_block`] - Highlighting
//! - [`command`] - Commands and their execution
//! - [`guess`] - Usage guesses for bad lines
//! - [`parser`] - Line-level entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod clause;
pub mod code_block;
pub mod command;
mod grammar;
pub mod guess;
pub mod item;
pub mod metadata;
pub mod parser;
pub mod span;
pub mod tokenizer;

pub use ast::ParseResult;
pub use code_block::{CodeBlock, Highlight, SyntaxClass};
pub use command::{CmdErr, Command, CommandKind, Trial};
pub use metadata::{MetaError, parse_metadata};
pub use parser::{parse_command, parse_script};
pub use span::Span;
pub use tokenizer::{Token, TokenStream, tokenize};
