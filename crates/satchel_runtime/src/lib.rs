//! Sessions, REPL, CLI, and serialization for satchel.
//!
//! This crate provides:
//! - [`Session`] - Runs script lines against a simulation state
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`RuntimeConfig`] - How sessions run scripts
//! - Item list loading and open-mode name resolution
//! - State serialization and deserialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod items;
pub mod repl;
pub mod script;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::SatchelHighlighter;
pub use items::{SessionResolver, load_item_list, parse_item_list};
pub use repl::{Repl, Reply};
pub use script::{Outcome, ScriptReport, StepRecord};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
