//! Inventory model for satchel.
//!
//! This crate provides:
//! - [`Slots`] - Ordered, persistent slot sequence with the game's add,
//!   remove, equip and sort rules
//! - [`GameData`] - Persisted slots and [`GameFlags`]
//! - [`VisibleInventory`] - The pouch the player sees, with broken slots
//! - [`SimulationState`] - Game data, pouch, and saves
//!
//! # Synchronization
//!
//! Game data and the pouch diverge freely. Most in-game actions end with a
//! sync that copies the pouch into game data, unless the pouch count has
//! dropped to zero or below, in which case game data is wiped.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod add;
pub mod display;
pub mod flags;
pub mod game_data;
pub mod pouch;
pub mod remove;
pub mod slots;
pub mod state;

pub use add::STACK_CAP;
pub use display::SlotDisplay;
pub use flags::{GameFlag, GameFlags};
pub use game_data::GameData;
pub use pouch::VisibleInventory;
pub use remove::RemoveOptions;
pub use slots::Slots;
pub use state::SimulationState;
