//! Core types for satchel.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`ItemData`], [`ItemType`], [`ItemRegistry`] - Item identities
//! - [`ItemStack`], [`ItemStackArg`] and [`RemoveArg`] - Immutable inventory entries
//! - [`MetaOption`], [`CookEffect`], [`WeaponModifier`] - Stack metadata
//! - [`ItemResolver`] - Item name resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod meta;
pub mod resolver;
pub mod stack;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use item::{Item, ItemData, ItemRegistry, ItemTab, ItemType, MASTER_SWORD, normalize_query};
pub use meta::{CookEffect, MetaOption, Modifier, WeaponModifier};
pub use resolver::{ItemResolver, NoItems};
pub use stack::{Amount, ItemStack, ItemStackArg, RemoveArg, StackMeta};
