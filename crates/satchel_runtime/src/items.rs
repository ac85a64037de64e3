//! Item lists and name resolution for sessions.
//!
//! An item list is a text file with one item name per line. Blank lines and
//! lines starting with `#` are ignored:
//!
//! ```text
//! # materials
//! MaterialA
//! MaterialB
//! WeaponA
//! ```
//!
//! A session with an empty registry resolves in open mode: any name is
//! accepted and its type is inferred from the name.

use std::fs;
use std::path::Path;

use log::{debug, info};
use satchel_foundation::{
    Error, ErrorKind, ItemData, ItemRegistry, ItemResolver, ItemStack, MASTER_SWORD, Result,
    normalize_query,
};

/// Builds a registry from item list text.
#[must_use]
pub fn parse_item_list(text: &str) -> ItemRegistry {
    let names = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    ItemRegistry::from_names(names)
}

/// Reads an item list file into a registry.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_item_list<P: AsRef<Path>>(path: P) -> Result<ItemRegistry> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read item list '{}': {e}",
            path.display()
        )))
    })?;
    let registry = parse_item_list(&text);
    info!("loaded {} items from {}", registry.len(), path.display());
    Ok(registry)
}

/// Resolver used by sessions.
///
/// Looks names up in the registry, or infers items when the registry is empty.
#[derive(Clone, Copy, Debug)]
pub struct SessionResolver<'a> {
    registry: &'a ItemRegistry,
}

impl<'a> SessionResolver<'a> {
    /// Creates a resolver over `registry`.
    #[must_use]
    pub fn new(registry: &'a ItemRegistry) -> Self {
        Self { registry }
    }

    /// Returns true when any name resolves.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.registry.is_empty()
    }
}

impl ItemResolver for SessionResolver<'_> {
    fn search_item(&self, query: &str) -> Option<ItemStack> {
        if !self.is_open() {
            return self.registry.search_item(query);
        }
        let key = normalize_query(query);
        if key.is_empty() {
            return None;
        }
        let key = if key == normalize_query(MASTER_SWORD) {
            MASTER_SWORD.to_string()
        } else {
            key
        };
        let item_type = ItemData::type_from_name(&key);
        debug!("open resolver: {key} as {item_type}");
        Some(ItemStack::new(ItemData::new(key, item_type).into_item()))
    }
}
