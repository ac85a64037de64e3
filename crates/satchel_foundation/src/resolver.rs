//! Item name resolution.
//!
//! Commands name items with free text ("royal claymore", "mate ria lA").
//! An [`ItemResolver`] turns that text into a default stack. A miss is an
//! ordinary outcome and is reported by the caller as a hint, never as an
//! error.

use crate::item::{ItemRegistry, normalize_query};
use crate::stack::ItemStack;

/// Resolves item name queries to default stacks.
pub trait ItemResolver {
    /// Returns the default stack for the best match of `query`, if any.
    fn search_item(&self, query: &str) -> Option<ItemStack>;
}

impl ItemResolver for ItemRegistry {
    fn search_item(&self, query: &str) -> Option<ItemStack> {
        let key = normalize_query(query);
        if key.is_empty() {
            return None;
        }
        self.lookup(&key).map(|item| ItemStack::new(item.clone()))
    }
}

impl<F> ItemResolver for F
where
    F: Fn(&str) -> Option<ItemStack>,
{
    fn search_item(&self, query: &str) -> Option<ItemStack> {
        self(query)
    }
}

/// Resolver that never finds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoItems;

impl ItemResolver for NoItems {
    fn search_item(&self, _query: &str) -> Option<ItemStack> {
        None
    }
}
