//! Ordered slot sequence shared by game data and the visible inventory.
//!
//! Backed by a persistent vector: cloning is O(1) and a clone never observes
//! later changes to the original, so saves can hold a `Slots` directly.

use std::fmt;

use satchel_foundation::{Error, Item, ItemStack, ItemTab, ItemType, MetaOption, Result};

/// An ordered sequence of item stacks.
///
/// Slot order is display order and game order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Slots {
    stacks: im::Vector<ItemStack>,
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Slots;
    use satchel_foundation::ItemStack;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Slots {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.stacks.iter())
        }
    }

    impl<'de> Deserialize<'de> for Slots {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let stacks = Vec::<ItemStack>::deserialize(deserializer)?;
            Ok(stacks.into_iter().collect())
        }
    }
}

impl Slots {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Gets a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.stacks.get(index)
    }

    /// Iterates over the slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Length as the signed count the game uses.
    pub(crate) fn count(&self) -> i64 {
        i64::try_from(self.stacks.len()).unwrap_or(i64::MAX)
    }

    /// Appends a stack without any game logic.
    pub fn add_directly(&mut self, stack: ItemStack) {
        self.stacks.push_back(stack);
    }

    /// Inserts stacks without any game logic, starting at `index`.
    /// An index past the end appends.
    pub fn insert_directly(&mut self, index: usize, stacks: impl IntoIterator<Item = ItemStack>) {
        let mut at = index.min(self.stacks.len());
        for stack in stacks {
            self.stacks.insert(at, stack);
            at += 1;
        }
    }

    /// Removes the first `count` slots.
    pub fn clear_first(&mut self, count: usize) {
        let count = count.min(self.stacks.len());
        self.stacks = self.stacks.skip(count);
    }

    /// Exchanges two slots. Returns false and changes nothing when either
    /// index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.stacks.len() || j >= self.stacks.len() {
            return false;
        }
        self.stacks.swap(i, j);
        true
    }

    pub(crate) fn modify_slot(&mut self, index: usize, f: impl FnOnce(&ItemStack) -> ItemStack) {
        if let Some(stack) = self.stacks.get(index) {
            let updated = f(stack);
            self.stacks.set(index, updated);
        }
    }

    /// Stable-sorts by tab. Arrows are ordered among each other by sort
    /// order and always come after bows. Does nothing when `m_count <= 1`.
    pub fn sort_item_by_tab(&mut self, m_count: i64) {
        if m_count <= 1 {
            return;
        }
        self.sort_by_tab_tracking(None);
    }

    /// Same sort, returning the new position of the slot at `tracked`.
    pub(crate) fn sort_by_tab_tracking(&mut self, tracked: Option<usize>) -> Option<usize> {
        let mut indexed: Vec<(usize, ItemStack)> = self.stacks.iter().cloned().enumerate().collect();
        indexed.sort_by_key(|(_, stack)| tab_sort_key(stack));
        let position = tracked.and_then(|t| indexed.iter().position(|(i, _)| *i == t));
        self.stacks = indexed.into_iter().map(|(_, stack)| stack).collect();
        position
    }

    /// Stable-sorts material slots by item sort order. Non-material slots keep
    /// their positions.
    pub fn sort_material(&mut self) {
        let positions: Vec<usize> = self
            .stacks
            .iter()
            .enumerate()
            .filter(|(_, stack)| stack.item_type() == ItemType::Material)
            .map(|(i, _)| i)
            .collect();
        let mut materials: Vec<ItemStack> = positions
            .iter()
            .filter_map(|i| self.stacks.get(*i).cloned())
            .collect();
        materials.sort_by_key(|stack| stack.item().sort_order);
        for (position, stack) in positions.into_iter().zip(materials) {
            self.stacks.set(position, stack);
        }
    }

    /// Index of the head of the first tab holding `item_type`.
    ///
    /// Tabs are discovered by scanning the slots; a tab that is skipped over
    /// counts as an empty tab and shadows a later tab of the same kind. For
    /// arrows the scan continues from the bow tab to the first arrow. With
    /// `m_count == 0` no tab has a head.
    #[must_use]
    pub fn find_first_tab(&self, item_type: ItemType, m_count: i64) -> Option<usize> {
        if m_count == 0 {
            return None;
        }
        let mut heads: Vec<(ItemTab, Option<usize>)> = Vec::new();
        let mut last_tab = None;
        for (i, stack) in self.stacks.iter().enumerate() {
            let tab = stack.item().tab();
            if last_tab != Some(tab) {
                for missing in ItemTab::ALL.into_iter().filter(|t| *t < tab) {
                    if !heads.iter().any(|(t, _)| *t == missing) {
                        heads.push((missing, None));
                    }
                }
                heads.push((tab, Some(i)));
                last_tab = Some(tab);
            }
        }
        let target = item_type.tab();
        let head = heads.iter().find(|(t, _)| *t == target).and_then(|(_, h)| *h)?;
        if item_type != ItemType::Arrow {
            return Some(head);
        }
        for (i, stack) in self.stacks.iter().enumerate().skip(head) {
            if stack.item_type() > ItemType::Arrow {
                return None;
            }
            if stack.item_type() == ItemType::Arrow {
                return Some(i);
            }
        }
        None
    }

    /// Last equipped slot of `item_type`, stopping once the scan passes the
    /// type after it.
    #[must_use]
    pub fn find_last_equipped_slot(&self, item_type: ItemType) -> Option<usize> {
        let limit = item_type as u8 + 1;
        let mut result = None;
        for (i, stack) in self.stacks.iter().enumerate() {
            if stack.item_type() as u8 > limit {
                break;
            }
            if stack.equipped() && stack.item_type() == item_type {
                result = Some(i);
            }
        }
        result
    }

    /// Last equipped slot of `item_type` anywhere in the inventory.
    #[must_use]
    pub fn find_last_equipped(&self, item_type: ItemType) -> Option<usize> {
        self.stacks
            .iter()
            .enumerate()
            .filter(|(_, stack)| stack.equipped() && stack.item_type() == item_type)
            .map(|(i, _)| i)
            .last()
    }

    /// Index of the `slot`-th (0-based) occurrence of `item`.
    #[must_use]
    pub fn find_occurrence(&self, item: &Item, slot: usize) -> Option<usize> {
        self.stacks
            .iter()
            .enumerate()
            .filter(|(_, stack)| stack.item() == item)
            .nth(slot)
            .map(|(i, _)| i)
    }

    /// Applies metadata to the `slot`-th occurrence of `item`. Returns false
    /// if there is no such occurrence.
    pub fn set_metadata(&mut self, item: &Item, slot: usize, meta: &MetaOption) -> bool {
        match self.find_occurrence(item, slot) {
            Some(index) => {
                self.modify_slot(index, |stack| stack.modify_meta(meta));
                true
            }
            None => false,
        }
    }

    /// Equips the `slot`-th occurrence of `item`, unequipping the same type in
    /// its first tab.
    pub fn equip(&mut self, item: &Item, slot: usize, m_count: i64) {
        if let Some(head) = self.find_first_tab(item.item_type, m_count) {
            let tab = item.tab();
            let mut i = head;
            while let Some(stack) = self.stacks.get(i) {
                if stack.item().tab() != tab {
                    break;
                }
                if stack.item_type() == item.item_type {
                    self.modify_slot(i, |s| s.with_equipped(false));
                }
                i += 1;
            }
        }
        if let Some(index) = self.find_occurrence(item, slot) {
            self.modify_slot(index, |s| s.with_equipped(true));
        }
    }

    /// Unequips `item`. `None` unequips the first equipped occurrence,
    /// `Some(n)` the `n`-th occurrence (0-based). Arrows cannot be unequipped.
    pub fn unequip(&mut self, item: &Item, slot: Option<usize>) {
        if item.item_type == ItemType::Arrow {
            return;
        }
        let index = match slot {
            None => self
                .stacks
                .iter()
                .position(|stack| stack.item() == item && stack.equipped()),
            Some(slot) => self.find_occurrence(item, slot),
        };
        if let Some(index) = index {
            self.modify_slot(index, |s| s.with_equipped(false));
        }
    }

    /// Sets the value of one slot directly.
    ///
    /// Materials, food and stackable key items are capped at 999; arrows are
    /// never capped.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `slot` is not a valid index. Nothing is
    /// modified in that case.
    pub fn update_life(&mut self, life: i32, slot: usize) -> Result<()> {
        let Some(stack) = self.stacks.get(slot) else {
            return Err(Error::index_out_of_bounds(slot, self.stacks.len()));
        };
        let item_type = stack.item_type();
        let capped = match item_type {
            ItemType::Material | ItemType::Food => true,
            ItemType::Key => stack.item().stackable,
            _ => false,
        };
        let life = if capped { life.min(999) } else { life };
        self.modify_slot(slot, |s| s.with_value(life));
        Ok(())
    }

    /// Reduces the first slot of the last equipped arrow by `count`, clamped
    /// at zero. Returns the updated slot.
    pub fn shoot_arrow(&mut self, count: i32) -> Option<usize> {
        let equipped = self.find_last_equipped(ItemType::Arrow)?;
        let arrow = self.stacks.get(equipped)?.item().clone();
        let index = self.stacks.iter().position(|stack| *stack.item() == arrow)?;
        self.modify_slot(index, |s| s.with_value(s.value().saturating_sub(count).max(0)));
        Some(index)
    }

    /// Removes every slot whose type is in `types`.
    pub fn remove_all(&mut self, types: &[ItemType]) {
        self.stacks.retain(|stack| !types.contains(&stack.item_type()));
    }

    /// Unequips every slot whose type is in `types`.
    pub fn unequip_all(&mut self, types: &[ItemType]) {
        self.stacks = self
            .stacks
            .iter()
            .map(|stack| {
                if stack.equipped() && types.contains(&stack.item_type()) {
                    stack.with_equipped(false)
                } else {
                    stack.clone()
                }
            })
            .collect();
    }

    /// Keeps only key items.
    pub fn clear_all_but_key_items(&mut self) {
        self.stacks.retain(|stack| stack.item_type() == ItemType::Key);
    }

    /// One line per slot.
    #[must_use]
    pub fn dump(&self) -> Vec<String> {
        self.stacks.iter().map(ToString::to_string).collect()
    }
}

/// Tab order, bow before arrow within the bow tab, arrows by sort order.
fn tab_sort_key(stack: &ItemStack) -> (ItemTab, u8, u32) {
    let item_type = stack.item_type();
    let tab = item_type.tab();
    let within_tab = if tab == ItemTab::Bow { item_type as u8 } else { 0 };
    let arrow_order = if item_type == ItemType::Arrow {
        stack.item().sort_order
    } else {
        0
    };
    (tab, within_tab, arrow_order)
}

impl FromIterator<ItemStack> for Slots {
    fn from_iter<I: IntoIterator<Item = ItemStack>>(iter: I) -> Self {
        Self {
            stacks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ItemStack>> for Slots {
    fn from(stacks: Vec<ItemStack>) -> Self {
        stacks.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Slots {
    type Item = &'a ItemStack;
    type IntoIter = im::vector::Iter<'a, ItemStack>;

    fn into_iter(self) -> Self::IntoIter {
        self.stacks.iter()
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stacks.iter()).finish()
    }
}
