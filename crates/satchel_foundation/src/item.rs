//! Item identities, types, tabs, and the item registry.
//!
//! An [`Item`] is shared, immutable item data. Stacks hold an `Item` and
//! compare items structurally, so two registries that define the same item
//! produce interchangeable stacks.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The id of the one weapon with special re-add behavior on reload.
pub const MASTER_SWORD: &str = "MasterSword";

/// Type of an item. The numeric order is the in-game sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemType {
    /// Melee weapons.
    Weapon = 0,
    /// Bows.
    Bow = 1,
    /// Arrows (stored in the bow tab).
    Arrow = 2,
    /// Shields.
    Shield = 3,
    /// Head armor.
    ArmorUpper = 4,
    /// Body armor.
    ArmorMiddle = 5,
    /// Leg armor.
    ArmorLower = 6,
    /// Materials.
    Material = 7,
    /// Cooked food.
    Food = 8,
    /// Key items.
    Key = 9,
}

impl ItemType {
    /// Every item type in sort order.
    pub const ALL: [ItemType; 10] = [
        ItemType::Weapon,
        ItemType::Bow,
        ItemType::Arrow,
        ItemType::Shield,
        ItemType::ArmorUpper,
        ItemType::ArmorMiddle,
        ItemType::ArmorLower,
        ItemType::Material,
        ItemType::Food,
        ItemType::Key,
    ];

    /// Returns the tab this type is displayed in.
    #[must_use]
    pub const fn tab(self) -> ItemTab {
        match self {
            Self::Weapon => ItemTab::Weapon,
            Self::Bow | Self::Arrow => ItemTab::Bow,
            Self::Shield => ItemTab::Shield,
            Self::ArmorUpper | Self::ArmorMiddle | Self::ArmorLower => ItemTab::Armor,
            Self::Material => ItemTab::Material,
            Self::Food => ItemTab::Food,
            Self::Key => ItemTab::Key,
        }
    }

    /// Returns true for weapons, bows and shields.
    #[must_use]
    pub const fn is_equipment(self) -> bool {
        matches!(self, Self::Weapon | Self::Bow | Self::Shield)
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Bow => "bow",
            Self::Arrow => "arrow",
            Self::Shield => "shield",
            Self::ArmorUpper => "armor upper",
            Self::ArmorMiddle => "armor middle",
            Self::ArmorLower => "armor lower",
            Self::Material => "material",
            Self::Food => "food",
            Self::Key => "key item",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inventory tab. Values line up with the matching [`ItemType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemTab {
    /// Weapon tab.
    Weapon = 0,
    /// Bow and arrow tab.
    Bow = 1,
    /// Shield tab.
    Shield = 3,
    /// Armor tab.
    Armor = 4,
    /// Material tab.
    Material = 7,
    /// Food tab.
    Food = 8,
    /// Key item tab.
    Key = 9,
}

impl ItemTab {
    /// Every tab in display order.
    pub const ALL: [ItemTab; 7] = [
        ItemTab::Weapon,
        ItemTab::Bow,
        ItemTab::Shield,
        ItemTab::Armor,
        ItemTab::Material,
        ItemTab::Food,
        ItemTab::Key,
    ];
}

/// Static data describing an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemData {
    /// Item id, `UpperCamelCase` English name.
    pub id: String,
    /// Item type.
    pub item_type: ItemType,
    /// Whether stacks of this item carry a count.
    pub stackable: bool,
    /// Whether a second copy can be added when one exists in the first tab.
    pub repeatable: bool,
    /// Position in the in-game sort.
    pub sort_order: u32,
    /// Value of a freshly created stack (count or durability x 100).
    pub default_life: i32,
}

/// Shared handle to item data.
pub type Item = Arc<ItemData>;

impl ItemData {
    /// Creates item data with the defaults for its type.
    ///
    /// Materials and arrows are stackable, everything else is not.
    /// Key items and the Master Sword are not repeatable.
    #[must_use]
    pub fn new(id: impl Into<String>, item_type: ItemType) -> Self {
        let id = id.into();
        let stackable = matches!(item_type, ItemType::Material | ItemType::Arrow);
        let repeatable = item_type != ItemType::Key && id != MASTER_SWORD;
        Self {
            id,
            item_type,
            stackable,
            repeatable,
            sort_order: 0,
            default_life: 1,
        }
    }

    /// Overrides stackability.
    #[must_use]
    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Overrides repeatability.
    #[must_use]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: u32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Sets the value of a freshly created stack.
    #[must_use]
    pub fn with_default_life(mut self, life: i32) -> Self {
        self.default_life = life;
        self
    }

    /// Wraps the data in a shared handle.
    #[must_use]
    pub fn into_item(self) -> Item {
        Arc::new(self)
    }

    /// Tab this item is displayed in.
    #[must_use]
    pub const fn tab(&self) -> ItemTab {
        self.item_type.tab()
    }

    /// Infers the item type from a naming convention prefix.
    ///
    /// `ArrowX`, `MaterialX`, `FoodX`, `KeyX`, `WeaponX`, `BowX`, `ShieldX`,
    /// `ArmorUpperX`, `ArmorMiddleX`, `ArmorLowerX`; anything else is a material.
    /// `MasterSword` is a weapon.
    #[must_use]
    pub fn type_from_name(name: &str) -> ItemType {
        const PREFIXES: [(&str, ItemType); 10] = [
            ("arrow", ItemType::Arrow),
            ("material", ItemType::Material),
            ("food", ItemType::Food),
            ("key", ItemType::Key),
            ("weapon", ItemType::Weapon),
            ("bow", ItemType::Bow),
            ("shield", ItemType::Shield),
            ("armorupper", ItemType::ArmorUpper),
            ("armormiddle", ItemType::ArmorMiddle),
            ("armorlower", ItemType::ArmorLower),
        ];
        if name == MASTER_SWORD {
            return ItemType::Weapon;
        }
        let lower = name.to_lowercase();
        PREFIXES
            .iter()
            .find(|(prefix, _)| lower.starts_with(prefix))
            .map_or(ItemType::Material, |(_, t)| *t)
    }
}

/// Registry of known items, keyed by normalized id.
///
/// Owned explicitly by whoever resolves item names; there is no process-wide
/// item table. Sort order is registration order.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, Item>,
    order: Vec<Item>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from names, inferring types by prefix.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register_named(name.as_ref());
        }
        registry
    }

    /// Registers an item. The sort order is overwritten with the
    /// registration position. Registering an existing id returns the
    /// existing item unchanged.
    pub fn register(&mut self, data: ItemData) -> Item {
        let key = normalize_query(&data.id);
        if let Some(existing) = self.items.get(&key) {
            return Arc::clone(existing);
        }
        let sort_order = u32::try_from(self.order.len()).unwrap_or(u32::MAX);
        let item = data.with_sort_order(sort_order).into_item();
        self.items.insert(key, Arc::clone(&item));
        self.order.push(Arc::clone(&item));
        item
    }

    /// Registers an item whose type is inferred from its name.
    pub fn register_named(&mut self, name: &str) -> Item {
        let item_type = ItemData::type_from_name(name);
        self.register(ItemData::new(name, item_type))
    }

    /// Looks up an item by query (case-insensitive, `*` ignored).
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&Item> {
        self.items.get(&normalize_query(query))
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.order.iter()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }
}

/// Normalizes an item query: lowercase, with `*` and whitespace removed.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| *c != '*' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
