//! Stack metadata: cook effects, weapon modifiers, and metadata options.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cook effect of a food stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CookEffect {
    /// No effect.
    #[default]
    None,
    /// Heat resistance.
    Chilly,
    /// Cold resistance.
    Spicy,
    /// Shock resistance.
    Electro,
    /// Stealth.
    Sneaky,
    /// Stamina recovery.
    Energizing,
    /// Extra stamina.
    Enduring,
    /// Movement speed.
    Hasty,
    /// Attack up.
    Mighty,
    /// Defense up.
    Tough,
    /// Flame guard.
    Fireproof,
    /// Extra hearts.
    Hearty,
}

impl CookEffect {
    /// Every effect, in prefix-matching order.
    pub const ALL: [CookEffect; 12] = [
        CookEffect::None,
        CookEffect::Chilly,
        CookEffect::Spicy,
        CookEffect::Electro,
        CookEffect::Sneaky,
        CookEffect::Energizing,
        CookEffect::Enduring,
        CookEffect::Hasty,
        CookEffect::Mighty,
        CookEffect::Tough,
        CookEffect::Fireproof,
        CookEffect::Hearty,
    ];

    const ALIASES: [(&'static str, CookEffect); 4] = [
        ("hotresist", CookEffect::Chilly),
        ("coldresist", CookEffect::Spicy),
        ("stealth", CookEffect::Sneaky),
        ("speed", CookEffect::Hasty),
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Chilly => "Chilly",
            Self::Spicy => "Spicy",
            Self::Electro => "Electro",
            Self::Sneaky => "Sneaky",
            Self::Energizing => "Energizing",
            Self::Enduring => "Enduring",
            Self::Hasty => "Hasty",
            Self::Mighty => "Mighty",
            Self::Tough => "Tough",
            Self::Fireproof => "Fireproof",
            Self::Hearty => "Hearty",
        }
    }

    /// Finds the first effect whose name starts with `prefix`, then tries
    /// the aliases. `prefix` must already be lowercase.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|effect| effect.name().to_lowercase().starts_with(prefix))
            .or_else(|| {
                Self::ALIASES
                    .into_iter()
                    .find(|(alias, _)| alias.starts_with(prefix))
                    .map(|(_, effect)| effect)
            })
    }
}

impl fmt::Display for CookEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weapon modifier flag. Stored in a stack's price as a bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponModifier {
    /// No modifier.
    None,
    /// Attack up.
    AttackUp,
    /// Durability up.
    DurabilityUp,
    /// Critical hit.
    CriticalHit,
    /// Long throw.
    LongThrow,
    /// Multi shot.
    MultiShot,
    /// Zoom.
    Zoom,
    /// Quick shot.
    QuickShot,
    /// Shield surf up.
    SurfMaster,
    /// Shield guard up.
    GuardUp,
    /// Yellow (strong) modifier marker.
    Yellow,
}

impl WeaponModifier {
    /// Every modifier, in prefix-matching order.
    pub const ALL: [WeaponModifier; 11] = [
        WeaponModifier::None,
        WeaponModifier::AttackUp,
        WeaponModifier::DurabilityUp,
        WeaponModifier::CriticalHit,
        WeaponModifier::LongThrow,
        WeaponModifier::MultiShot,
        WeaponModifier::Zoom,
        WeaponModifier::QuickShot,
        WeaponModifier::SurfMaster,
        WeaponModifier::GuardUp,
        WeaponModifier::Yellow,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::AttackUp => "AttackUp",
            Self::DurabilityUp => "DurabilityUp",
            Self::CriticalHit => "CriticalHit",
            Self::LongThrow => "LongThrow",
            Self::MultiShot => "MultiShot",
            Self::Zoom => "Zoom",
            Self::QuickShot => "QuickShot",
            Self::SurfMaster => "SurfMaster",
            Self::GuardUp => "GuardUp",
            Self::Yellow => "Yellow",
        }
    }

    /// Bit value of this modifier.
    #[must_use]
    pub const fn bits(self) -> i64 {
        match self {
            Self::None => 0,
            Self::AttackUp => 1,
            Self::DurabilityUp => 1 << 1,
            Self::CriticalHit => 1 << 2,
            Self::LongThrow => 1 << 3,
            Self::MultiShot => 1 << 4,
            Self::Zoom => 1 << 5,
            Self::QuickShot => 1 << 6,
            Self::SurfMaster => 1 << 7,
            Self::GuardUp => 1 << 8,
            Self::Yellow => 1 << 31,
        }
    }

    /// Finds the first modifier whose name starts with `prefix`.
    /// `prefix` must already be lowercase.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase().starts_with(prefix))
    }
}

/// A modifier name resolved to either a weapon modifier or a cook effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// Weapon modifier (written to price).
    Weapon(WeaponModifier),
    /// Cook effect.
    Cook(CookEffect),
}

impl Modifier {
    /// Resolves a modifier name by prefix. Weapon modifiers win over cook
    /// effects, which win over aliases. Case-insensitive.
    #[must_use]
    pub fn from_prefix(name: &str) -> Option<Self> {
        let prefix = name.to_lowercase();
        WeaponModifier::from_prefix(&prefix)
            .map(Self::Weapon)
            .or_else(|| CookEffect::from_prefix(&prefix).map(Self::Cook))
    }
}

/// Metadata fields a command can write onto a stack.
///
/// Every field is optional; absent fields leave the stack unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaOption {
    /// Count, or durability x 100.
    pub life: Option<i32>,
    /// Equipped flag.
    pub equip: Option<bool>,
    /// Sell price, also carries weapon modifier bits.
    pub price: Option<i64>,
    /// Hearts recovered.
    pub hp: Option<i32>,
    /// Cook effect.
    pub cook_effect: Option<CookEffect>,
}

impl MetaOption {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `life`.
    #[must_use]
    pub fn with_life(mut self, life: i32) -> Self {
        self.life = Some(life);
        self
    }

    /// Sets `equip`.
    #[must_use]
    pub fn with_equip(mut self, equip: bool) -> Self {
        self.equip = Some(equip);
        self
    }

    /// Sets `price`.
    #[must_use]
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets `hp`.
    #[must_use]
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Sets `cook_effect`.
    #[must_use]
    pub fn with_cook_effect(mut self, effect: CookEffect) -> Self {
        self.cook_effect = Some(effect);
        self
    }

    /// Applies a resolved modifier.
    #[must_use]
    pub fn with_modifier(self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Weapon(m) => self.with_price(m.bits()),
            Modifier::Cook(effect) => self.with_cook_effect(effect),
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
