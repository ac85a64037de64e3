//! Game flags stored alongside game data.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slot capacity flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameFlags {
    /// Weapon slots unlocked.
    pub weapon_slots: i32,
    /// Bow slots unlocked.
    pub bow_slots: i32,
    /// Shield slots unlocked.
    pub shield_slots: i32,
}

impl Default for GameFlags {
    fn default() -> Self {
        Self {
            weapon_slots: 8,
            bow_slots: 5,
            shield_slots: 4,
        }
    }
}

impl GameFlags {
    /// Reads one flag.
    #[must_use]
    pub fn get(&self, flag: GameFlag) -> i32 {
        match flag {
            GameFlag::WeaponSlots => self.weapon_slots,
            GameFlag::BowSlots => self.bow_slots,
            GameFlag::ShieldSlots => self.shield_slots,
        }
    }

    /// Writes one flag.
    pub fn set(&mut self, flag: GameFlag, value: i32) {
        match flag {
            GameFlag::WeaponSlots => self.weapon_slots = value,
            GameFlag::BowSlots => self.bow_slots = value,
            GameFlag::ShieldSlots => self.shield_slots = value,
        }
    }
}

/// Name of a game flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameFlag {
    /// `weaponSlots`
    WeaponSlots,
    /// `bowSlots`
    BowSlots,
    /// `shieldSlots`
    ShieldSlots,
}

impl GameFlag {
    /// Every flag.
    pub const ALL: [GameFlag; 3] = [GameFlag::WeaponSlots, GameFlag::BowSlots, GameFlag::ShieldSlots];

    /// Lowercase name with words joined.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WeaponSlots => "weaponslots",
            Self::BowSlots => "bowslots",
            Self::ShieldSlots => "shieldslots",
        }
    }

    /// Finds the first flag whose key starts with `prefix` (case-insensitive).
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|flag| flag.key().starts_with(&prefix))
    }
}

impl fmt::Display for GameFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeaponSlots => "weaponSlots",
            Self::BowSlots => "bowSlots",
            Self::ShieldSlots => "shieldSlots",
        })
    }
}
