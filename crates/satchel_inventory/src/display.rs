//! Display view of a slot.

use std::fmt;

use satchel_foundation::{CookEffect, ItemStack, ItemType, WeaponModifier};

/// What a UI shows for one slot.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotDisplay {
    /// Item id.
    pub item_id: String,
    /// Count badge, if one is shown.
    pub count: Option<i32>,
    /// Durability text for equipment.
    pub durability: Option<String>,
    /// Equipped highlight.
    pub equipped: bool,
    /// Slot sits past the game's item count.
    pub broken: bool,
    /// Animated icon requested.
    pub icon_animated: bool,
    /// Modifier or cook effect name.
    pub modifier: Option<String>,
}

impl SlotDisplay {
    /// Builds the view of `stack`.
    #[must_use]
    pub fn new(stack: &ItemStack, broken: bool, icon_animated: bool) -> Self {
        let equipment = stack.item_type().is_equipment();
        let count = if equipment || (!stack.item().stackable && stack.value() == 1) {
            None
        } else {
            Some(stack.value())
        };
        let durability = equipment.then(|| format_durability(stack.value()));
        Self {
            item_id: stack.item().id.clone(),
            count,
            durability,
            equipped: stack.equipped(),
            broken,
            icon_animated,
            modifier: modifier_name(stack),
        }
    }
}

impl fmt::Display for SlotDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.item_id)?;
        if let Some(count) = self.count {
            write!(f, " x{count}")?;
        }
        if let Some(durability) = &self.durability {
            write!(f, " ({durability})")?;
        }
        if let Some(modifier) = &self.modifier {
            write!(f, " <{modifier}>")?;
        }
        if self.equipped {
            f.write_str(" *")?;
        }
        if self.broken {
            f.write_str(" [broken]")?;
        }
        Ok(())
    }
}

/// Whole durabilities print as integers, others with four significant
/// digits.
fn format_durability(value: i32) -> String {
    if value % 100 == 0 {
        return (value / 100).to_string();
    }
    let durability = f64::from(value) / 100.0;
    let magnitude = durability.abs();
    let integer_digits = if magnitude >= 1.0 {
        // at most 8 digits for an i32 / 100
        let mut digits = 1;
        let mut bound = 10.0;
        while magnitude >= bound {
            digits += 1;
            bound *= 10.0;
        }
        digits
    } else {
        0
    };
    let decimals = 4usize.saturating_sub(integer_digits);
    format!("{durability:.decimals$}")
}

fn modifier_name(stack: &ItemStack) -> Option<String> {
    let item_type = stack.item_type();
    if !item_type.is_equipment() {
        let effect = stack.meta().cook_effect;
        return (effect != CookEffect::None).then(|| effect.name().to_string());
    }
    let price = stack.meta().price?;
    let applicable: &[WeaponModifier] = match item_type {
        ItemType::Weapon => &[
            WeaponModifier::AttackUp,
            WeaponModifier::DurabilityUp,
            WeaponModifier::CriticalHit,
            WeaponModifier::LongThrow,
        ],
        ItemType::Bow => &[
            WeaponModifier::AttackUp,
            WeaponModifier::DurabilityUp,
            WeaponModifier::MultiShot,
            WeaponModifier::Zoom,
            WeaponModifier::QuickShot,
        ],
        _ => &[
            WeaponModifier::AttackUp,
            WeaponModifier::DurabilityUp,
            WeaponModifier::SurfMaster,
            WeaponModifier::GuardUp,
        ],
    };
    applicable
        .iter()
        .find(|m| price & m.bits() != 0)
        .map(|m| m.name().to_string())
}
