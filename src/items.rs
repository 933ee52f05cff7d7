//! Items the player can carry: weapons with durability and single-use
//! special items.

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    AutoKill,
    Heal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage_bonus: u32,
    #[serde(rename = "maxDurability")]
    pub max_durability: u32,
    #[serde(rename = "currentDurability")]
    pub current_durability: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage_bonus: u32, durability: u32) -> Self {
        Self {
            name: name.into(),
            damage_bonus,
            max_durability: durability,
            current_durability: durability,
        }
    }

    /// Wears the weapon down by one use. Returns true exactly when the
    /// weapon breaks; the caller must detach and discard it.
    pub fn lose_durability(&mut self) -> bool {
        self.current_durability = self.current_durability.saturating_sub(1);
        self.current_durability == 0
    }

    pub fn is_broken(&self) -> bool {
        self.current_durability == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialItem {
    pub name: String,
    pub effect: SpecialEffect,
}

/// An inventory entry. Serialized with a `type` tag so saves stay readable
/// as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Weapon(Weapon),
    Special(SpecialItem),
}

impl Item {
    pub fn sword() -> Self {
        Item::Weapon(Weapon::new("Sword", SWORD_DAMAGE_BONUS, SWORD_DURABILITY))
    }

    pub fn monster_charm() -> Self {
        Item::Special(SpecialItem {
            name: "Monster Charm".to_string(),
            effect: SpecialEffect::AutoKill,
        })
    }

    pub fn health_potion() -> Self {
        Item::Special(SpecialItem {
            name: "Health Potion".to_string(),
            effect: SpecialEffect::Heal,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.name,
            Item::Special(special) => &special.name,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, Item::Weapon(_))
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            Item::Special(_) => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            Item::Special(_) => None,
        }
    }
}
