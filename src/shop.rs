//! The town shop: a fixed price table and gold-gated purchases.

use crate::constants::*;
use crate::items::Item;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ware {
    Sword,
    MonsterCharm,
}

impl Ware {
    pub const ALL: [Ware; 2] = [Ware::Sword, Ware::MonsterCharm];

    pub fn label(self) -> &'static str {
        match self {
            Ware::Sword => "Sword",
            Ware::MonsterCharm => "Monster Charm",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Ware::Sword => "+5 damage, 10 durability",
            Ware::MonsterCharm => "one-use instant kill",
        }
    }

    pub fn price(self) -> u32 {
        match self {
            Ware::Sword => SWORD_PRICE,
            Ware::MonsterCharm => CHARM_PRICE,
        }
    }

    pub fn stock_item(self) -> Item {
        match self {
            Ware::Sword => Item::sword(),
            Ware::MonsterCharm => Item::monster_charm(),
        }
    }
}

/// Declined (false) without mutation when the player cannot afford it.
pub fn buy(player: &mut Player, ware: Ware) -> bool {
    if !player.spend_gold(ware.price()) {
        return false;
    }
    player.add_item(ware.stock_item());
    true
}
