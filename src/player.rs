//! Player state: hit points, gold, inventory, and the equipped-weapon
//! handle.
//!
//! The equipped weapon is an index into the inventory, not a copy, so
//! durability changes are visible through both views. Every mutator that
//! removes an item keeps the handle consistent: the reference is cleared
//! when the equipped slot is removed and shifted when an earlier slot is.

use crate::constants::*;
use crate::items::{Item, SpecialEffect, Weapon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped,
    NotAWeapon,
    NoSuchItem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    hp: u32,
    gold: u32,
    base_damage: u32,
    inventory: Vec<Item>,
    equipped_weapon: Option<usize>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: PLAYER_FULL_HP,
            gold: PLAYER_STARTING_GOLD,
            base_damage: PLAYER_BASE_DAMAGE,
            inventory: Vec::new(),
            equipped_weapon: None,
        }
    }

    /// Reassembles a player from persisted parts. The caller is responsible
    /// for the equip index being in bounds and naming a weapon.
    pub(crate) fn from_parts(
        name: String,
        hp: u32,
        gold: u32,
        base_damage: u32,
        inventory: Vec<Item>,
        equipped_weapon: Option<usize>,
    ) -> Self {
        Self {
            name,
            hp,
            gold,
            base_damage,
            inventory,
            equipped_weapon,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped_weapon
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.equipped_weapon
            .and_then(|index| self.inventory.get(index))
            .and_then(Item::as_weapon)
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Removes an inventory slot, keeping the equip handle consistent.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index >= self.inventory.len() {
            return None;
        }
        match self.equipped_weapon {
            Some(equipped) if equipped == index => self.equipped_weapon = None,
            Some(equipped) if equipped > index => self.equipped_weapon = Some(equipped - 1),
            _ => {}
        }
        Some(self.inventory.remove(index))
    }

    /// Equips the weapon at `index`. Declines without mutation when the
    /// slot is missing or does not hold a weapon.
    pub fn equip(&mut self, index: usize) -> EquipOutcome {
        match self.inventory.get(index) {
            None => EquipOutcome::NoSuchItem,
            Some(item) if !item.is_weapon() => EquipOutcome::NotAWeapon,
            Some(_) => {
                self.equipped_weapon = Some(index);
                EquipOutcome::Equipped
            }
        }
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Declines (false) without mutation when gold is short.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn total_attack_damage(&self) -> u32 {
        self.base_damage + self.equipped_weapon().map_or(0, |weapon| weapon.damage_bonus)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp += amount;
    }

    pub fn heal_to_full(&mut self) {
        self.hp = PLAYER_FULL_HP;
    }

    /// Rests at the inn: gold-gated, restores hp to full on success.
    pub fn rest(&mut self, cost: u32) -> bool {
        if !self.spend_gold(cost) {
            return false;
        }
        self.heal_to_full();
        true
    }

    /// Index of the first auto-kill charm in the inventory, if any.
    pub fn auto_kill_charm(&self) -> Option<usize> {
        self.inventory.iter().position(|item| {
            matches!(
                item,
                Item::Special(special) if special.effect == SpecialEffect::AutoKill
            )
        })
    }

    /// Consumes the special item at `index`, removing it from the
    /// inventory and handing its effect back for the caller to apply.
    /// Declines on weapons and missing slots.
    pub fn consume_special(&mut self, index: usize) -> Option<SpecialEffect> {
        let effect = match self.inventory.get(index) {
            Some(Item::Special(special)) => special.effect,
            _ => return None,
        };
        self.remove_item(index);
        Some(effect)
    }

    /// Applies one attack's worth of wear to the equipped weapon. If it
    /// breaks it is detached and discarded; the broken weapon's name is
    /// returned so the caller can report it.
    pub fn degrade_equipped_weapon(&mut self) -> Option<String> {
        let index = self.equipped_weapon?;
        let broke = self
            .inventory
            .get_mut(index)
            .and_then(Item::as_weapon_mut)
            .map(Weapon::lose_durability)?;
        if !broke {
            return None;
        }
        self.remove_item(index).map(|item| item.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_sword() -> Player {
        let mut player = Player::new("Tess");
        player.add_item(Item::sword());
        assert_eq!(player.equip(0), EquipOutcome::Equipped);
        player
    }

    #[test]
    fn test_new_player_starting_stats() {
        let player = Player::new("Tess");
        assert_eq!(player.hp(), PLAYER_FULL_HP);
        assert_eq!(player.gold(), PLAYER_STARTING_GOLD);
        assert_eq!(player.base_damage(), PLAYER_BASE_DAMAGE);
        assert!(player.inventory().is_empty());
        assert!(player.equipped_weapon().is_none());
    }

    #[test]
    fn test_equip_declines_non_weapons() {
        let mut player = Player::new("Tess");
        player.add_item(Item::monster_charm());
        assert_eq!(player.equip(0), EquipOutcome::NotAWeapon);
        assert_eq!(player.equip(5), EquipOutcome::NoSuchItem);
        assert!(player.equipped_weapon().is_none());
    }

    #[test]
    fn test_total_attack_damage_includes_equipped_bonus() {
        let mut player = Player::new("Tess");
        assert_eq!(player.total_attack_damage(), PLAYER_BASE_DAMAGE);
        player.add_item(Item::sword());
        assert_eq!(player.total_attack_damage(), PLAYER_BASE_DAMAGE);
        player.equip(0);
        assert_eq!(
            player.total_attack_damage(),
            PLAYER_BASE_DAMAGE + SWORD_DAMAGE_BONUS
        );
    }

    #[test]
    fn test_spend_gold_declines_without_mutation() {
        let mut player = Player::new("Tess");
        assert!(!player.spend_gold(PLAYER_STARTING_GOLD + 1));
        assert_eq!(player.gold(), PLAYER_STARTING_GOLD);
        assert!(player.spend_gold(PLAYER_STARTING_GOLD));
        assert_eq!(player.gold(), 0);
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut player = Player::new("Tess");
        player.take_damage(PLAYER_FULL_HP + 50);
        assert_eq!(player.hp(), 0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_heal_has_no_upper_cap() {
        let mut player = Player::new("Tess");
        player.heal(POTION_HEAL_AMOUNT);
        assert_eq!(player.hp(), PLAYER_FULL_HP + POTION_HEAL_AMOUNT);
    }

    #[test]
    fn test_rest_is_gold_gated() {
        let mut player = Player::new("Tess");
        player.take_damage(20);
        assert!(player.rest(INN_REST_COST));
        assert_eq!(player.hp(), PLAYER_FULL_HP);
        assert_eq!(player.gold(), PLAYER_STARTING_GOLD - INN_REST_COST);

        player.take_damage(20);
        assert!(!player.rest(PLAYER_STARTING_GOLD));
        assert_eq!(player.hp(), PLAYER_FULL_HP - 20);
        assert_eq!(player.gold(), PLAYER_STARTING_GOLD - INN_REST_COST);
    }

    #[test]
    fn test_remove_equipped_item_clears_reference() {
        let mut player = player_with_sword();
        player.remove_item(0);
        assert!(player.equipped_weapon().is_none());
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_remove_earlier_item_shifts_reference() {
        let mut player = Player::new("Tess");
        player.add_item(Item::monster_charm());
        player.add_item(Item::sword());
        assert_eq!(player.equip(1), EquipOutcome::Equipped);

        player.remove_item(0);
        assert_eq!(player.equipped_index(), Some(0));
        assert_eq!(player.equipped_weapon().map(|w| w.name.as_str()), Some("Sword"));
    }

    #[test]
    fn test_remove_later_item_leaves_reference_alone() {
        let mut player = player_with_sword();
        player.add_item(Item::monster_charm());
        player.remove_item(1);
        assert_eq!(player.equipped_index(), Some(0));
    }

    #[test]
    fn test_degrade_equipped_weapon_wears_one_point() {
        let mut player = player_with_sword();
        assert_eq!(player.degrade_equipped_weapon(), None);
        assert_eq!(
            player.equipped_weapon().map(|w| w.current_durability),
            Some(SWORD_DURABILITY - 1)
        );
    }

    #[test]
    fn test_degrade_equipped_weapon_break_detaches_and_discards() {
        let mut player = Player::new("Tess");
        player.add_item(Item::Weapon(Weapon::new("Brittle Blade", 2, 1)));
        player.equip(0);

        let broken = player.degrade_equipped_weapon();
        assert_eq!(broken.as_deref(), Some("Brittle Blade"));
        assert!(player.inventory().is_empty());
        assert!(player.equipped_weapon().is_none());
        assert_eq!(player.total_attack_damage(), PLAYER_BASE_DAMAGE);
    }

    #[test]
    fn test_degrade_without_weapon_is_noop() {
        let mut player = Player::new("Tess");
        assert_eq!(player.degrade_equipped_weapon(), None);
    }

    #[test]
    fn test_auto_kill_charm_finds_first_charm() {
        let mut player = Player::new("Tess");
        assert!(player.auto_kill_charm().is_none());
        player.add_item(Item::health_potion());
        player.add_item(Item::monster_charm());
        assert_eq!(player.auto_kill_charm(), Some(1));
    }

    #[test]
    fn test_consume_special_removes_exactly_once() {
        let mut player = Player::new("Tess");
        player.add_item(Item::monster_charm());
        assert_eq!(player.consume_special(0), Some(SpecialEffect::AutoKill));
        assert!(player.inventory().is_empty());
        assert_eq!(player.consume_special(0), None);
    }

    #[test]
    fn test_consume_special_declines_weapons() {
        let mut player = player_with_sword();
        assert_eq!(player.consume_special(0), None);
        assert_eq!(player.inventory().len(), 1);
    }
}
