//! The attrition turn loop between the player and a single monster.
//!
//! The resolver mutates both sides and reports everything it did as
//! events. It never ends the process: defeat handling (respawn or session
//! end) belongs to the driver.

use crate::combat::types::{CombatEvent, CombatOutcome, PlayerIntent};
use crate::monster::Combatant;
use crate::player::Player;

/// A single fight. Terminal once `outcome` is set; further turns are
/// no-ops.
#[derive(Debug)]
pub struct Combat<M: Combatant> {
    monster: M,
    outcome: Option<CombatOutcome>,
}

impl<M: Combatant> Combat<M> {
    pub fn new(monster: M) -> Self {
        Self {
            monster,
            outcome: None,
        }
    }

    pub fn monster(&self) -> &M {
        &self.monster
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Resolves one turn of combat for the given player intent.
    ///
    /// Turn order: a charm (if used) ends the fight before anything else;
    /// fleeing ends it with no state change; an attack lands first, wears
    /// the equipped weapon, and only draws retaliation if the monster
    /// survives the blow.
    pub fn turn(&mut self, player: &mut Player, intent: PlayerIntent) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        match intent {
            PlayerIntent::UseCharm => {
                let Some(index) = player.auto_kill_charm() else {
                    // Recovered locally: nothing happens, no retaliation.
                    events.push(CombatEvent::CharmMissing);
                    return events;
                };
                let charm = player.inventory()[index].name().to_string();
                player.consume_special(index);
                self.monster.take_damage(self.monster.hp());
                events.push(CombatEvent::CharmActivated { charm });
                self.finish_victory(player, &mut events);
            }
            PlayerIntent::Flee => {
                self.outcome = Some(CombatOutcome::Fled);
                events.push(CombatEvent::PlayerFled);
            }
            PlayerIntent::Attack => {
                let damage = player.total_attack_damage();
                self.monster.take_damage(damage);
                events.push(CombatEvent::PlayerAttack {
                    target: self.monster.name().to_string(),
                    damage,
                });
                if let Some(weapon) = player.degrade_equipped_weapon() {
                    events.push(CombatEvent::WeaponBroke { weapon });
                }
                if !self.monster.is_alive() {
                    self.finish_victory(player, &mut events);
                    return events;
                }

                let retaliation = self.monster.attack_damage();
                player.take_damage(retaliation);
                events.push(CombatEvent::MonsterAttack {
                    attacker: self.monster.name().to_string(),
                    damage: retaliation,
                });
                if player.is_defeated() {
                    self.outcome = Some(CombatOutcome::Defeat);
                    events.push(CombatEvent::PlayerDied);
                }
            }
        }

        events
    }

    fn finish_victory(&mut self, player: &mut Player, events: &mut Vec<CombatEvent>) {
        let gold_gained = self.monster.gold_reward();
        player.add_gold(gold_gained);
        self.outcome = Some(CombatOutcome::Victory { gold_gained });
        events.push(CombatEvent::MonsterDied {
            name: self.monster.name().to_string(),
            gold_gained,
        });
    }
}
