//! Movement, trigger resolution, and the respawn policy.

use rand::Rng;

use crate::constants::*;
use crate::monster::WanderingMonster;
use crate::player::Player;
use crate::world::types::{Direction, GridWorld, WorldEvent};

impl GridWorld {
    /// Spawns a fresh batch when the monster population is empty. Safe to
    /// call every tick; it does nothing while monsters remain.
    pub fn ensure_population(&mut self, rng: &mut impl Rng) {
        if self.monsters.is_empty() {
            self.monsters = WanderingMonster::spawn_batch(
                SPAWN_BATCH_SIZE,
                self.width,
                self.height,
                self.town,
                rng,
            );
        }
    }

    /// Attempts to move the player one tile. A move off the grid is a
    /// no-op, not an error. Accepted moves count toward the monster tick
    /// (one monster step per [`MONSTER_TICK_EVERY_MOVES`] accepted moves)
    /// and then resolve triggers in fixed order: NPC interaction, town
    /// arrival, monster encounter.
    pub fn move_player(
        &mut self,
        player: &mut Player,
        direction: Direction,
        rng: &mut impl Rng,
    ) -> Vec<WorldEvent> {
        self.ensure_population(rng);

        let (dx, dy) = direction.delta();
        let next = (self.player_pos.0 + dx, self.player_pos.1 + dy);
        if !self.in_bounds(next) {
            return Vec::new();
        }

        self.player_pos = next;
        self.move_count += 1;
        if self.move_count % MONSTER_TICK_EVERY_MOVES == 0 {
            for monster in &mut self.monsters {
                monster.prowl(self.width, self.height, self.town, rng);
            }
        }

        let mut events = Vec::new();

        for npc in &mut self.npcs {
            if npc.position != next {
                continue;
            }
            let gift = npc.take_gift();
            let gift_name = gift.as_ref().map(|item| item.name().to_string());
            if let Some(item) = gift {
                player.add_item(item);
            }
            events.push(WorldEvent::NpcGreeting {
                name: npc.name.clone(),
                dialogue: npc.dialogue.clone(),
                gift: gift_name,
            });
        }

        if next == self.town {
            events.push(WorldEvent::ReachedTown);
            return events;
        }

        if let Some(index) = self
            .monsters
            .iter()
            .position(|monster| monster.position() == next)
        {
            events.push(WorldEvent::MonsterEngaged { index });
        }

        events
    }

    /// Removes a defeated monster from the world for good. Fled-from
    /// monsters stay where they are.
    pub fn monster_defeated(&mut self, index: usize) {
        if index < self.monsters.len() {
            self.monsters.remove(index);
        }
    }
}
