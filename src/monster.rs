//! The two monster kinds and the combat-facing shape they share.
//!
//! Encounter monsters are rolled fresh per fight and never touch the grid;
//! wandering monsters live on the grid, roam as the player moves, and are
//! engaged with fixed combat stats. The combat resolver sees both only
//! through the [`Combatant`] trait.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::*;

pub type Position = (i32, i32);

/// What the combat resolver needs from a monster. Kind-specific state
/// (grid position, display color) stays outside this interface.
pub trait Combatant {
    fn name(&self) -> &str;
    fn hp(&self) -> u32;
    fn take_damage(&mut self, amount: u32);
    fn attack_damage(&self) -> u32;
    fn gold_reward(&self) -> u32;

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }
}

/// A monster rolled for a single fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterMonster {
    pub name: String,
    pub hp: u32,
    pub damage: u32,
    pub gold_reward: u32,
}

impl EncounterMonster {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let name = ENCOUNTER_NAMES[rng.gen_range(0..ENCOUNTER_NAMES.len())].to_string();
        Self {
            name,
            hp: rng.gen_range(ENCOUNTER_HP_MIN..=ENCOUNTER_HP_MAX),
            damage: rng.gen_range(ENCOUNTER_DAMAGE_MIN..=ENCOUNTER_DAMAGE_MAX),
            gold_reward: rng.gen_range(MONSTER_GOLD_MIN..=MONSTER_GOLD_MAX),
        }
    }
}

impl Combatant for EncounterMonster {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    fn attack_damage(&self) -> u32 {
        self.damage
    }

    fn gold_reward(&self) -> u32 {
        self.gold_reward
    }
}

/// A monster roaming the grid. Never occupies the town tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WanderingMonster {
    pub name: String,
    pub color: (u8, u8, u8),
    x: i32,
    y: i32,
    pub gold_reward: u32,
    hp: u32,
}

impl WanderingMonster {
    pub fn spawn(width: i32, height: i32, town: Position, rng: &mut impl Rng) -> Self {
        let name = WANDERER_NAMES[rng.gen_range(0..WANDERER_NAMES.len())].to_string();
        let (x, y) = random_off_town_position(width, height, town, rng);
        Self {
            color: Self::color_for(&name),
            gold_reward: rng.gen_range(MONSTER_GOLD_MIN..=MONSTER_GOLD_MAX),
            hp: WANDERER_HP,
            name,
            x,
            y,
        }
    }

    pub fn spawn_batch(
        count: usize,
        width: i32,
        height: i32,
        town: Position,
        rng: &mut impl Rng,
    ) -> Vec<Self> {
        (0..count).map(|_| Self::spawn(width, height, town, rng)).collect()
    }

    /// Rebuilds a monster from its persisted name and position. Identity
    /// color comes from the name table; the gold reward is drawn fresh.
    /// Positions that violate the grid invariants are re-placed.
    pub fn from_save(
        name: &str,
        position: Position,
        width: i32,
        height: i32,
        town: Position,
        rng: &mut impl Rng,
    ) -> Self {
        let in_bounds =
            (0..width).contains(&position.0) && (0..height).contains(&position.1);
        let (x, y) = if in_bounds && position != town {
            position
        } else {
            random_off_town_position(width, height, town, rng)
        };
        Self {
            name: name.to_string(),
            color: Self::color_for(name),
            x,
            y,
            gold_reward: rng.gen_range(MONSTER_GOLD_MIN..=MONSTER_GOLD_MAX),
            hp: WANDERER_HP,
        }
    }

    /// Display color fixed per monster name; unknown names get white.
    pub fn color_for(name: &str) -> (u8, u8, u8) {
        match name {
            "Zombie" => (255, 0, 0),
            "Slime" => (0, 255, 0),
            "Goblin" => (255, 255, 0),
            "Orc" => (128, 0, 128),
            "Troll" => (0, 128, 128),
            _ => (255, 255, 255),
        }
    }

    pub fn position(&self) -> Position {
        (self.x, self.y)
    }

    /// One movement tick: the four orthogonal directions are shuffled and
    /// the first candidate that stays in bounds and off the town tile is
    /// taken. With no valid candidate the monster stays put.
    pub fn prowl(&mut self, width: i32, height: i32, town: Position, rng: &mut impl Rng) {
        let mut directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        directions.shuffle(rng);
        for (dx, dy) in directions {
            let next = (self.x + dx, self.y + dy);
            if (0..width).contains(&next.0)
                && (0..height).contains(&next.1)
                && next != town
            {
                (self.x, self.y) = next;
                return;
            }
        }
    }
}

impl Combatant for WanderingMonster {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    fn attack_damage(&self) -> u32 {
        WANDERER_DAMAGE
    }

    fn gold_reward(&self) -> u32 {
        self.gold_reward
    }
}

fn random_off_town_position(
    width: i32,
    height: i32,
    town: Position,
    rng: &mut impl Rng,
) -> Position {
    loop {
        let candidate = (rng.gen_range(0..width), rng.gen_range(0..height));
        if candidate != town {
            return candidate;
        }
    }
}
