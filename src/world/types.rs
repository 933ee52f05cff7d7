use crate::constants::*;
use crate::items::Item;
use crate::monster::{Position, WanderingMonster};

/// Grid directions. The origin is the top-left tile, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A stationary character on the grid. The gift, if any, is handed over
/// exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Npc {
    pub name: String,
    pub position: Position,
    pub dialogue: String,
    gift: Option<Item>,
}

impl Npc {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        dialogue: impl Into<String>,
        gift: Option<Item>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            dialogue: dialogue.into(),
            gift,
        }
    }

    pub fn has_gift(&self) -> bool {
        self.gift.is_some()
    }

    pub(crate) fn take_gift(&mut self) -> Option<Item> {
        self.gift.take()
    }
}

/// What an accepted move triggered, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldEvent {
    NpcGreeting {
        name: String,
        dialogue: String,
        gift: Option<String>,
    },
    ReachedTown,
    MonsterEngaged {
        index: usize,
    },
}

/// How an exploration epoch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochOutcome {
    ReturnedToTown,
    Quit,
}

/// The explorable grid. Owns the monster population and the NPC roster;
/// the town tile is never occupied by a monster and the player never
/// leaves the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) town: Position,
    pub(crate) player_pos: Position,
    pub(crate) move_count: u32,
    pub(crate) monsters: Vec<WanderingMonster>,
    pub(crate) npcs: Vec<Npc>,
}

impl GridWorld {
    pub fn new(width: i32, height: i32, town: Position, npcs: Vec<Npc>) -> Self {
        Self {
            width,
            height,
            town,
            player_pos: town,
            move_count: 0,
            monsters: Vec::new(),
            npcs,
        }
    }

    /// The default world: the standard grid with the home town and its
    /// two NPCs, no monsters yet (the respawn policy fills them in).
    pub fn starting_world() -> Self {
        let npcs = vec![
            Npc::new(
                "Old Man",
                (3, 3),
                "Beware the forest! Take this potion.",
                Some(Item::health_potion()),
            ),
            Npc::new("Merchant", (6, 7), "I sell rare items. Visit my shop!", None),
        ];
        Self::new(GRID_WIDTH, GRID_HEIGHT, TOWN_POSITION, npcs)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn town(&self) -> Position {
        self.town
    }

    pub fn player_pos(&self) -> Position {
        self.player_pos
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn monsters(&self) -> &[WanderingMonster] {
        &self.monsters
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.0) && (0..self.height).contains(&position.1)
    }

    /// Puts the player on `position`, clamped into the grid. Used when
    /// restoring a saved position.
    pub fn place_player(&mut self, position: Position) {
        self.player_pos = (
            position.0.clamp(0, self.width - 1),
            position.1.clamp(0, self.height - 1),
        );
    }

    pub fn return_player_to_town(&mut self) {
        self.player_pos = self.town;
    }
}
