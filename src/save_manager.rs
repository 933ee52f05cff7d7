//! Save/load for the two persisted documents: the player and the map.
//!
//! Both are flat JSON. The equipped weapon is flattened to its name and
//! re-resolved against the loaded inventory (first name match wins);
//! wandering monsters persist only name and position, so color comes back
//! from the name table and the gold reward is drawn fresh. A missing file
//! is a "no save" signal, not an error; malformed content is.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use directories::ProjectDirs;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::Item;
use crate::monster::WanderingMonster;
use crate::player::Player;
use crate::world::GridWorld;

const PLAYER_SAVE_FILE: &str = "savegame.json";
const MAP_SAVE_FILE: &str = "map_state.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persisted form of [`Player`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSaveData {
    pub name: String,
    pub hp: u32,
    pub gold: u32,
    pub damage: u32,
    pub inventory: Vec<Item>,
    pub equipped_weapon: Option<String>,
    #[serde(default)]
    pub saved_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSaveData {
    pub name: String,
    pub pos: [i32; 2],
}

/// Persisted form of the [`GridWorld`] subset that survives sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSaveData {
    pub player_pos: [i32; 2],
    pub monsters: Vec<MonsterSaveData>,
    #[serde(default)]
    pub saved_at: i64,
}

pub fn encode_player(player: &Player) -> PlayerSaveData {
    PlayerSaveData {
        name: player.name.clone(),
        hp: player.hp(),
        gold: player.gold(),
        damage: player.base_damage(),
        inventory: player.inventory().to_vec(),
        equipped_weapon: player.equipped_weapon().map(|weapon| weapon.name.clone()),
        saved_at: Utc::now().timestamp(),
    }
}

pub fn decode_player(data: PlayerSaveData) -> Player {
    let equipped = data.equipped_weapon.as_deref().and_then(|wanted| {
        data.inventory
            .iter()
            .position(|item| item.is_weapon() && item.name() == wanted)
    });
    Player::from_parts(
        data.name,
        data.hp,
        data.gold,
        data.damage,
        data.inventory,
        equipped,
    )
}

pub fn encode_map(world: &GridWorld) -> MapSaveData {
    let player_pos = world.player_pos();
    MapSaveData {
        player_pos: [player_pos.0, player_pos.1],
        monsters: world
            .monsters()
            .iter()
            .map(|monster| {
                let (x, y) = monster.position();
                MonsterSaveData {
                    name: monster.name.clone(),
                    pos: [x, y],
                }
            })
            .collect(),
        saved_at: Utc::now().timestamp(),
    }
}

/// Rebuilds the world from a map document, then runs the default
/// population step so an empty save comes back ready to explore.
pub fn decode_map(data: MapSaveData, rng: &mut impl Rng) -> GridWorld {
    let mut world = GridWorld::starting_world();
    world.place_player((data.player_pos[0], data.player_pos[1]));
    let (width, height, town) = (world.width(), world.height(), world.town());
    world.monsters = data
        .monsters
        .iter()
        .map(|monster| {
            WanderingMonster::from_save(
                &monster.name,
                (monster.pos[0], monster.pos[1]),
                width,
                height,
                town,
                rng,
            )
        })
        .collect();
    world.ensure_population(rng);
    world
}

/// Owns the on-disk location of the two save files.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Resolves the platform save directory and makes sure it exists.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "hinterland").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine data directory")
        })?;
        let save_dir = project_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    /// Uses an explicit directory instead of the platform default.
    pub fn with_dir(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    fn player_path(&self) -> PathBuf {
        self.save_dir.join(PLAYER_SAVE_FILE)
    }

    fn map_path(&self) -> PathBuf {
        self.save_dir.join(MAP_SAVE_FILE)
    }

    pub fn save_player(&self, player: &Player) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&encode_player(player))?;
        fs::write(self.player_path(), json)?;
        Ok(())
    }

    /// `Ok(None)` means no save exists and the caller should start fresh.
    pub fn load_player(&self) -> Result<Option<Player>, SaveError> {
        let json = match fs::read_to_string(self.player_path()) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SaveError::Io(err)),
        };
        let data: PlayerSaveData = serde_json::from_str(&json)?;
        Ok(Some(decode_player(data)))
    }

    pub fn save_map(&self, world: &GridWorld) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&encode_map(world))?;
        fs::write(self.map_path(), json)?;
        Ok(())
    }

    /// A missing map yields the default world; the respawn policy fills
    /// in its monsters on the first tick.
    pub fn load_map(&self, rng: &mut impl Rng) -> Result<GridWorld, SaveError> {
        let json = match fs::read_to_string(self.map_path()) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(GridWorld::starting_world())
            }
            Err(err) => return Err(SaveError::Io(err)),
        };
        let data: MapSaveData = serde_json::from_str(&json)?;
        Ok(decode_map(data, rng))
    }
}
