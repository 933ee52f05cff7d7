// Player
pub const PLAYER_FULL_HP: u32 = 30;
pub const PLAYER_STARTING_GOLD: u32 = 10;
pub const PLAYER_BASE_DAMAGE: u32 = 5;

// Encounter monster table
pub const ENCOUNTER_NAMES: [&str; 5] = ["Goblin", "Orc", "Troll", "Dragon", "Zombie"];
pub const ENCOUNTER_HP_MIN: u32 = 10;
pub const ENCOUNTER_HP_MAX: u32 = 20;
pub const ENCOUNTER_DAMAGE_MIN: u32 = 2;
pub const ENCOUNTER_DAMAGE_MAX: u32 = 7;

// Gold reward range, shared by both monster kinds
pub const MONSTER_GOLD_MIN: u32 = 5;
pub const MONSTER_GOLD_MAX: u32 = 20;

// Wandering monster table
pub const WANDERER_NAMES: [&str; 5] = ["Zombie", "Slime", "Goblin", "Orc", "Troll"];
pub const WANDERER_HP: u32 = 20;
pub const WANDERER_DAMAGE: u32 = 5;
pub const SPAWN_BATCH_SIZE: usize = 2;

// Grid
pub const GRID_WIDTH: i32 = 10;
pub const GRID_HEIGHT: i32 = 10;
pub const TOWN_POSITION: (i32, i32) = (0, 0);
// Monsters take one step for every N accepted player moves.
pub const MONSTER_TICK_EVERY_MOVES: u32 = 2;

// Shop price table
pub const SWORD_PRICE: u32 = 50;
pub const SWORD_DAMAGE_BONUS: u32 = 5;
pub const SWORD_DURABILITY: u32 = 10;
pub const CHARM_PRICE: u32 = 40;

// Town services
pub const INN_REST_COST: u32 = 5;
pub const POTION_HEAL_AMOUNT: u32 = 10;
