//! The tile grid around town: monsters, NPCs, and movement.

pub mod logic;
pub mod types;

pub use types::{Direction, EpochOutcome, GridWorld, Npc, WorldEvent};
