//! Combat resolution: intents in, events out.

pub mod logic;
pub mod types;

pub use logic::Combat;
pub use types::{CombatEvent, CombatOutcome, PlayerIntent};
