/// One player decision per combat turn, supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    Attack,
    Flee,
    UseCharm,
}

/// Terminal result of a combat. `Ongoing` is represented by its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory { gold_gained: u32 },
    Fled,
    Defeat,
}

/// What happened during a turn, reported back to the driver for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { target: String, damage: u32 },
    WeaponBroke { weapon: String },
    CharmActivated { charm: String },
    CharmMissing,
    MonsterAttack { attacker: String, damage: u32 },
    MonsterDied { name: String, gold_gained: u32 },
    PlayerFled,
    PlayerDied,
}
