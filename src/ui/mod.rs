//! Thin presentation glue: text renders of read-only snapshots, event
//! descriptions, and line prompts. Nothing in here mutates game state.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::combat::CombatEvent;
use crate::items::Item;
use crate::player::Player;
use crate::world::GridWorld;

/// Renders the grid one tile per cell: player, monsters, NPCs, town.
pub fn render_map(world: &GridWorld) -> String {
    let mut out = String::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            let pos = (x, y);
            let cell = if world.player_pos() == pos {
                "@".blue().bold().to_string()
            } else if let Some(monster) = world
                .monsters()
                .iter()
                .find(|monster| monster.position() == pos)
            {
                let (r, g, b) = monster.color;
                "M".with(Color::Rgb { r, g, b }).to_string()
            } else if world.npcs().iter().any(|npc| npc.position == pos) {
                "N".yellow().to_string()
            } else if world.town() == pos {
                "T".green().to_string()
            } else {
                ".".dark_grey().to_string()
            };
            out.push_str(&cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn render_stats(player: &Player) -> String {
    format!(
        "{} | HP: {} | Gold: {} | Damage: {}",
        player.name,
        player.hp(),
        player.gold(),
        player.total_attack_damage()
    )
}

pub fn render_inventory(player: &Player) -> String {
    if player.inventory().is_empty() {
        return "Your inventory is empty.".to_string();
    }
    let mut out = String::new();
    for (i, item) in player.inventory().iter().enumerate() {
        match item {
            Item::Weapon(weapon) => out.push_str(&format!(
                "{}. {} (Damage +{}, Durability {}/{})",
                i + 1,
                weapon.name,
                weapon.damage_bonus,
                weapon.current_durability,
                weapon.max_durability
            )),
            Item::Special(special) => {
                out.push_str(&format!("{}. {} (Special Item)", i + 1, special.name))
            }
        }
        if player.equipped_index() == Some(i) {
            out.push_str(" [equipped]");
        }
        out.push('\n');
    }
    out
}

pub fn describe_combat_event(event: &CombatEvent) -> String {
    match event {
        CombatEvent::PlayerAttack { target, damage } => {
            format!("You hit the {target} for {damage} damage!")
        }
        CombatEvent::WeaponBroke { weapon } => format!("Your {weapon} broke!"),
        CombatEvent::CharmActivated { charm } => {
            format!("Your {charm} activates! The monster dies instantly!")
        }
        CombatEvent::CharmMissing => "You have no charm to use.".to_string(),
        CombatEvent::MonsterAttack { attacker, damage } => {
            format!("The {attacker} hits you for {damage} damage!")
        }
        CombatEvent::MonsterDied { name, gold_gained } => {
            format!("You defeated the {name} and earned {gold_gained} gold!")
        }
        CombatEvent::PlayerFled => "You ran away!".to_string(),
        CombatEvent::PlayerDied => "You were defeated!".to_string(),
    }
}

/// Prints a prompt and reads one trimmed line from stdin.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatEvent;

    #[test]
    fn test_render_inventory_empty() {
        let player = Player::new("Tess");
        assert_eq!(render_inventory(&player), "Your inventory is empty.");
    }

    #[test]
    fn test_render_inventory_marks_equipped_weapon() {
        let mut player = Player::new("Tess");
        player.add_item(Item::sword());
        player.add_item(Item::monster_charm());
        player.equip(0);
        let listing = render_inventory(&player);
        assert!(listing.contains("1. Sword (Damage +5, Durability 10/10) [equipped]"));
        assert!(listing.contains("2. Monster Charm (Special Item)"));
    }

    #[test]
    fn test_render_map_has_one_row_per_tile_row() {
        let world = GridWorld::starting_world();
        let map = render_map(&world);
        assert_eq!(map.lines().count(), world.height() as usize);
    }

    #[test]
    fn test_describe_combat_events() {
        assert_eq!(
            describe_combat_event(&CombatEvent::PlayerAttack {
                target: "Slime".to_string(),
                damage: 7,
            }),
            "You hit the Slime for 7 damage!"
        );
        assert_eq!(
            describe_combat_event(&CombatEvent::WeaponBroke {
                weapon: "Sword".to_string()
            }),
            "Your Sword broke!"
        );
    }
}
