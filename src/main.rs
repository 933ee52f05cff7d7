//! Terminal session driver: menus, prompts, and the exploration loop.
//!
//! All game rules live in the library; this binary only collects intents,
//! relays events, and applies session policy (defeat respawns the player
//! in town with restored hp).

use std::error::Error;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rand::Rng;

use hinterland::combat::{Combat, CombatOutcome, PlayerIntent};
use hinterland::constants::{INN_REST_COST, POTION_HEAL_AMOUNT};
use hinterland::items::{Item, SpecialEffect};
use hinterland::monster::{Combatant, EncounterMonster};
use hinterland::player::{EquipOutcome, Player};
use hinterland::save_manager::SaveManager;
use hinterland::shop::{self, Ware};
use hinterland::ui;
use hinterland::world::{Direction, EpochOutcome, GridWorld, WorldEvent};

enum ExploreKey {
    Move(Direction),
    Quit,
}

fn main() {
    if let Err(err) = run() {
        let _ = disable_raw_mode();
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    let saves = SaveManager::new()?;

    println!("=== Hinterland ===");
    println!("1. New Game");
    println!("2. Load Game");
    let mut player = if ui::prompt("> ")? == "2" {
        match saves.load_player()? {
            Some(player) => {
                println!("Welcome back, {}!", player.name);
                player
            }
            None => {
                println!("No save file found. Starting a new game instead.");
                new_player()?
            }
        }
    } else {
        new_player()?
    };
    let mut world = saves.load_map(&mut rng)?;

    loop {
        println!("\n=== Town Menu ===");
        println!("{}", ui::render_stats(&player));
        println!("1. Leave town (explore the map)");
        println!("2. Fight a monster");
        println!("3. Rest at the inn ({INN_REST_COST} gold)");
        println!("4. Shop");
        println!("5. Inventory");
        println!("6. Save and quit");
        match ui::prompt("> ")?.as_str() {
            "1" => match run_exploration(&mut world, &mut player, &saves, &mut rng)? {
                EpochOutcome::ReturnedToTown => {}
                EpochOutcome::Quit => {
                    saves.save_player(&player)?;
                    println!("Game saved. Goodbye!");
                    break;
                }
            },
            "2" => {
                let monster = EncounterMonster::generate(&mut rng);
                if let CombatOutcome::Defeat = run_combat(&mut player, monster)? {
                    println!("You wake up back in town, patched up.");
                    player.heal_to_full();
                }
            }
            "3" => {
                if player.rest(INN_REST_COST) {
                    println!("You rest at the inn. HP fully restored.");
                } else {
                    println!("Not enough gold.");
                }
            }
            "4" => run_shop(&mut player)?,
            "5" => run_inventory(&mut player)?,
            "6" => {
                saves.save_player(&player)?;
                saves.save_map(&world)?;
                println!("Game saved. Goodbye!");
                break;
            }
            _ => println!("Invalid option."),
        }
    }
    Ok(())
}

fn new_player() -> io::Result<Player> {
    let name = ui::prompt("Enter your name: ")?;
    let name = if name.is_empty() {
        "Adventurer".to_string()
    } else {
        name
    };
    Ok(Player::new(name))
}

/// One exploration epoch: arrow keys move the player until they reach
/// town, quit, or fall in battle. The map is saved on the way out.
fn run_exploration(
    world: &mut GridWorld,
    player: &mut Player,
    saves: &SaveManager,
    rng: &mut impl Rng,
) -> Result<EpochOutcome, Box<dyn Error>> {
    world.ensure_population(rng);
    println!("\nArrow keys to move, Esc or q to head back.\n");
    println!("{}", ui::render_map(world));

    let outcome = loop {
        match read_explore_key()? {
            ExploreKey::Quit => break EpochOutcome::Quit,
            ExploreKey::Move(direction) => {
                let events = world.move_player(player, direction, rng);
                let mut epoch_over = None;
                for event in events {
                    match event {
                        WorldEvent::NpcGreeting {
                            name,
                            dialogue,
                            gift,
                        } => {
                            println!("\n{name} says: '{dialogue}'");
                            if let Some(gift) = gift {
                                println!("{name} gives you a {gift}!");
                            }
                        }
                        WorldEvent::ReachedTown => {
                            println!("You returned to town.");
                            epoch_over = Some(EpochOutcome::ReturnedToTown);
                        }
                        WorldEvent::MonsterEngaged { index } => {
                            let monster = world.monsters()[index].clone();
                            match run_combat(player, monster)? {
                                CombatOutcome::Victory { .. } => {
                                    world.monster_defeated(index);
                                    world.ensure_population(rng);
                                }
                                CombatOutcome::Fled => {}
                                CombatOutcome::Defeat => {
                                    println!("You wake up back in town, patched up.");
                                    player.heal_to_full();
                                    world.return_player_to_town();
                                    epoch_over = Some(EpochOutcome::ReturnedToTown);
                                }
                            }
                        }
                    }
                }
                if let Some(outcome) = epoch_over {
                    break outcome;
                }
                println!("{}", ui::render_map(world));
            }
        }
    };

    saves.save_map(world)?;
    Ok(outcome)
}

/// Reads the next exploration key, holding raw mode only for the wait.
fn read_explore_key() -> io::Result<ExploreKey> {
    enable_raw_mode()?;
    let key = wait_for_explore_key();
    disable_raw_mode()?;
    key
}

fn wait_for_explore_key() -> io::Result<ExploreKey> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let parsed = match key.code {
            KeyCode::Up => Some(ExploreKey::Move(Direction::Up)),
            KeyCode::Down => Some(ExploreKey::Move(Direction::Down)),
            KeyCode::Left => Some(ExploreKey::Move(Direction::Left)),
            KeyCode::Right => Some(ExploreKey::Move(Direction::Right)),
            KeyCode::Esc | KeyCode::Char('q') => Some(ExploreKey::Quit),
            _ => None,
        };
        if let Some(parsed) = parsed {
            return Ok(parsed);
        }
    }
}

/// Runs one combat to its terminal outcome, prompting per turn. Invalid
/// choices re-prompt; they are never surfaced as errors.
fn run_combat<M: Combatant>(player: &mut Player, monster: M) -> io::Result<CombatOutcome> {
    println!(
        "\nA {} appears! HP: {} | Damage: {}",
        monster.name(),
        monster.hp(),
        monster.attack_damage()
    );
    let mut combat = Combat::new(monster);
    loop {
        println!("\nYour HP: {}", player.hp());
        let choice = ui::prompt("(A)ttack, (R)un, (C)harm: ")?;
        let intent = match choice.to_lowercase().as_str() {
            "a" => PlayerIntent::Attack,
            "r" => PlayerIntent::Flee,
            "c" => PlayerIntent::UseCharm,
            _ => {
                println!("Invalid choice.");
                continue;
            }
        };
        for event in combat.turn(player, intent) {
            println!("{}", ui::describe_combat_event(&event));
        }
        if let Some(outcome) = combat.outcome() {
            return Ok(outcome);
        }
    }
}

fn run_shop(player: &mut Player) -> io::Result<()> {
    println!("\n=== Game Shop ===");
    for (i, ware) in Ware::ALL.iter().enumerate() {
        println!(
            "{}. {} ({} gold) - {}",
            i + 1,
            ware.label(),
            ware.price(),
            ware.blurb()
        );
    }
    println!("{}. Leave shop", Ware::ALL.len() + 1);
    let choice = ui::prompt("Choose item: ")?;
    match choice.parse::<usize>() {
        Ok(number) if (1..=Ware::ALL.len()).contains(&number) => {
            let ware = Ware::ALL[number - 1];
            if shop::buy(player, ware) {
                println!("You bought a {}!", ware.label());
            } else {
                println!("Not enough gold.");
            }
        }
        _ => println!("Leaving shop..."),
    }
    Ok(())
}

fn run_inventory(player: &mut Player) -> io::Result<()> {
    println!("\n=== Inventory ===");
    println!("{}", ui::render_inventory(player));
    if player.inventory().is_empty() {
        return Ok(());
    }
    println!("E. Equip a weapon");
    println!("U. Use an item");
    println!("X. Close");
    match ui::prompt("Choose an option: ")?.to_lowercase().as_str() {
        "e" => equip_from_inventory(player)?,
        "u" => use_from_inventory(player)?,
        _ => println!("Closing inventory..."),
    }
    Ok(())
}

fn equip_from_inventory(player: &mut Player) -> io::Result<()> {
    let Some(index) = prompt_item_number()? else {
        return Ok(());
    };
    match player.equip(index) {
        EquipOutcome::Equipped => {
            println!("You equipped the {}!", player.inventory()[index].name())
        }
        EquipOutcome::NotAWeapon => println!("That's not a weapon."),
        EquipOutcome::NoSuchItem => println!("Invalid choice."),
    }
    Ok(())
}

fn use_from_inventory(player: &mut Player) -> io::Result<()> {
    let Some(index) = prompt_item_number()? else {
        return Ok(());
    };
    match player.inventory().get(index) {
        Some(Item::Special(special)) if special.effect == SpecialEffect::Heal => {
            let name = special.name.clone();
            player.consume_special(index);
            player.heal(POTION_HEAL_AMOUNT);
            println!(
                "You drink the {name}. +{POTION_HEAL_AMOUNT} HP (now {}).",
                player.hp()
            );
        }
        Some(Item::Special(_)) => println!("That only works in battle."),
        Some(Item::Weapon(_)) => println!("Weapons are equipped, not used."),
        None => println!("Invalid choice."),
    }
    Ok(())
}

/// Reads a 1-based item number; `None` (with a message) on bad input.
fn prompt_item_number() -> io::Result<Option<usize>> {
    let choice = ui::prompt("Item number: ")?;
    match choice.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(Some(number - 1)),
        _ => {
            println!("Invalid input.");
            Ok(None)
        }
    }
}
