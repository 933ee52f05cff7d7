//! Integration test: a short session driven end to end through the
//! library - shopping, equipping, fighting, exploring, and persisting -
//! then reloaded and checked for identity.

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hinterland::combat::{Combat, CombatOutcome, PlayerIntent};
use hinterland::constants::*;
use hinterland::player::{EquipOutcome, Player};
use hinterland::save_manager::SaveManager;
use hinterland::shop::{self, Ware};
use hinterland::world::{Direction, GridWorld};

fn temp_save_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "hinterland-integration-{label}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_shopping_trip_to_ten_damage() {
    let mut player = Player::new("Tess");
    player.add_gold(50); // 60 gold

    assert!(shop::buy(&mut player, Ware::Sword));
    assert_eq!(player.gold(), 10);
    assert_eq!(player.equip(0), EquipOutcome::Equipped);
    assert_eq!(player.total_attack_damage(), 10);
}

#[test]
fn test_session_survives_a_save_and_reload() {
    let mut rng = ChaCha8Rng::seed_from_u64(101);
    let dir = temp_save_dir("full-session");
    let saves = SaveManager::with_dir(&dir);

    // Kit the player out.
    let mut player = Player::new("Tess");
    player.add_gold(90); // 100 gold
    assert!(shop::buy(&mut player, Ware::Sword));
    assert!(shop::buy(&mut player, Ware::MonsterCharm));
    assert_eq!(player.equip(0), EquipOutcome::Equipped);

    // Walk out of town until a monster is engaged, then beat it.
    let mut world = GridWorld::starting_world();
    world.ensure_population(&mut rng);
    let directions = [
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Down,
    ];
    let mut engaged = None;
    'walk: for _ in 0..50 {
        for direction in directions {
            let events = world.move_player(&mut player, direction, &mut rng);
            for event in events {
                if let hinterland::world::WorldEvent::MonsterEngaged { index } = event {
                    engaged = Some(index);
                    break 'walk;
                }
            }
        }
    }

    if let Some(index) = engaged {
        let monster = world.monsters()[index].clone();
        let reward = monster.gold_reward;
        let gold_before = player.gold();
        let mut combat = Combat::new(monster);
        while !combat.is_over() {
            combat.turn(&mut player, PlayerIntent::Attack);
        }
        match combat.outcome() {
            Some(CombatOutcome::Victory { gold_gained }) => {
                assert_eq!(gold_gained, reward);
                assert_eq!(player.gold(), gold_before + reward);
                world.monster_defeated(index);
            }
            Some(CombatOutcome::Defeat) => {
                // Session policy: patched up back in town.
                player.heal_to_full();
                world.return_player_to_town();
            }
            other => panic!("attack-only combat cannot end in {other:?}"),
        }
    }

    // Persist both documents and reload them.
    saves.save_player(&player).unwrap();
    saves.save_map(&world).unwrap();

    let restored = saves.load_player().unwrap().unwrap();
    assert_eq!(restored.name, player.name);
    assert_eq!(restored.hp(), player.hp());
    assert_eq!(restored.gold(), player.gold());
    assert_eq!(restored.base_damage(), player.base_damage());
    assert_eq!(restored.inventory(), player.inventory());
    assert_eq!(
        restored.equipped_weapon().map(|w| w.name.clone()),
        player.equipped_weapon().map(|w| w.name.clone())
    );

    let restored_world = saves.load_map(&mut rng).unwrap();
    assert_eq!(restored_world.player_pos(), world.player_pos());
    let names: Vec<_> = world.monsters().iter().map(|m| m.name.clone()).collect();
    let restored_names: Vec<_> = restored_world
        .monsters()
        .iter()
        .map(|m| m.name.clone())
        .collect();
    if world.monsters().is_empty() {
        // The codec's population step refills an emptied world.
        assert_eq!(restored_world.monsters().len(), SPAWN_BATCH_SIZE);
    } else {
        assert_eq!(restored_names, names);
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_charm_bought_in_town_wins_a_grid_fight() {
    let mut rng = ChaCha8Rng::seed_from_u64(202);
    let mut player = Player::new("Tess");
    player.add_gold(30); // 40 gold
    assert!(shop::buy(&mut player, Ware::MonsterCharm));

    let mut world = GridWorld::starting_world();
    world.ensure_population(&mut rng);
    let monster = world.monsters()[0].clone();
    let reward = monster.gold_reward;

    let mut combat = Combat::new(monster);
    let events = combat.turn(&mut player, PlayerIntent::UseCharm);
    assert!(!events.is_empty());
    assert_eq!(
        combat.outcome(),
        Some(CombatOutcome::Victory {
            gold_gained: reward
        })
    );
    assert!(player.auto_kill_charm().is_none());
    world.monster_defeated(0);
    assert_eq!(world.monsters().len(), SPAWN_BATCH_SIZE - 1);
}

#[test]
fn test_durability_runs_out_mid_grind() {
    // Ten swings on a fresh sword leave the player bare-handed.
    let mut player = Player::new("Tess");
    player.add_gold(50);
    assert!(shop::buy(&mut player, Ware::Sword));
    player.equip(0);

    let punching_bag = hinterland::monster::EncounterMonster {
        name: "Troll".to_string(),
        hp: 1000,
        damage: 0,
        gold_reward: 5,
    };
    let mut combat = Combat::new(punching_bag);
    for swing in 0..SWORD_DURABILITY {
        assert_eq!(
            player.equipped_weapon().map(|w| w.current_durability),
            Some(SWORD_DURABILITY - swing)
        );
        combat.turn(&mut player, PlayerIntent::Attack);
    }
    assert!(player.equipped_weapon().is_none());
    assert!(player.inventory().is_empty());
    assert_eq!(player.total_attack_damage(), PLAYER_BASE_DAMAGE);
}
