//! End-to-end session tests driving [`Game`] through its public API
//! only, the way a frontend would.

use td_core::prelude::*;

fn new_game(dir: &std::path::Path, difficulty: Difficulty) -> Game {
    Game::new(dir, difficulty, 1234)
}

fn start_level_one(game: &mut Game) {
    game.handle(GameInput::StartAdventure);
    game.handle(GameInput::SelectLevel(1));
    assert_eq!(game.mode(), GameMode::Playing);
}

#[test]
fn wave_accounting_holds_over_a_long_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(dir.path(), Difficulty::Normal);
    start_level_one(&mut game);

    let total = game.simulation().unwrap().wave_total();
    assert_eq!(total, 15);

    let mut last_spawned = 0;
    for _ in 0..10_000 {
        game.tick();
        let sim = game.simulation().unwrap();
        assert!(sim.wave_spawned() >= last_spawned);
        assert!(sim.wave_spawned() <= total);
        assert!(sim.balance() >= 0);
        last_spawned = sim.wave_spawned();
        if sim.is_defeated() {
            break;
        }
    }
}

#[test]
fn undefended_level_ends_in_defeat_and_freezes() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(dir.path(), Difficulty::Normal);
    start_level_one(&mut game);

    // With no defenders the first attacker to spawn walks the full
    // field and breaches. 50k ticks is over ten times the slack the
    // slowest possible run needs.
    for _ in 0..50_000 {
        game.tick();
        if game.simulation().unwrap().is_defeated() {
            break;
        }
    }
    let sim = game.simulation().unwrap();
    assert!(sim.is_defeated());
    assert!(!sim.is_complete());

    // Defeat freezes the level but does not change mode.
    assert_eq!(game.mode(), GameMode::Playing);
    let frozen = sim.tick_count();
    game.tick();
    assert_eq!(game.simulation().unwrap().tick_count(), frozen);
}

#[test]
fn placements_and_collection_flow_through_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(dir.path(), Difficulty::Normal);
    start_level_one(&mut game);

    game.handle(GameInput::SelectCard(DefenderKind::Generator));
    game.handle(GameInput::PlaceDefender {
        row: 2,
        col: 1,
        kind: DefenderKind::Generator,
    });
    let sim = game.simulation().unwrap();
    assert_eq!(sim.defenders().len(), 1);
    assert_eq!(sim.balance(), 100);

    // Repeat placement on the same cell bounces silently.
    game.handle(GameInput::PlaceDefender {
        row: 2,
        col: 1,
        kind: DefenderKind::Blocker,
    });
    let sim = game.simulation().unwrap();
    assert_eq!(sim.defenders().len(), 1);
    assert_eq!(sim.balance(), 100);

    // Run until an ambient pickup lands, then collect it by position.
    for _ in 0..400 {
        game.tick();
        if !game.simulation().unwrap().pickups().is_empty() {
            break;
        }
    }
    let pickup = game.simulation().unwrap().pickups()[0];
    let balance_before = game.simulation().unwrap().balance();
    game.handle(GameInput::CollectPickup {
        x: pickup.x,
        y: pickup.y,
    });
    let sim = game.simulation().unwrap();
    assert_eq!(sim.balance(), balance_before + 25);
    assert!(game.record().total_sun_collected >= 25);
}

#[test]
fn quit_writes_a_record_the_next_session_reads() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut game = new_game(dir.path(), Difficulty::Normal);
        start_level_one(&mut game);
        for _ in 0..600 {
            game.tick();
        }
        game.handle(GameInput::Quit);
        assert!(game.exited());
    }

    let contents =
        std::fs::read_to_string(dir.path().join("game_save_normal.json")).unwrap();
    let record: SaveRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(record.current_level, 1);
    assert_eq!(record.unlocked_levels, 1);

    let game = new_game(dir.path(), Difficulty::Normal);
    assert_eq!(game.record(), &record);
}

#[test]
fn settings_difficulty_swap_is_persistent() {
    let dir = tempfile::tempdir().unwrap();

    let store = SaveStore::new(dir.path());
    let hard = SaveRecord {
        current_level: 6,
        score: 400,
        unlocked_levels: 6,
        ..SaveRecord::default()
    };
    store.save(Difficulty::Hard, &hard).unwrap();

    let mut game = new_game(dir.path(), Difficulty::Normal);
    game.handle(GameInput::OpenSettings);
    game.handle(GameInput::ChangeDifficulty(Difficulty::Hard));
    game.handle(GameInput::Back);

    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.level(), 6);
    assert_eq!(game.score(), 400);

    // Hard waves are larger: level 6 at hard is 6 x 25.
    game.handle(GameInput::StartAdventure);
    game.handle(GameInput::SelectLevel(6));
    assert_eq!(game.simulation().unwrap().wave_total(), 150);
}
