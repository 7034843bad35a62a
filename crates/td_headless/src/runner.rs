//! Drives one level of the simulation without a window.
//!
//! The runner owns a [`Game`], feeds it scripted inputs, and ticks it
//! to a terminal state or a tick cap. With auto-play enabled a naive
//! scripted player collects pickups and spends currency, which is
//! enough to clear early levels and exercise every system.

use std::path::PathBuf;

use serde::Serialize;

use td_core::config::{GRID_ROWS, MAX_LEVEL};
use td_core::prelude::*;

/// Configuration for a single headless run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Level to play.
    pub level: u32,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Simulation seed.
    pub seed: u64,
    /// Tick cap; the run stops here if no terminal state is reached.
    pub max_ticks: u64,
    /// Directory for save records.
    pub data_dir: PathBuf,
    /// Whether the scripted player places defenders and collects
    /// pickups each tick.
    pub auto_play: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The wave was cleared.
    Complete,
    /// An attacker breached the left boundary.
    Defeat,
    /// The tick cap was hit first.
    Timeout,
}

/// Machine-readable result of one run, printed as JSON on stdout.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Level played.
    pub level: u32,
    /// Difficulty tier name.
    pub difficulty: String,
    /// Seed the simulation ran with.
    pub seed: u64,
    /// Ticks actually simulated.
    pub ticks_run: u64,
    /// Terminal state of the run.
    pub outcome: Outcome,
    /// Attackers spawned.
    pub spawned: u32,
    /// Wave size for the level.
    pub wave_total: u32,
    /// Attackers destroyed.
    pub kills: u32,
    /// Projectiles fired over the whole run.
    pub shots_fired: u32,
    /// Final currency balance.
    pub balance: i32,
    /// Final session score.
    pub score: u32,
}

/// Run one level to completion, defeat, or the tick cap.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    // Seed a record unlocking the requested level so any level is
    // reachable through the normal select path.
    let store = SaveStore::new(&config.data_dir);
    let mut record = store.load(config.difficulty);
    record.unlocked_levels = record.unlocked_levels.max(config.level.min(MAX_LEVEL));
    store.save(config.difficulty, &record)?;

    let mut game = Game::new(&config.data_dir, config.difficulty, config.seed);
    game.handle(GameInput::StartAdventure);
    game.handle(GameInput::SelectLevel(config.level));
    if game.mode() != GameMode::Playing {
        return Err(GameError::InvalidState(format!(
            "level {} did not start",
            config.level
        )));
    }

    let mut ticks_run = 0;
    let mut shots_fired = 0;
    while ticks_run < config.max_ticks {
        if config.auto_play {
            auto_play(&mut game);
        }
        let events = game.tick();
        ticks_run += 1;
        shots_fired += events.shots_fired;

        let sim = game
            .simulation()
            .ok_or_else(|| GameError::InvalidState("simulation dropped mid-run".into()))?;
        if sim.is_defeated() || sim.is_complete() {
            break;
        }
    }

    let sim = game
        .simulation()
        .ok_or_else(|| GameError::InvalidState("simulation dropped mid-run".into()))?;
    let outcome = if sim.is_complete() {
        Outcome::Complete
    } else if sim.is_defeated() {
        Outcome::Defeat
    } else {
        Outcome::Timeout
    };

    let summary = RunSummary {
        level: config.level,
        difficulty: config.difficulty.to_string(),
        seed: config.seed,
        ticks_run,
        outcome,
        spawned: sim.wave_spawned(),
        wave_total: sim.wave_total(),
        kills: sim.kills(),
        shots_fired,
        balance: sim.balance(),
        score: game.score(),
    };

    game.handle(GameInput::Quit);
    Ok(summary)
}

/// One decision pass of the scripted player.
///
/// Collect everything, keep one generator running, and answer each
/// occupied lane with a shooter at the back column. Placement
/// rejections (cooldown, funds, occupied) are silent no-ops, so the
/// script just asks every tick.
fn auto_play(game: &mut Game) {
    let Some(sim) = game.simulation() else {
        return;
    };

    let pickups: Vec<(f32, f32)> = sim.pickups().iter().map(|p| (p.x, p.y)).collect();
    for (x, y) in pickups {
        game.handle(GameInput::CollectPickup { x, y });
    }

    let Some(sim) = game.simulation() else {
        return;
    };
    let has_generator = sim
        .defenders()
        .iter()
        .any(|d| d.kind() == DefenderKind::Generator);
    let mut wanted: Vec<(usize, usize, DefenderKind)> = Vec::new();
    if !has_generator {
        wanted.push((GRID_ROWS / 2, 0, DefenderKind::Generator));
    }
    for row in 0..GRID_ROWS {
        let threatened = sim.attackers().iter().any(|a| a.row == row);
        let defended = sim
            .defenders()
            .iter()
            .any(|d| d.row == row && d.kind() == DefenderKind::Shooter);
        if threatened && !defended {
            wanted.push((row, 1, DefenderKind::Shooter));
        }
    }

    for (row, col, kind) in wanted {
        game.handle(GameInput::PlaceDefender { row, col, kind });
    }
}
