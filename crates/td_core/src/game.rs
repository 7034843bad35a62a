//! Session state machine wrapping the simulation.
//!
//! [`Game`] owns the current mode, the active [`Simulation`] while a
//! level runs, and the persistent [`SaveRecord`] for the selected
//! difficulty. The UI layer feeds it [`GameInput`] events and calls
//! [`Game::tick`] once per frame; everything else (what to draw, what
//! to play) is read back through accessors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{Difficulty, MAX_LEVEL, SCORE_PER_KILL};
use crate::defender::DefenderKind;
use crate::save::{SaveRecord, SaveStore};
use crate::simulation::{Simulation, TickEvents};

/// Top-level screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen. Initial mode.
    MainMenu,
    /// Choosing a level among the unlocked ones.
    LevelSelect,
    /// Difficulty selection.
    Settings,
    /// A level is running.
    Playing,
    /// A level is suspended.
    Paused,
    /// The level's wave was cleared.
    LevelComplete,
}

/// Discrete input events the surrounding UI layer produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    /// Main menu: go to level select.
    StartAdventure,
    /// Main menu or pause menu: go to settings.
    OpenSettings,
    /// Level select or settings: return to the main menu.
    Back,
    /// Level select: start the given level if unlocked.
    SelectLevel(u32),
    /// Settings: switch difficulty, swapping save records.
    ChangeDifficulty(Difficulty),
    /// Playing: place a defender on a cell.
    PlaceDefender {
        /// Lane index.
        row: usize,
        /// Column index.
        col: usize,
        /// Which defender to place.
        kind: DefenderKind,
    },
    /// Playing: collect any pickups around a point.
    CollectPickup {
        /// Click position, field coordinates.
        x: f32,
        /// Click position, field coordinates.
        y: f32,
    },
    /// Playing: select a card from the tray.
    SelectCard(DefenderKind),
    /// Playing: suspend the level.
    Pause,
    /// Paused: resume the level.
    Resume,
    /// Paused: restart the current level from scratch.
    Restart,
    /// Paused or level complete: back to the main menu, flushing.
    ToMainMenu,
    /// Level complete: advance to the next level.
    NextLevel,
    /// Any mode: flush and mark the session as exiting.
    Quit,
}

/// One full play session: mode, progress, and the running level.
#[derive(Debug)]
pub struct Game {
    mode: GameMode,
    difficulty: Difficulty,
    store: SaveStore,
    record: SaveRecord,
    level: u32,
    score: u32,
    sim: Option<Simulation>,
    seed: u64,
    exited: bool,
}

impl Game {
    /// New session storing records under `data_dir`, starting on the
    /// main menu with `difficulty`'s saved progress.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, difficulty: Difficulty, seed: u64) -> Self {
        let store = SaveStore::new(data_dir);
        let record = store.load(difficulty);
        let level = record.current_level;
        let score = record.score;
        Self {
            mode: GameMode::MainMenu,
            difficulty,
            store,
            record,
            level,
            score,
            sim: None,
            seed,
            exited: false,
        }
    }

    /// Apply one input event. Inputs that do not apply in the current
    /// mode are ignored.
    pub fn handle(&mut self, input: GameInput) {
        if let GameInput::Quit = input {
            self.flush();
            self.exited = true;
            return;
        }

        match (self.mode, input) {
            (GameMode::MainMenu, GameInput::StartAdventure) => {
                self.mode = GameMode::LevelSelect;
            }
            (GameMode::MainMenu | GameMode::Paused, GameInput::OpenSettings) => {
                self.mode = GameMode::Settings;
            }
            (GameMode::LevelSelect | GameMode::Settings, GameInput::Back) => {
                self.mode = GameMode::MainMenu;
            }
            (GameMode::LevelSelect, GameInput::SelectLevel(level)) => {
                if (1..=self.record.unlocked_levels).contains(&level) {
                    self.level = level;
                    self.start_level();
                }
            }
            (GameMode::Settings, GameInput::ChangeDifficulty(difficulty)) => {
                self.change_difficulty(difficulty);
            }
            (GameMode::Playing, GameInput::PlaceDefender { row, col, kind }) => {
                if let Some(sim) = self.sim.as_mut() {
                    // Rejections are normal control flow, not errors.
                    let _ = sim.place_defender(row, col, kind);
                }
            }
            (GameMode::Playing, GameInput::CollectPickup { x, y }) => {
                if let Some(sim) = self.sim.as_mut() {
                    let collected = sim.collect_pickup(x, y);
                    self.record.total_sun_collected += collected.unsigned_abs();
                }
            }
            (GameMode::Playing, GameInput::SelectCard(kind)) => {
                if let Some(sim) = self.sim.as_mut() {
                    sim.select_card(kind);
                }
            }
            (GameMode::Playing, GameInput::Pause) => {
                self.mode = GameMode::Paused;
            }
            (GameMode::Paused, GameInput::Resume) => {
                self.mode = GameMode::Playing;
            }
            (GameMode::Paused, GameInput::Restart) => {
                self.start_level();
            }
            (GameMode::Paused | GameMode::LevelComplete, GameInput::ToMainMenu) => {
                self.flush();
                self.sim = None;
                self.mode = GameMode::MainMenu;
            }
            (GameMode::LevelComplete, GameInput::NextLevel) => {
                self.level = (self.level + 1).min(MAX_LEVEL);
                self.start_level();
            }
            _ => {}
        }
    }

    /// Advance the running level one tick and fold the results into
    /// session bookkeeping. A no-op outside of [`GameMode::Playing`].
    pub fn tick(&mut self) -> TickEvents {
        if self.mode != GameMode::Playing {
            return TickEvents::default();
        }
        let Some(sim) = self.sim.as_mut() else {
            return TickEvents::default();
        };

        let events = sim.tick();
        self.score += SCORE_PER_KILL * events.kills;
        self.record.total_zombies_killed += events.kills;
        self.record.total_sun_collected += events.currency_emitted.unsigned_abs();

        if events.level_complete {
            self.record.unlocked_levels = self
                .record
                .unlocked_levels
                .max((self.level + 1).min(MAX_LEVEL));
            self.mode = GameMode::LevelComplete;
            self.flush();
        }

        events
    }

    fn start_level(&mut self) {
        // A distinct stream per level keeps replays of different
        // levels from sharing spawn rolls.
        let sim_seed = self.seed.wrapping_add(u64::from(self.level));
        self.sim = Some(Simulation::new(self.level, self.difficulty, sim_seed));
        self.mode = GameMode::Playing;
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }
        self.flush();
        self.difficulty = difficulty;
        self.record = self.store.load(difficulty);
        self.level = self.record.current_level;
        self.score = self.record.score;
    }

    /// Write the current record to disk. Failures are logged and
    /// swallowed; persistence never interrupts play.
    pub fn flush(&mut self) {
        self.record.current_level = self.level;
        self.record.score = self.score;
        if let Err(error) = self.store.save(self.difficulty, &self.record) {
            tracing::error!(%error, difficulty = %self.difficulty, "failed to write save record");
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Level currently selected or running.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Session score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The running simulation, if a level is active.
    #[must_use]
    pub const fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    /// The persistent record for the current difficulty.
    #[must_use]
    pub const fn record(&self) -> &SaveRecord {
        &self.record
    }

    /// Whether a quit was requested and the final flush has run.
    #[must_use]
    pub const fn exited(&self) -> bool {
        self.exited
    }
}
