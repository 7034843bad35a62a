//! Wave accounting and the per-tick spawn decision.

use serde::{Deserialize, Serialize};

use crate::attacker::{Attacker, AttackerKind};
use crate::config::{Difficulty, GRID_ROWS};
use crate::rng::SimRng;

/// Decides when and what kind of attacker enters the field.
///
/// The wave for a level is sized once at construction; spawn pressure
/// then ramps linearly with how much of the wave has already entered,
/// so the back half of a level is busier than the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSpawner {
    level: u32,
    difficulty: Difficulty,
    spawned: u32,
    total: u32,
}

impl WaveSpawner {
    /// Spawner for one level at one difficulty.
    #[must_use]
    pub const fn new(level: u32, difficulty: Difficulty) -> Self {
        Self {
            level,
            difficulty,
            spawned: 0,
            total: level * difficulty.wave_factor(),
        }
    }

    /// Attackers spawned so far this level.
    #[must_use]
    pub const fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Attackers scheduled for this level.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Whether the whole wave has entered the field.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.spawned >= self.total
    }

    /// Run one tick's spawn decision.
    ///
    /// Draws a uniform sample against the ramped spawn probability;
    /// on success picks a uniform row and a level-gated variant, and
    /// returns the new attacker. `None` while the wave is exhausted
    /// or the roll fails.
    pub fn try_spawn(&mut self, rng: &mut SimRng) -> Option<Attacker> {
        if self.is_exhausted() {
            return None;
        }

        let progress = self.spawned as f32 / self.total as f32;
        let probability = self.difficulty.spawn_rate() * (1.0 + 2.0 * progress);
        if rng.next_f32() >= probability {
            return None;
        }

        let row = rng.next_range(0, GRID_ROWS as i32) as usize;

        // Heavier variants unlock by level and are checked strongest
        // first against a single roll.
        let roll = rng.next_f32();
        let kind = if self.level >= 7 && roll < 0.1 {
            AttackerKind::HeavyArmored
        } else if self.level >= 3 && roll < 0.3 {
            AttackerKind::Armored
        } else {
            AttackerKind::Basic
        };

        self.spawned += 1;
        Some(Attacker::new(kind, row, self.difficulty))
    }
}
