//! Named tuning constants and difficulty tiers.
//!
//! Every balance number in the simulation lives here or on the entity
//! kind enums. None of these are runtime-negotiable.

use serde::{Deserialize, Serialize};

/// Ticks per second for the simulation.
pub const TICK_RATE: u32 = 60;

/// Number of horizontal lanes.
pub const GRID_ROWS: usize = 5;

/// Number of grid columns per lane.
pub const GRID_COLS: usize = 9;

/// Side length of one grid cell, in pixels.
pub const GRID_SIZE: f32 = 80.0;

/// Left edge of the lawn (defenders' grid) in field coordinates.
pub const LAWN_LEFT: f32 = 100.0;

/// Top edge of the lawn in field coordinates.
pub const LAWN_TOP: f32 = 100.0;

/// Total field width; attackers enter here and projectiles expire here.
pub const FIELD_WIDTH: f32 = 900.0;

/// Currency balance granted at the start of every level.
pub const STARTING_BALANCE: i32 = 150;

/// Currency value of one pickup.
pub const PICKUP_VALUE: i32 = 25;

/// Pickup fall speed in pixels per tick.
pub const PICKUP_FALL_SPEED: f32 = 2.0;

/// Ticks an uncollected pickup survives (10 seconds).
pub const PICKUP_LIFETIME_TICKS: u32 = 10 * TICK_RATE;

/// Ticks between ambient pickup spawns (5 seconds).
pub const AMBIENT_PICKUP_INTERVAL_TICKS: u32 = 5 * TICK_RATE;

/// Squared collection radius for pickup clicks (20 px radius).
pub const PICKUP_COLLECT_RADIUS_SQ: f32 = 400.0;

/// Currency credited per generator emission.
pub const GENERATOR_EMIT_AMOUNT: i32 = 25;

/// Ticks between generator emissions (5 seconds).
pub const GENERATOR_EMIT_TICKS: u32 = 5 * TICK_RATE;

/// Ticks between shooter shots (1.5 seconds).
pub const SHOOTER_ATTACK_TICKS: u32 = 3 * TICK_RATE / 2;

/// Ticks from bomb placement to detonation (2 seconds).
pub const BOMB_FUSE_TICKS: u32 = 2 * TICK_RATE;

/// Projectile speed in pixels per tick.
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 20;

/// Half-width of the projectile hit window, horizontal and vertical.
pub const PROJECTILE_HIT_WINDOW: f32 = 30.0;

/// Damage an attacker deals per melee strike.
pub const ATTACKER_MELEE_DAMAGE: i32 = 50;

/// Ticks between melee strikes (1 second).
pub const ATTACKER_MELEE_TICKS: u32 = TICK_RATE;

/// Score awarded per attacker kill.
pub const SCORE_PER_KILL: u32 = 10;

/// Highest selectable level.
pub const MAX_LEVEL: u32 = 30;

/// X coordinate of the left edge of a grid column.
#[must_use]
pub fn cell_x(col: usize) -> f32 {
    LAWN_LEFT + col as f32 * GRID_SIZE
}

/// Y coordinate of the top edge of a lane.
#[must_use]
pub fn cell_y(row: usize) -> f32 {
    LAWN_TOP + row as f32 * GRID_SIZE
}

/// Difficulty tier selected before a session.
///
/// Affects attacker base stats, wave sizing and the spawn-rate
/// constant. Each tier also owns an independent save record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Reduced attacker stats, small waves.
    Easy,
    /// Baseline tuning.
    #[default]
    Normal,
    /// Buffed attackers, large waves.
    Hard,
}

impl Difficulty {
    /// Lowercase name, used to key save files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Attackers scheduled per level: `level * wave_factor`.
    #[must_use]
    pub const fn wave_factor(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Normal => 15,
            Self::Hard => 25,
        }
    }

    /// Base per-tick spawn probability before the wave-progress ramp.
    #[must_use]
    pub const fn spawn_rate(self) -> f32 {
        match self {
            Self::Easy => 0.006,
            Self::Normal => 0.01,
            Self::Hard => 0.015,
        }
    }

    /// Base attacker health before variant overrides.
    #[must_use]
    pub const fn attacker_base_health(self) -> i32 {
        match self {
            Self::Easy => 80,
            Self::Normal => 100,
            Self::Hard => 150,
        }
    }

    /// Base attacker walk speed before variant overrides, px per tick.
    #[must_use]
    pub const fn attacker_base_speed(self) -> f32 {
        match self {
            Self::Easy => 0.8,
            Self::Normal => 1.0,
            Self::Hard => 1.2,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "unknown difficulty '{other}', expected easy, normal or hard"
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_coordinates_match_grid_origin() {
        assert_eq!(cell_x(0), LAWN_LEFT);
        assert_eq!(cell_y(0), LAWN_TOP);
        assert_eq!(cell_x(3), LAWN_LEFT + 3.0 * GRID_SIZE);
        assert_eq!(cell_y(4), LAWN_TOP + 4.0 * GRID_SIZE);
    }

    #[test]
    fn difficulty_names_round_trip_through_serde() {
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{}\"", d.as_str()));
            let back: Difficulty = serde_json::from_str(&json).unwrap();
            assert_eq!(back, d);
        }
    }
}
