//! Mobile attackers advancing along lanes.

use serde::{Deserialize, Serialize};

use crate::config::{
    cell_y, Difficulty, ATTACKER_MELEE_DAMAGE, FIELD_WIDTH, GRID_SIZE, LAWN_LEFT,
};

/// Attacker variant. Health rises and speed falls down the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerKind {
    /// Baseline walker; the only variant that takes difficulty scaling.
    Basic,
    /// 560 health, 0.6 speed on every difficulty.
    Armored,
    /// 2600 health, 0.4 speed on every difficulty.
    HeavyArmored,
}

/// A mobile attacker occupying one lane.
///
/// Attackers walk left from the field edge, stop to strike any
/// defender within a cell of them, and trigger the level's defeat
/// condition by crossing the lawn's left boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    /// Variant tag.
    pub kind: AttackerKind,
    /// Lane index.
    pub row: usize,
    /// Continuous horizontal position (left edge).
    pub x: f32,
    /// Remaining health.
    pub health: i32,
    /// Health at creation.
    pub max_health: i32,
    /// Walk speed in pixels per tick.
    pub speed: f32,
    /// Damage per melee strike.
    pub attack_damage: i32,
    /// Ticks until the next melee strike is allowed.
    pub attack_cooldown: u32,
}

impl Attacker {
    /// Spawn an attacker at the right edge of `row`.
    ///
    /// The difficulty-scaled base profile applies first; armored
    /// variants then override health and speed with fixed values.
    #[must_use]
    pub fn new(kind: AttackerKind, row: usize, difficulty: Difficulty) -> Self {
        let (health, speed) = match kind {
            AttackerKind::Basic => (
                difficulty.attacker_base_health(),
                difficulty.attacker_base_speed(),
            ),
            AttackerKind::Armored => (560, 0.6),
            AttackerKind::HeavyArmored => (2600, 0.4),
        };
        Self {
            kind,
            row,
            x: FIELD_WIDTH,
            health,
            max_health: health,
            speed,
            attack_damage: ATTACKER_MELEE_DAMAGE,
            attack_cooldown: 0,
        }
    }

    /// Y coordinate of the top of this attacker's lane.
    #[must_use]
    pub fn y(&self) -> f32 {
        cell_y(self.row)
    }

    /// Grid column under the attacker's current position.
    ///
    /// Positions right of the lawn map past the last column; area
    /// effects simply cannot reach there.
    #[must_use]
    pub fn col(&self) -> i32 {
        ((self.x - LAWN_LEFT) / GRID_SIZE).floor() as i32
    }

    /// Whether health has been exhausted.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Whether the attacker has crossed the lawn's left boundary.
    #[must_use]
    pub fn has_breached(&self) -> bool {
        self.x < LAWN_LEFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_takes_difficulty_scaling() {
        let easy = Attacker::new(AttackerKind::Basic, 0, Difficulty::Easy);
        let hard = Attacker::new(AttackerKind::Basic, 0, Difficulty::Hard);
        assert_eq!(easy.health, 80);
        assert_eq!(hard.health, 150);
        assert!(easy.speed < hard.speed);
    }

    #[test]
    fn armored_variants_ignore_difficulty() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let armored = Attacker::new(AttackerKind::Armored, 2, difficulty);
            assert_eq!((armored.health, armored.speed), (560, 0.6));
            let heavy = Attacker::new(AttackerKind::HeavyArmored, 2, difficulty);
            assert_eq!((heavy.health, heavy.speed), (2600, 0.4));
        }
    }

    #[test]
    fn spawns_at_right_edge() {
        let a = Attacker::new(AttackerKind::Basic, 3, Difficulty::Normal);
        assert_eq!(a.x, FIELD_WIDTH);
        assert!(!a.has_breached());
    }

    #[test]
    fn column_derives_from_position() {
        let mut a = Attacker::new(AttackerKind::Basic, 0, Difficulty::Normal);
        a.x = LAWN_LEFT;
        assert_eq!(a.col(), 0);
        a.x = LAWN_LEFT + GRID_SIZE * 2.5;
        assert_eq!(a.col(), 2);
    }
}
