//! Projectiles fired by shooters.

use serde::{Deserialize, Serialize};

use crate::config::{FIELD_WIDTH, PROJECTILE_DAMAGE, PROJECTILE_SPEED};

/// A projectile travelling right along one lane.
///
/// Speed and damage are fixed for every projectile; see
/// [`PROJECTILE_SPEED`] and [`PROJECTILE_DAMAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Lane index; only attackers in this lane can be hit.
    pub row: usize,
}

impl Projectile {
    /// Create a projectile at a shooter's center.
    #[must_use]
    pub const fn new(x: f32, y: f32, row: usize) -> Self {
        Self { x, y, row }
    }

    /// Damage dealt on a hit.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        PROJECTILE_DAMAGE
    }

    /// Move one tick to the right.
    pub fn advance(&mut self) {
        self.x += PROJECTILE_SPEED;
    }

    /// Whether the projectile has left the play area.
    #[must_use]
    pub fn is_off_field(&self) -> bool {
        self.x > FIELD_WIDTH
    }
}
