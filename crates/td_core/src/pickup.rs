//! Falling currency pickups.

use serde::{Deserialize, Serialize};

use crate::config::{
    FIELD_WIDTH, LAWN_LEFT, PICKUP_COLLECT_RADIUS_SQ, PICKUP_FALL_SPEED, PICKUP_LIFETIME_TICKS,
    PICKUP_VALUE,
};
use crate::rng::SimRng;

/// A transient currency token falling from the top of the field.
///
/// Grants [`PICKUP_VALUE`] when clicked within the collection radius
/// before its timer runs out; otherwise it disappears uncollected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Vertical position at which falling stops.
    pub target_y: f32,
    /// Ticks until the uncollected token expires.
    pub timer: u32,
}

impl Pickup {
    /// Spawn a pickup at a random column along the top of the field.
    #[must_use]
    pub fn spawn(rng: &mut SimRng) -> Self {
        let x = rng.next_range(LAWN_LEFT as i32, (FIELD_WIDTH - 50.0) as i32 + 1) as f32;
        let target_y = rng.next_range(100, 401) as f32;
        Self {
            x,
            y: 0.0,
            target_y,
            timer: PICKUP_LIFETIME_TICKS,
        }
    }

    /// Currency granted on collection.
    #[must_use]
    pub const fn value(&self) -> i32 {
        PICKUP_VALUE
    }

    /// Fall toward the resting height and run down the timer.
    pub fn update(&mut self) {
        if self.y < self.target_y {
            self.y += PICKUP_FALL_SPEED;
        }
        self.timer = self.timer.saturating_sub(1);
    }

    /// Whether the uncollected token has timed out.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.timer == 0
    }

    /// Whether a click at `(x, y)` lands inside the collection radius.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= PICKUP_COLLECT_RADIUS_SQ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_until_resting_height() {
        let mut p = Pickup {
            x: 200.0,
            y: 0.0,
            target_y: 10.0,
            timer: PICKUP_LIFETIME_TICKS,
        };
        for _ in 0..6 {
            p.update();
        }
        // 5 steps of 2.0 reach the target; the sixth must not overshoot.
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut p = Pickup::spawn(&mut SimRng::new(1));
        for _ in 0..PICKUP_LIFETIME_TICKS {
            assert!(!p.is_expired());
            p.update();
        }
        assert!(p.is_expired());
    }

    #[test]
    fn collection_radius_is_twenty_pixels() {
        let p = Pickup {
            x: 300.0,
            y: 200.0,
            target_y: 200.0,
            timer: 100,
        };
        assert!(p.contains_point(300.0, 220.0));
        assert!(p.contains_point(314.0, 214.0));
        assert!(!p.contains_point(300.0, 221.0));
    }

    #[test]
    fn spawns_inside_field_bounds() {
        let mut rng = SimRng::new(1234);
        for _ in 0..100 {
            let p = Pickup::spawn(&mut rng);
            assert!(p.x >= LAWN_LEFT && p.x <= FIELD_WIDTH - 50.0);
            assert!(p.target_y >= 100.0 && p.target_y <= 400.0);
        }
    }
}
