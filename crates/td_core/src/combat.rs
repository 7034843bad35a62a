//! Combat resolution: melee blocking, projectile hits, area effects.
//!
//! These are free functions over the simulation's collections; the
//! [`Simulation`](crate::simulation::Simulation) calls them in a fixed
//! phase order each tick.

use crate::attacker::Attacker;
use crate::config::{ATTACKER_MELEE_TICKS, GRID_SIZE, PROJECTILE_HIT_WINDOW};
use crate::defender::Defender;
use crate::projectile::Projectile;

/// Result of one melee/movement phase over every attacker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeleeOutcome {
    /// Melee strikes landed on defenders this tick.
    pub strikes: u32,
    /// Whether any attacker crossed the lawn's left boundary.
    pub breached: bool,
}

/// Whether any attacker in `defender`'s row stands strictly ahead of
/// it. Shooters use this to decide whether to fire.
#[must_use]
pub fn target_ahead(defender: &Defender, attackers: &[Attacker]) -> bool {
    attackers
        .iter()
        .any(|a| a.row == defender.row && a.x > defender.x())
}

/// Advance every attacker one tick: strike a blocking defender or walk
/// left, then run the melee cooldown down.
///
/// An attacker is blocked by the first defender in collection order
/// that shares its row within one cell width. Defenders reduced to
/// zero health keep blocking until the compaction phase removes them,
/// so damage ordering within a tick stays deterministic.
pub fn melee_phase(attackers: &mut [Attacker], defenders: &mut [Defender]) -> MeleeOutcome {
    let mut outcome = MeleeOutcome::default();

    for attacker in attackers.iter_mut() {
        let blocking = defenders
            .iter_mut()
            .find(|d| d.row == attacker.row && (d.x() - attacker.x).abs() < GRID_SIZE);

        match blocking {
            Some(defender) => {
                if attacker.attack_cooldown == 0 {
                    defender.health -= attacker.attack_damage;
                    attacker.attack_cooldown = ATTACKER_MELEE_TICKS;
                    outcome.strikes += 1;
                }
            }
            None => {
                attacker.x -= attacker.speed;
            }
        }

        if attacker.attack_cooldown > 0 {
            attacker.attack_cooldown -= 1;
        }

        if attacker.has_breached() {
            outcome.breached = true;
        }
    }

    outcome
}

/// Advance every projectile and resolve hits.
///
/// Each projectile moves, then damages at most the first attacker in
/// collection order whose position falls inside the fixed proximity
/// window in its row. Spent and off-field projectiles are removed.
/// Returns the number of hits landed.
pub fn projectile_phase(projectiles: &mut Vec<Projectile>, attackers: &mut [Attacker]) -> u32 {
    let mut hits = 0;

    // Update pass: move and mark, remove in a second pass.
    let mut spent = vec![false; projectiles.len()];
    for (i, projectile) in projectiles.iter_mut().enumerate() {
        projectile.advance();

        let target = attackers.iter_mut().find(|a| {
            a.row == projectile.row
                && (a.x - projectile.x).abs() < PROJECTILE_HIT_WINDOW
                && (a.y() + GRID_SIZE / 2.0 - projectile.y).abs() < PROJECTILE_HIT_WINDOW
        });

        if let Some(attacker) = target {
            attacker.health -= projectile.damage();
            hits += 1;
            spent[i] = true;
        } else if projectile.is_off_field() {
            spent[i] = true;
        }
    }

    let mut index = 0;
    projectiles.retain(|_| {
        let keep = !spent[index];
        index += 1;
        keep
    });

    hits
}

/// Detonate a bomb at `(row, col)`: destroy every attacker within
/// Chebyshev distance 1 of the cell, unconditionally, and return the
/// number destroyed. Each counts as a kill.
pub fn detonate_at(row: usize, col: usize, attackers: &mut Vec<Attacker>) -> u32 {
    let row = row as i32;
    let col = col as i32;
    let before = attackers.len();
    attackers.retain(|a| {
        let dr = (a.row as i32 - row).abs();
        let dc = (a.col() - col).abs();
        dr.max(dc) > 1
    });
    (before - attackers.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacker::AttackerKind;
    use crate::config::{cell_x, Difficulty, ATTACKER_MELEE_DAMAGE, LAWN_LEFT};
    use crate::defender::DefenderKind;

    fn attacker_at(row: usize, x: f32) -> Attacker {
        let mut a = Attacker::new(AttackerKind::Basic, row, Difficulty::Normal);
        a.x = x;
        a
    }

    #[test]
    fn blocked_attacker_strikes_instead_of_moving() {
        let mut defenders = vec![Defender::new(DefenderKind::Blocker, 1, 2)];
        let mut attackers = vec![attacker_at(1, cell_x(2) + GRID_SIZE - 1.0)];
        let x_before = attackers[0].x;

        let outcome = melee_phase(&mut attackers, &mut defenders);

        assert_eq!(outcome.strikes, 1);
        assert_eq!(attackers[0].x, x_before);
        assert_eq!(defenders[0].health, 4000 - ATTACKER_MELEE_DAMAGE);
    }

    #[test]
    fn strikes_repeat_on_the_melee_cooldown() {
        let mut defenders = vec![Defender::new(DefenderKind::Blocker, 0, 0)];
        let mut attackers = vec![attacker_at(0, cell_x(0) + 10.0)];

        let mut strikes = 0;
        for _ in 0..ATTACKER_MELEE_TICKS * 3 {
            strikes += melee_phase(&mut attackers, &mut defenders).strikes;
        }
        assert_eq!(strikes, 3);
        assert_eq!(
            defenders[0].health,
            4000 - 3 * ATTACKER_MELEE_DAMAGE
        );
    }

    #[test]
    fn unblocked_attacker_walks_left() {
        let mut defenders = vec![Defender::new(DefenderKind::Blocker, 0, 0)];
        // Same column, different row: not blocking.
        let mut attackers = vec![attacker_at(3, 500.0)];

        let outcome = melee_phase(&mut attackers, &mut defenders);

        assert_eq!(outcome.strikes, 0);
        assert_eq!(attackers[0].x, 500.0 - attackers[0].speed);
    }

    #[test]
    fn boundary_crossing_reports_breach() {
        let mut attackers = vec![attacker_at(0, LAWN_LEFT + 0.5)];
        let outcome = melee_phase(&mut attackers, &mut []);
        assert!(outcome.breached);
    }

    #[test]
    fn projectile_hits_first_attacker_in_row_only() {
        let shooter = Defender::new(DefenderKind::Shooter, 2, 0);
        let (px, py) = shooter.center();
        let mut projectiles = vec![Projectile::new(px, py, 2)];
        let hit_x = px + crate::config::PROJECTILE_SPEED + 5.0;
        let mut attackers = vec![
            attacker_at(2, hit_x),
            attacker_at(2, hit_x + 1.0),
            attacker_at(1, hit_x),
        ];

        let hits = projectile_phase(&mut projectiles, &mut attackers);

        assert_eq!(hits, 1);
        assert!(projectiles.is_empty());
        assert_eq!(attackers[0].health, 100 - 20);
        assert_eq!(attackers[1].health, 100);
        assert_eq!(attackers[2].health, 100);
    }

    #[test]
    fn projectile_ignores_other_rows_at_same_x() {
        let mut projectiles = vec![Projectile::new(400.0, 140.0, 0)];
        let mut attackers = vec![attacker_at(1, 404.0)];

        let hits = projectile_phase(&mut projectiles, &mut attackers);

        assert_eq!(hits, 0);
        assert_eq!(projectiles.len(), 1);
    }

    #[test]
    fn off_field_projectiles_are_dropped() {
        let mut projectiles = vec![Projectile::new(crate::config::FIELD_WIDTH, 140.0, 0)];
        let hits = projectile_phase(&mut projectiles, &mut []);
        assert_eq!(hits, 0);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn detonation_clears_exactly_the_neighborhood() {
        // Bomb at (2, 4). In range: all eight neighbors and the cell
        // itself. Out of range: two cells away in any direction.
        let mut attackers = vec![
            attacker_at(2, cell_x(4)), // center
            attacker_at(1, cell_x(3)), // diagonal
            attacker_at(3, cell_x(5)), // diagonal
            attacker_at(2, cell_x(6)), // two columns right
            attacker_at(0, cell_x(4)), // two rows up
        ];

        let kills = detonate_at(2, 4, &mut attackers);

        assert_eq!(kills, 3);
        assert_eq!(attackers.len(), 2);
        assert!(attackers.iter().all(|a| {
            let dr = (a.row as i32 - 2).abs();
            let dc = (a.col() - 4).abs();
            dr.max(dc) > 1
        }));
    }

    #[test]
    fn detonation_kills_regardless_of_health() {
        let mut heavy = Attacker::new(AttackerKind::HeavyArmored, 2, Difficulty::Normal);
        heavy.x = cell_x(4);
        let mut attackers = vec![heavy];
        assert_eq!(detonate_at(2, 4, &mut attackers), 1);
        assert!(attackers.is_empty());
    }
}
