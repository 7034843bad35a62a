//! Stationary defenders placed on the lawn grid.

use serde::{Deserialize, Serialize};

use crate::config::{
    cell_x, cell_y, BOMB_FUSE_TICKS, GENERATOR_EMIT_AMOUNT, GENERATOR_EMIT_TICKS, GRID_SIZE,
    SHOOTER_ATTACK_TICKS, TICK_RATE,
};

/// Defender variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    /// Emits currency on a fixed cycle.
    Generator,
    /// Fires projectiles down its lane while a target is ahead.
    Shooter,
    /// High-health obstacle with no offensive behavior.
    Blocker,
    /// Detonates once after a short fuse, clearing a 3x3 neighborhood.
    Bomb,
}

impl DefenderKind {
    /// All placeable kinds, in card-tray order.
    pub const ALL: [Self; 4] = [Self::Shooter, Self::Generator, Self::Blocker, Self::Bomb];

    /// Currency cost to place.
    #[must_use]
    pub const fn cost(self) -> i32 {
        match self {
            Self::Generator | Self::Blocker => 50,
            Self::Shooter => 100,
            Self::Bomb => 150,
        }
    }

    /// Health at placement.
    #[must_use]
    pub const fn base_health(self) -> i32 {
        match self {
            Self::Blocker => 4000,
            Self::Generator | Self::Shooter | Self::Bomb => 300,
        }
    }

    /// Placement-card cooldown in ticks.
    #[must_use]
    pub const fn card_cooldown_ticks(self) -> u32 {
        match self {
            Self::Generator | Self::Shooter => 3 * TICK_RATE,
            Self::Blocker => 10 * TICK_RATE,
            Self::Bomb => 20 * TICK_RATE,
        }
    }
}

/// Per-variant state carried by a placed defender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenderState {
    /// Countdown to the next currency emission.
    Generator {
        /// Ticks until the next emission.
        emit_timer: u32,
    },
    /// Countdown to the next allowed shot.
    Shooter {
        /// Ticks until a shot may fire. Held at zero while no target
        /// is ahead, so a waiting shooter fires the instant one shows.
        attack_cooldown: u32,
    },
    /// No per-tick behavior.
    Blocker,
    /// Fuse countdown and one-shot detonation guard.
    Bomb {
        /// Ticks until detonation.
        fuse: u32,
        /// Set when the bomb has gone off; guards double detonation
        /// and marks the spent shell for removal.
        detonated: bool,
    },
}

/// Effect a defender produced during its update, applied by the
/// simulation in the same phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenderAction {
    /// Nothing this tick.
    None,
    /// Credit the economy.
    EmitCurrency(i32),
    /// Spawn a projectile at the defender's center.
    Fire,
    /// Destroy every attacker within one cell in every direction.
    Detonate,
}

/// A stationary defender occupying exactly one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    /// Lane index.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Remaining health.
    pub health: i32,
    /// Health at placement.
    pub max_health: i32,
    /// Variant state.
    pub state: DefenderState,
}

impl Defender {
    /// Place a defender of `kind` at `(row, col)`.
    #[must_use]
    pub fn new(kind: DefenderKind, row: usize, col: usize) -> Self {
        let state = match kind {
            DefenderKind::Generator => DefenderState::Generator {
                emit_timer: GENERATOR_EMIT_TICKS,
            },
            DefenderKind::Shooter => DefenderState::Shooter {
                attack_cooldown: SHOOTER_ATTACK_TICKS,
            },
            DefenderKind::Blocker => DefenderState::Blocker,
            DefenderKind::Bomb => DefenderState::Bomb {
                fuse: BOMB_FUSE_TICKS,
                detonated: false,
            },
        };
        let health = kind.base_health();
        Self {
            row,
            col,
            health,
            max_health: health,
            state,
        }
    }

    /// Variant tag for this defender.
    #[must_use]
    pub const fn kind(&self) -> DefenderKind {
        match self.state {
            DefenderState::Generator { .. } => DefenderKind::Generator,
            DefenderState::Shooter { .. } => DefenderKind::Shooter,
            DefenderState::Blocker => DefenderKind::Blocker,
            DefenderState::Bomb { .. } => DefenderKind::Bomb,
        }
    }

    /// X coordinate of the left edge of the occupied cell.
    #[must_use]
    pub fn x(&self) -> f32 {
        cell_x(self.col)
    }

    /// Y coordinate of the top edge of the occupied cell.
    #[must_use]
    pub fn y(&self) -> f32 {
        cell_y(self.row)
    }

    /// Center of the occupied cell; projectiles spawn here.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x() + GRID_SIZE / 2.0, self.y() + GRID_SIZE / 2.0)
    }

    /// Advance one tick of self-contained behavior.
    ///
    /// `target_ahead` reports whether a living attacker shares this
    /// defender's row strictly ahead of it; only shooters read it.
    pub fn update(&mut self, target_ahead: bool) -> DefenderAction {
        match &mut self.state {
            DefenderState::Generator { emit_timer } => {
                *emit_timer = emit_timer.saturating_sub(1);
                if *emit_timer == 0 {
                    *emit_timer = GENERATOR_EMIT_TICKS;
                    return DefenderAction::EmitCurrency(GENERATOR_EMIT_AMOUNT);
                }
                DefenderAction::None
            }
            DefenderState::Shooter { attack_cooldown } => {
                *attack_cooldown = attack_cooldown.saturating_sub(1);
                // A ready shooter with nothing ahead holds at zero and
                // re-checks next tick; the cooldown only restarts when
                // a shot actually fires.
                if *attack_cooldown == 0 && target_ahead {
                    *attack_cooldown = SHOOTER_ATTACK_TICKS;
                    return DefenderAction::Fire;
                }
                DefenderAction::None
            }
            DefenderState::Blocker => DefenderAction::None,
            DefenderState::Bomb { fuse, detonated } => {
                *fuse = fuse.saturating_sub(1);
                if *fuse == 0 && !*detonated {
                    *detonated = true;
                    return DefenderAction::Detonate;
                }
                DefenderAction::None
            }
        }
    }

    /// Whether this defender should be removed this tick, independent
    /// of health (a detonated bomb).
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.state, DefenderState::Bomb { detonated: true, .. })
    }

    /// Whether health has been exhausted.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
