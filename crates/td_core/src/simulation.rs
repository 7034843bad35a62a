//! The per-level simulation: entity collections, inputs, and the
//! fixed-order tick.
//!
//! [`Simulation`] owns every piece of mutable level state. Exactly one
//! tick is processed per rendered frame at [`crate::config::TICK_RATE`]
//! ticks per second; within a tick the phases below run in a fixed
//! order, and every collection is updated in full before a separate
//! compaction pass removes expired entries.
//!
//! # Phase order
//!
//! 1. Ambient pickup spawn timer
//! 2. Placement-card cooldowns
//! 3. Wave-spawn decision
//! 4. Defender updates (currency emission, shots, detonations)
//! 5. Remove detonated defenders
//! 6. Projectile updates and hit resolution, drop spent projectiles
//! 7. Attacker updates (strike or walk), remove dead with kill
//!    bookkeeping
//! 8. Pickup updates, drop expired pickups
//! 9. Remove defenders at zero health
//! 10. Win-condition check

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attacker::Attacker;
use crate::cards::CardTray;
use crate::combat;
use crate::config::{Difficulty, AMBIENT_PICKUP_INTERVAL_TICKS, GRID_COLS, GRID_ROWS};
use crate::defender::{Defender, DefenderAction, DefenderKind};
use crate::economy::Economy;
use crate::pickup::Pickup;
use crate::projectile::Projectile;
use crate::rng::SimRng;
use crate::spawner::WaveSpawner;

/// Why a placement request was refused.
///
/// Rejections are normal control flow, not failures; the simulation
/// state is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementRejected {
    /// The cell lies outside the lawn grid.
    #[error("cell is outside the lawn grid")]
    OutOfBounds,
    /// Another defender already occupies the cell.
    #[error("cell is already occupied")]
    CellOccupied,
    /// The balance cannot cover the card's cost.
    #[error("insufficient currency")]
    InsufficientFunds,
    /// The placement card is still cooling down.
    #[error("card is cooling down")]
    CardCoolingDown,
    /// No card exists for the requested kind; a programming error in
    /// the caller, rejected rather than defaulted.
    #[error("no card for the requested defender kind")]
    UnknownKind,
    /// The level has already been decided; the frozen field accepts no
    /// further play.
    #[error("level is already over")]
    LevelOver,
}

/// Everything that happened during one tick, for the presentation
/// layer to react to (sounds, effects, counters) without diffing
/// snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Attackers that entered the field this tick.
    pub attackers_spawned: u32,
    /// Attackers destroyed this tick, by any cause.
    pub kills: u32,
    /// Projectiles fired by shooters.
    pub shots_fired: u32,
    /// Projectile hits landed.
    pub projectile_hits: u32,
    /// Melee strikes taken by defenders.
    pub melee_strikes: u32,
    /// Bombs that detonated.
    pub detonations: u32,
    /// Currency credited by generators this tick.
    pub currency_emitted: i32,
    /// Ambient pickups spawned.
    pub pickups_spawned: u32,
    /// Pickups that timed out uncollected.
    pub pickups_expired: u32,
    /// An attacker crossed the left boundary; the level is lost and
    /// the simulation freezes.
    pub breached: bool,
    /// The win condition was met this tick. Reported exactly once per
    /// level.
    pub level_complete: bool,
}

/// The simulation state for one level in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    tick: u64,
    level: u32,
    difficulty: Difficulty,
    rng: SimRng,
    economy: Economy,
    cards: CardTray,
    spawner: WaveSpawner,
    defenders: Vec<Defender>,
    attackers: Vec<Attacker>,
    projectiles: Vec<Projectile>,
    pickups: Vec<Pickup>,
    ambient_pickup_timer: u32,
    kills: u32,
    defeated: bool,
    complete: bool,
}

impl Simulation {
    /// Fresh simulation for `level` at `difficulty`, with the spawn
    /// and pickup randomness derived from `seed`.
    #[must_use]
    pub fn new(level: u32, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            tick: 0,
            level,
            difficulty,
            rng: SimRng::new(seed),
            economy: Economy::new(),
            cards: CardTray::new(),
            spawner: WaveSpawner::new(level, difficulty),
            defenders: Vec::new(),
            attackers: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            ambient_pickup_timer: AMBIENT_PICKUP_INTERVAL_TICKS,
            kills: 0,
            defeated: false,
            complete: false,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// A defeated or completed level is frozen: the call is a no-op
    /// returning empty events, leaving the final state on display.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.defeated || self.complete {
            return events;
        }
        self.tick += 1;

        // 1. Ambient pickup spawn.
        self.ambient_pickup_timer -= 1;
        if self.ambient_pickup_timer == 0 {
            self.ambient_pickup_timer = AMBIENT_PICKUP_INTERVAL_TICKS;
            self.pickups.push(Pickup::spawn(&mut self.rng));
            events.pickups_spawned += 1;
        }

        // 2. Placement-card cooldowns.
        self.cards.tick();

        // 3. Wave-spawn decision.
        if let Some(attacker) = self.spawner.try_spawn(&mut self.rng) {
            self.attackers.push(attacker);
            events.attackers_spawned += 1;
        }

        // 4. Defender updates. Actions apply immediately, so a bomb
        // going off mid-phase changes what later shooters can see.
        for i in 0..self.defenders.len() {
            let ahead = combat::target_ahead(&self.defenders[i], &self.attackers);
            match self.defenders[i].update(ahead) {
                DefenderAction::None => {}
                DefenderAction::EmitCurrency(amount) => {
                    self.economy.credit(amount);
                    events.currency_emitted += amount;
                }
                DefenderAction::Fire => {
                    let defender = &self.defenders[i];
                    let (x, y) = defender.center();
                    self.projectiles.push(Projectile::new(x, y, defender.row));
                    events.shots_fired += 1;
                }
                DefenderAction::Detonate => {
                    let (row, col) = (self.defenders[i].row, self.defenders[i].col);
                    let killed = combat::detonate_at(row, col, &mut self.attackers);
                    self.kills += killed;
                    events.kills += killed;
                    events.detonations += 1;
                }
            }
        }

        // 5. Remove detonated defenders.
        self.defenders.retain(|d| !d.is_expired());

        // 6. Projectiles.
        events.projectile_hits =
            combat::projectile_phase(&mut self.projectiles, &mut self.attackers);

        // 7. Attackers.
        let melee = combat::melee_phase(&mut self.attackers, &mut self.defenders);
        events.melee_strikes = melee.strikes;
        if melee.breached {
            self.defeated = true;
            events.breached = true;
        }
        let live_before = self.attackers.len();
        self.attackers.retain(|a| !a.is_dead());
        let killed = (live_before - self.attackers.len()) as u32;
        self.kills += killed;
        events.kills += killed;

        // 8. Pickups.
        for pickup in &mut self.pickups {
            pickup.update();
        }
        let pickups_before = self.pickups.len();
        self.pickups.retain(|p| !p.is_expired());
        events.pickups_expired = (pickups_before - self.pickups.len()) as u32;

        // 9. Remove defenders at zero health.
        self.defenders.retain(|d| !d.is_dead());

        // 10. Win condition: the whole wave is down and the field is
        // clear. Latched so it fires exactly once per level.
        if !self.defeated && self.kills >= self.spawner.total() && self.attackers.is_empty() {
            self.complete = true;
            events.level_complete = true;
        }

        tracing::debug!(
            tick = self.tick,
            attackers = self.attackers.len(),
            defenders = self.defenders.len(),
            kills = self.kills,
            balance = self.economy.balance(),
            "tick complete"
        );

        events
    }

    /// Handle a placement request for `kind` at `(row, col)`.
    ///
    /// Valid only while the level is undecided, on an empty in-bounds
    /// cell, with an affordable card that is off cooldown; anything
    /// else is rejected with no state change. A successful placement
    /// debits the cost, starts the card's cooldown and clears the card
    /// selection.
    pub fn place_defender(
        &mut self,
        row: usize,
        col: usize,
        kind: DefenderKind,
    ) -> Result<(), PlacementRejected> {
        if self.defeated || self.complete {
            return Err(PlacementRejected::LevelOver);
        }
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(PlacementRejected::OutOfBounds);
        }
        let Some(card) = self.cards.card(kind) else {
            debug_assert!(false, "no placement card for {kind:?}");
            return Err(PlacementRejected::UnknownKind);
        };
        if !card.is_ready() {
            return Err(PlacementRejected::CardCoolingDown);
        }
        let cost = card.cost();
        if self.defenders.iter().any(|d| d.row == row && d.col == col) {
            return Err(PlacementRejected::CellOccupied);
        }
        if !self.economy.can_afford(cost) {
            return Err(PlacementRejected::InsufficientFunds);
        }

        self.economy.debit(cost);
        self.defenders.push(Defender::new(kind, row, col));
        if let Some(card) = self.cards.card_mut(kind) {
            card.start_cooldown();
        }
        self.cards.clear_selection();
        Ok(())
    }

    /// Collect every pickup within the collection radius of a click at
    /// `(x, y)`. Returns the total currency collected (zero if the
    /// click missed or the level is already over).
    pub fn collect_pickup(&mut self, x: f32, y: f32) -> i32 {
        if self.defeated || self.complete {
            return 0;
        }
        let mut collected = 0;
        self.pickups.retain(|p| {
            if p.contains_point(x, y) {
                collected += p.value();
                false
            } else {
                true
            }
        });
        if collected > 0 {
            self.economy.credit(collected);
        }
        collected
    }

    /// Select a placement card for the UI. Ignored while the card is
    /// cooling down or unaffordable, or once the level is decided.
    pub fn select_card(&mut self, kind: DefenderKind) {
        if self.defeated || self.complete {
            return;
        }
        let affordable = self
            .cards
            .card(kind)
            .is_some_and(|c| self.economy.can_afford(c.cost()));
        if affordable {
            self.cards.select(kind);
        }
    }

    /// Ticks processed so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Level being played.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Difficulty tier in effect.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current currency balance.
    #[must_use]
    pub const fn balance(&self) -> i32 {
        self.economy.balance()
    }

    /// Placed defenders.
    #[must_use]
    pub fn defenders(&self) -> &[Defender] {
        &self.defenders
    }

    /// Live attackers.
    #[must_use]
    pub fn attackers(&self) -> &[Attacker] {
        &self.attackers
    }

    /// Projectiles in flight.
    #[must_use]
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Uncollected pickups.
    #[must_use]
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// The card tray (cooldowns and selection) for display.
    #[must_use]
    pub const fn cards(&self) -> &CardTray {
        &self.cards
    }

    /// Attackers destroyed this level.
    #[must_use]
    pub const fn kills(&self) -> u32 {
        self.kills
    }

    /// Attackers spawned so far this level.
    #[must_use]
    pub const fn wave_spawned(&self) -> u32 {
        self.spawner.spawned()
    }

    /// Attackers scheduled for this level.
    #[must_use]
    pub const fn wave_total(&self) -> u32 {
        self.spawner.total()
    }

    /// Whether an attacker has breached the left boundary. A defeated
    /// simulation no longer advances.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Whether the level's win condition has been met.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
impl Simulation {
    /// Spend the whole wave so no further attackers enter the field,
    /// and clear any that already have.
    pub(crate) fn drain_wave(&mut self) {
        while !self.spawner.is_exhausted() {
            self.spawner.try_spawn(&mut self.rng);
        }
        self.attackers.clear();
    }

    /// Put the level one tick away from its win condition.
    pub(crate) fn mark_wave_cleared(&mut self) {
        self.drain_wave();
        self.kills = self.spawner.total();
    }
}
