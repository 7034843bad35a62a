//! # TD Core
//!
//! Deterministic simulation core for a lane-based tower-defense game.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No audio
//! - No system randomness (a seeded generator is owned by the simulation)
//!
//! This separation enables:
//! - Headless runs and scripted playtesting
//! - Reproducible sessions from a single seed
//! - Fast balance testing without a window
//!
//! ## Crate Structure
//!
//! - [`simulation`] - Fixed-timestep level simulation
//! - [`game`] - Session state machine and input handling
//! - [`defender`], [`attacker`], [`projectile`], [`pickup`] - Entities
//! - [`spawner`] - Wave pacing and variant selection
//! - [`combat`] - Melee, projectile, and area-effect resolution
//! - [`economy`], [`cards`] - Currency and the placement card tray
//! - [`save`] - Per-difficulty progress records
//! - [`config`] - Balance constants and difficulty tiers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod attacker;
pub mod cards;
pub mod combat;
pub mod config;
pub mod defender;
pub mod economy;
pub mod error;
pub mod game;
pub mod pickup;
pub mod projectile;
pub mod rng;
pub mod save;
pub mod simulation;
pub mod spawner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::attacker::{Attacker, AttackerKind};
    pub use crate::cards::{Card, CardTray};
    pub use crate::config::Difficulty;
    pub use crate::defender::{Defender, DefenderKind};
    pub use crate::economy::Economy;
    pub use crate::error::{GameError, Result};
    pub use crate::game::{Game, GameInput, GameMode};
    pub use crate::pickup::Pickup;
    pub use crate::projectile::Projectile;
    pub use crate::save::{SaveRecord, SaveStore};
    pub use crate::simulation::{PlacementRejected, Simulation, TickEvents};
    pub use crate::spawner::WaveSpawner;
}
