//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One seeded random stream per run
//! - Per-tick motion, independent of reported frame time
//! - Stable iteration order (spawn order)
//! - No rendering, timers or platform dependencies

pub mod collision;
pub mod config;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{circle_circle_overlap, circle_rect_overlap};
pub use config::{ConfigError, Difficulty, RunConfig};
pub use rng::SeededRandom;
pub use state::{Collectible, Obstacle, ObstacleKind, Player, RunState, RunStatus};
pub use tick::{Engine, TickEvents};
