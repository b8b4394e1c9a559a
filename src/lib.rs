//! Velocity Shift - an endless-runner arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seeded RNG, physics, spawning, collisions)
//! - `input`: Raw key/touch events -> logical input vector
//! - `session`: Game modes, daily seeds, run results and collaborator boundaries
//! - `progression`: Local unlocks and personal bests
//! - `settings`: Presentation preferences

pub mod input;
pub mod progression;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use input::{InputNormalizer, InputVector, SharedInput};
pub use progression::Progression;
pub use session::{GameMode, RunResult};
pub use settings::Settings;
pub use sim::{ConfigError, Difficulty, Engine, RunConfig, RunState, RunStatus, SeededRandom};

/// Game configuration constants
///
/// Motion values are per tick, not per second: the engine advances one
/// fixed step per host frame regardless of the elapsed time it is handed.
pub mod consts {
    /// Host frame step used by the headless runner and tests
    pub const TICK_DT: f64 = 1.0 / 60.0;

    /// Logical playfield dimensions (origin top-left, +y points down)
    pub const PLAYFIELD_WIDTH: f64 = 800.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Player ship
    pub const PLAYER_RADIUS: f64 = 12.0;
    /// Start position sits this far above the bottom edge
    pub const PLAYER_START_OFFSET: f64 = 100.0;
    pub const PLAYER_ACCELERATION: f64 = 0.5;
    pub const PLAYER_MAX_SPEED: f64 = 8.0;
    /// Velocity retained each tick (exponential decay)
    pub const PLAYER_FRICTION: f64 = 0.95;
    /// Below this per-axis speed the heading is left alone
    pub const ROTATION_EPSILON: f64 = 0.1;

    /// World scroll per tick before multipliers
    pub const BASE_SCROLL_SPEED: f64 = 3.0;
    pub const HARD_SCROLL_FACTOR: f64 = 1.5;

    /// Scrolled distance between spawns
    pub const OBSTACLE_SPAWN_DISTANCE: f64 = 200.0;
    pub const COLLECTIBLE_SPAWN_DISTANCE: f64 = 150.0;
    /// Accumulators start this far below zero so the opening screen is clear
    pub const SPAWN_GRACE_DISTANCE: f64 = 600.0;
    /// Entities are dropped once they pass the bottom edge by this much
    pub const DESPAWN_MARGIN: f64 = 100.0;

    /// Obstacle generation ranges (half-open)
    pub const OBSTACLE_MIN_WIDTH: i32 = 60;
    pub const OBSTACLE_MAX_WIDTH: i32 = 150;
    pub const OBSTACLE_MIN_HEIGHT: i32 = 20;
    pub const OBSTACLE_MAX_HEIGHT: i32 = 60;
    pub const MOVING_OBSTACLE_CHANCE: f64 = 0.3;
    pub const OBSTACLE_MAX_DRIFT: f64 = 2.0;

    /// Collectibles
    pub const COLLECTIBLE_RADIUS: f64 = 8.0;
    pub const COLLECTIBLE_EDGE_INSET: i32 = 30;
    pub const COLLECTIBLE_SPAWN_Y: f64 = -20.0;

    /// Scoring
    pub const POINTS_PER_COLLECTIBLE: u64 = 10;
    pub const DISTANCE_PER_POINT: f64 = 10.0;

    /// Touch swipe deadzone in screen pixels
    pub const TOUCH_DEADZONE: f64 = 20.0;
}
