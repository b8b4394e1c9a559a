//! Per-tick simulation
//!
//! The host calls [`Engine::update`] once per frame. Motion constants are per
//! tick, so a run's trajectory depends only on the seed, the configuration
//! and the input trace, never on the elapsed times the host reports.

use glam::DVec2;

use super::collision::{circle_circle_overlap, circle_rect_overlap};
use super::config::{ConfigError, RunConfig};
use super::rng::SeededRandom;
use super::state::{Collectible, Obstacle, ObstacleKind, Player, RunState, RunStatus};
use crate::consts::*;
use crate::input::InputVector;

/// What happened during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// False when the update was a no-op (not playing)
    pub advanced: bool,
    pub obstacle_spawned: bool,
    pub collectible_spawned: bool,
    /// Collectibles picked up this tick
    pub collected: u32,
    /// The player hit an obstacle; the run is over
    pub collided: bool,
}

/// Distance-driven spawn trigger.
///
/// Fires at most once per tick. When a single tick scrolls further than the
/// threshold the excess is dropped, not carried into extra spawns.
#[derive(Debug, Clone, PartialEq)]
struct SpawnTimer {
    distance: f64,
    threshold: f64,
}

impl SpawnTimer {
    fn new(threshold: f64) -> Self {
        Self {
            distance: -SPAWN_GRACE_DISTANCE,
            threshold,
        }
    }

    /// Checks the threshold, then accumulates this tick's scroll
    fn advance(&mut self, scroll: f64) -> bool {
        let fire = self.distance > self.threshold;
        if fire {
            self.distance = 0.0;
        }
        self.distance += scroll;
        fire
    }
}

/// Simulation engine owning one run
#[derive(Debug, Clone)]
pub struct Engine {
    state: RunState,
    rng: SeededRandom,
    scroll_speed: f64,
    obstacle_timer: SpawnTimer,
    collectible_timer: SpawnTimer,
}

impl Engine {
    /// Build an engine and start the run immediately
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::prepare(config)?;
        engine.start();
        Ok(engine)
    }

    /// Build an engine in the idle state; call [`Engine::start`] to begin
    pub fn prepare(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = SeededRandom::new(&config.seed);
        let scroll_speed = config.scroll_speed();
        Ok(Self {
            state: RunState::new(config),
            rng,
            scroll_speed,
            obstacle_timer: SpawnTimer::new(OBSTACLE_SPAWN_DISTANCE),
            collectible_timer: SpawnTimer::new(COLLECTIBLE_SPAWN_DISTANCE),
        })
    }

    /// Idle -> Playing; no-op from any other status
    pub fn start(&mut self) {
        if self.state.status == RunStatus::Idle {
            let config = &self.state.config;
            log::info!(
                "Run started: seed={:?} difficulty={} speed={}x",
                config.seed,
                config.difficulty,
                config.speed_multiplier
            );
            self.state.status = RunStatus::Playing;
        }
    }

    /// Playing -> Paused; no-op otherwise
    pub fn pause(&mut self) {
        if self.state.status == RunStatus::Playing {
            self.state.status = RunStatus::Paused;
        }
    }

    /// Paused -> Playing; no-op otherwise
    pub fn resume(&mut self) {
        if self.state.status == RunStatus::Paused {
            self.state.status = RunStatus::Playing;
        }
    }

    /// Read-only view of the run
    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn status(&self) -> RunStatus {
        self.state.status
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.status == RunStatus::GameOver
    }

    /// The final state, once the run has reached a terminal status
    pub fn finished(&self) -> Option<&RunState> {
        self.state.status.is_terminal().then_some(&self.state)
    }

    /// Consume the engine, handing the run state to collaborators
    pub fn into_state(self) -> RunState {
        self.state
    }

    /// Scroll distance per tick for this run
    pub fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }

    /// Advance the run by one tick. No-op unless playing.
    pub fn update(&mut self, input: &InputVector, dt: f64) -> TickEvents {
        let mut events = TickEvents::default();
        if self.state.status != RunStatus::Playing {
            return events;
        }
        events.advanced = true;

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid elapsed time {dt}");
            0.0
        };
        self.state.elapsed += dt;
        self.state.ticks += 1;

        integrate_player(
            &mut self.state.player,
            input,
            self.state.config.speed_multiplier,
        );

        let scroll = self.scroll_speed;
        for obstacle in &mut self.state.obstacles {
            obstacle.pos.y += scroll;
            obstacle.drift();
        }
        for collectible in &mut self.state.collectibles {
            collectible.pos.y += scroll;
        }

        self.state.despawn_offscreen();

        if self.obstacle_timer.advance(scroll) {
            self.spawn_obstacle();
            events.obstacle_spawned = true;
        }
        if self.collectible_timer.advance(scroll) {
            self.spawn_collectible();
            events.collectible_spawned = true;
        }

        if self.hits_obstacle() {
            self.state.status = RunStatus::GameOver;
            events.collided = true;
            log::info!(
                "Game over at tick {}: score={} distance={}",
                self.state.ticks,
                self.state.score,
                self.state.distance
            );
            return events;
        }

        events.collected = self.collect_pickups();

        self.state.distance += scroll;
        self.state.score = self.state.computed_score();

        events
    }

    fn spawn_obstacle(&mut self) {
        let moving = self.rng.chance(MOVING_OBSTACLE_CHANCE);
        let width = self.rng.next_int(OBSTACLE_MIN_WIDTH, OBSTACLE_MAX_WIDTH);
        let height = self.rng.next_int(OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT);
        let x = self.rng.next_int(0, PLAYFIELD_WIDTH as i32 - width);
        let kind = if moving {
            ObstacleKind::Moving {
                vel_x: self
                    .rng
                    .next_float(-OBSTACLE_MAX_DRIFT, OBSTACLE_MAX_DRIFT),
            }
        } else {
            ObstacleKind::Static
        };

        let obstacle = Obstacle {
            pos: DVec2::new(f64::from(x), -f64::from(height)),
            width: f64::from(width),
            height: f64::from(height),
            kind,
        };
        log::debug!("Spawned obstacle at tick {}: {:?}", self.state.ticks, obstacle);
        self.state.obstacles.push(obstacle);
    }

    fn spawn_collectible(&mut self) {
        let x = self.rng.next_int(
            COLLECTIBLE_EDGE_INSET,
            PLAYFIELD_WIDTH as i32 - COLLECTIBLE_EDGE_INSET,
        );
        let collectible = Collectible {
            pos: DVec2::new(f64::from(x), COLLECTIBLE_SPAWN_Y),
            radius: COLLECTIBLE_RADIUS,
            collected: false,
        };
        log::debug!(
            "Spawned collectible at tick {}: x={}",
            self.state.ticks,
            x
        );
        self.state.collectibles.push(collectible);
    }

    /// First overlapping obstacle ends the run
    fn hits_obstacle(&self) -> bool {
        let player = &self.state.player;
        self.state.obstacles.iter().any(|o| {
            circle_rect_overlap(
                player.pos,
                player.radius,
                o.pos,
                DVec2::new(o.width, o.height),
            )
        })
    }

    /// Mark touched collectibles and bank their bonus; returns the count
    fn collect_pickups(&mut self) -> u32 {
        let player = &self.state.player;
        let mut collected = 0;
        for collectible in &mut self.state.collectibles {
            if !collectible.collected
                && circle_circle_overlap(
                    player.pos,
                    player.radius,
                    collectible.pos,
                    collectible.radius,
                )
            {
                collectible.collected = true;
                collected += 1;
            }
        }
        self.state.bonus += u64::from(collected) * POINTS_PER_COLLECTIBLE;
        collected
    }
}

/// Accelerate, damp, cap speed, move, then keep the ship inside the playfield
fn integrate_player(player: &mut Player, input: &InputVector, multiplier: f64) {
    let accel = PLAYER_ACCELERATION * multiplier;
    if input.left {
        player.vel.x -= accel;
    }
    if input.right {
        player.vel.x += accel;
    }
    if input.up {
        player.vel.y -= accel;
    }
    if input.down {
        player.vel.y += accel;
    }

    player.vel *= PLAYER_FRICTION;

    let max_speed = PLAYER_MAX_SPEED * multiplier;
    let speed = player.vel.length();
    if speed > max_speed {
        player.vel = player.vel / speed * max_speed;
    }

    player.pos += player.vel;

    if player.vel.x.abs() > ROTATION_EPSILON || player.vel.y.abs() > ROTATION_EPSILON {
        player.rotation = player.vel.y.atan2(player.vel.x) + std::f64::consts::FRAC_PI_2;
    }

    let min = DVec2::splat(player.radius);
    let max = DVec2::new(
        PLAYFIELD_WIDTH - player.radius,
        PLAYFIELD_HEIGHT - player.radius,
    );
    let clamped = player.pos.clamp(min, max);
    if clamped.x != player.pos.x {
        player.vel.x = 0.0;
    }
    if clamped.y != player.pos.y {
        player.vel.y = 0.0;
    }
    player.pos = clamped;
}
