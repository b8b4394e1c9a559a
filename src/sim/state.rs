//! Run state and entity types
//!
//! `RunState` is the single source of truth for a run. Collaborators only
//! ever see it through `&RunState` or a clone.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::config::RunConfig;
use crate::consts::*;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunStatus {
    /// Built but not started
    Idle,
    Playing,
    Paused,
    /// Terminal: the player hit an obstacle
    GameOver,
    /// Terminal; reserved, nothing currently enters it
    Won,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::GameOver | RunStatus::Won)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Heading in radians; 0 points up the screen
    pub rotation: f64,
    pub radius: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: DVec2::new(
                PLAYFIELD_WIDTH / 2.0,
                PLAYFIELD_HEIGHT - PLAYER_START_OFFSET,
            ),
            vel: DVec2::ZERO,
            rotation: 0.0,
            radius: PLAYER_RADIUS,
        }
    }
}

/// Obstacle behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ObstacleKind {
    Static,
    /// Drifts horizontally and bounces off the side walls
    Moving { vel_x: f64 },
}

/// Axis-aligned obstacle; `pos` is the top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn is_moving(&self) -> bool {
        matches!(self.kind, ObstacleKind::Moving { .. })
    }

    /// Apply horizontal drift, reflecting at either playfield edge
    pub fn drift(&mut self) {
        if let ObstacleKind::Moving { ref mut vel_x } = self.kind {
            self.pos.x += *vel_x;
            let max_x = PLAYFIELD_WIDTH - self.width;
            if self.pos.x <= 0.0 {
                self.pos.x = 0.0;
                *vel_x = vel_x.abs();
            } else if self.pos.x >= max_x {
                self.pos.x = max_x;
                *vel_x = -vel_x.abs();
            }
        }
    }
}

/// Bonus pickup; `pos` is the center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: DVec2,
    pub radius: f64,
    pub collected: bool,
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub status: RunStatus,
    /// Distance points plus collectible bonuses
    pub score: u64,
    /// Total world scroll so far
    pub distance: f64,
    /// Host-reported elapsed seconds while playing
    pub elapsed: f64,
    /// Ticks advanced while playing
    pub ticks: u64,
    /// Points earned from collectibles
    pub bonus: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub config: RunConfig,
}

impl RunState {
    /// Fresh idle state for the given configuration
    pub fn new(config: RunConfig) -> Self {
        Self {
            status: RunStatus::Idle,
            score: 0,
            distance: 0.0,
            elapsed: 0.0,
            ticks: 0,
            bonus: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            config,
        }
    }

    /// Score implied by distance and bonuses
    pub fn computed_score(&self) -> u64 {
        (self.distance / DISTANCE_PER_POINT).floor() as u64 + self.bonus
    }

    /// Drop entities that scrolled past the bottom edge plus margin
    pub fn despawn_offscreen(&mut self) {
        let limit = PLAYFIELD_HEIGHT + DESPAWN_MARGIN;
        self.obstacles.retain(|o| o.pos.y < limit);
        self.collectibles.retain(|c| c.pos.y < limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_centered_near_bottom() {
        let state = RunState::new(RunConfig::standard("s"));
        assert_eq!(state.player.pos, DVec2::new(400.0, 500.0));
        assert_eq!(state.player.radius, PLAYER_RADIUS);
        assert_eq!(state.status, RunStatus::Idle);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn moving_obstacle_reflects_at_edges() {
        let mut obstacle = Obstacle {
            pos: DVec2::new(1.0, 0.0),
            width: 100.0,
            height: 20.0,
            kind: ObstacleKind::Moving { vel_x: -1.5 },
        };
        obstacle.drift();
        assert_eq!(obstacle.pos.x, 0.0);
        assert_eq!(obstacle.kind, ObstacleKind::Moving { vel_x: 1.5 });

        obstacle.pos.x = 699.0;
        obstacle.drift();
        assert_eq!(obstacle.pos.x, 700.0);
        assert_eq!(obstacle.kind, ObstacleKind::Moving { vel_x: -1.5 });
    }

    #[test]
    fn static_obstacle_does_not_drift() {
        let mut obstacle = Obstacle {
            pos: DVec2::new(10.0, 0.0),
            width: 100.0,
            height: 20.0,
            kind: ObstacleKind::Static,
        };
        obstacle.drift();
        assert_eq!(obstacle.pos.x, 10.0);
        assert!(!obstacle.is_moving());
    }

    #[test]
    fn despawn_uses_margin() {
        let mut state = RunState::new(RunConfig::standard("s"));
        state.collectibles.push(Collectible {
            pos: DVec2::new(100.0, 699.0),
            radius: 8.0,
            collected: false,
        });
        state.collectibles.push(Collectible {
            pos: DVec2::new(100.0, 700.0),
            radius: 8.0,
            collected: true,
        });
        state.despawn_offscreen();
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.collectibles[0].pos.y, 699.0);
    }

    #[test]
    fn terminal_statuses() {
        assert!(RunStatus::GameOver.is_terminal());
        assert!(RunStatus::Won.is_terminal());
        assert!(!RunStatus::Paused.is_terminal());
    }
}
