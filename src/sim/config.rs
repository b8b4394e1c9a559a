//! Run configuration
//!
//! Validated once when an engine is built; invalid values are rejected, never clamped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BASE_SCROLL_SPEED, HARD_SCROLL_FACTOR};

/// Configuration errors surfaced to the host at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed multiplier must be a positive finite number, got {0}")]
    NonPositiveSpeed(f64),
    #[error("seed must not be empty")]
    EmptySeed,
    #[error("unknown difficulty '{0}' (expected 'easy' or 'hard')")]
    UnknownDifficulty(String),
}

/// Difficulty tier; also the leaderboard bucket a score is submitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Scroll speed multiplier for this tier
    pub fn scroll_factor(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Hard => HARD_SCROLL_FACTOR,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Everything that parameterizes a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub seed: String,
    pub difficulty: Difficulty,
    pub speed_multiplier: f64,
}

impl RunConfig {
    pub fn new(seed: impl Into<String>, difficulty: Difficulty, speed_multiplier: f64) -> Self {
        Self {
            seed: seed.into(),
            difficulty,
            speed_multiplier,
        }
    }

    /// Standard (practice) run: easy, normal speed
    pub fn standard(seed: impl Into<String>) -> Self {
        Self::new(seed, Difficulty::Easy, 1.0)
    }

    /// Daily challenge run: hard, normal speed
    pub fn daily(seed: impl Into<String>) -> Self {
        Self::new(seed, Difficulty::Hard, 1.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed.is_empty() {
            return Err(ConfigError::EmptySeed);
        }
        if !self.speed_multiplier.is_finite() || self.speed_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed_multiplier));
        }
        Ok(())
    }

    /// World scroll distance per tick
    pub fn scroll_speed(&self) -> f64 {
        BASE_SCROLL_SPEED * self.speed_multiplier * self.difficulty.scroll_factor()
    }
}
