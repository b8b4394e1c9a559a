//! Local progression
//!
//! Unlocked speed multipliers and personal bests, persisted between runs by
//! the host. The simulation only ever receives a chosen multiplier.

use serde::{Deserialize, Serialize};

/// Persisted progression state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Progression {
    /// Sorted ascending, no duplicates
    pub unlocked_speed_multipliers: Vec<f64>,
    pub best_local_score: u64,
    pub best_local_streak: u32,
    pub tutorial_completed: bool,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            unlocked_speed_multipliers: vec![1.0],
            best_local_score: 0,
            best_local_streak: 0,
            tutorial_completed: false,
        }
    }
}

impl Progression {
    /// Storage key / file stem
    pub const STORAGE_KEY: &'static str = "velocity-shift-progression";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, multiplier: f64) -> bool {
        self.unlocked_speed_multipliers.contains(&multiplier)
    }

    /// Add a multiplier if it is new. Returns true when it was added.
    pub fn unlock_speed_multiplier(&mut self, multiplier: f64) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 || self.is_unlocked(multiplier) {
            return false;
        }
        self.unlocked_speed_multipliers.push(multiplier);
        self.unlocked_speed_multipliers.sort_by(f64::total_cmp);
        log::info!("Unlocked speed multiplier {multiplier}x");
        true
    }

    /// Returns true when `score` is a new personal best
    pub fn update_best_score(&mut self, score: u64) -> bool {
        if score > self.best_local_score {
            self.best_local_score = score;
            true
        } else {
            false
        }
    }

    pub fn update_best_streak(&mut self, streak: u32) {
        self.best_local_streak = self.best_local_streak.max(streak);
    }

    pub fn complete_tutorial(&mut self) {
        self.tutorial_completed = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
