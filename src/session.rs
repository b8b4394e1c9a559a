//! Run setup and hand-off
//!
//! Everything between the host and the engine that is not input: choosing a
//! seed for a game mode, and delivering the finished run to progression and
//! the remote scoreboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progression::Progression;
use crate::sim::{Difficulty, Engine, RunConfig, RunState};

/// Which kind of run the player started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Practice: local seed, easy
    Standard,
    /// Shared seed for the calendar day, hard
    Daily,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Standard => "Standard",
            GameMode::Daily => "Daily Challenge",
        }
    }

    pub fn config(&self, seed: impl Into<String>) -> RunConfig {
        match self {
            GameMode::Standard => RunConfig::standard(seed),
            GameMode::Daily => RunConfig::daily(seed),
        }
    }
}

/// UTC calendar-day identifier, `YYYY-MM-DD`
pub fn day_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

pub fn today_key() -> String {
    day_key(Utc::now())
}

/// Practice seed from a wall-clock timestamp in milliseconds
pub fn practice_seed(timestamp_ms: i64) -> String {
    format!("standard-{timestamp_ms}")
}

/// Supplies the shared seed for a day (remote in production)
pub trait DailySeedSource {
    fn seed_for(&self, day_key: &str) -> Option<String>;
}

/// Receives finished runs (remote scoreboard in production)
pub trait ScoreSink {
    /// Returns false when the submission failed
    fn submit(&mut self, result: &RunResult) -> bool;
}

/// Summary of a finished run handed to collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub score: u64,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub distance: f64,
    pub elapsed: f64,
    pub ticks: u64,
}

impl RunResult {
    pub fn from_state(state: &RunState, mode: GameMode) -> Self {
        Self {
            score: state.score,
            difficulty: state.config.difficulty,
            mode,
            distance: state.distance,
            elapsed: state.elapsed,
            ticks: state.ticks,
        }
    }
}

/// Build the engine for a daily run, if the source has a seed for that day
pub fn daily_engine(source: &dyn DailySeedSource, day_key: &str) -> Option<Engine> {
    let seed = source.seed_for(day_key)?;
    match Engine::new(GameMode::Daily.config(seed)) {
        Ok(engine) => Some(engine),
        Err(e) => {
            log::warn!("Daily seed for {day_key} rejected: {e}");
            None
        }
    }
}

/// Record a finished run locally and submit it.
///
/// Returns `None` while the run is still in progress. A failed submission is
/// logged and does not affect the local record.
pub fn finish_run(
    engine: &Engine,
    mode: GameMode,
    progression: &mut Progression,
    sink: &mut dyn ScoreSink,
) -> Option<RunResult> {
    let state = engine.finished()?;
    let result = RunResult::from_state(state, mode);

    if progression.update_best_score(result.score) {
        log::info!("New personal best: {}", result.score);
    }
    if !sink.submit(&result) {
        log::warn!(
            "Score submission failed ({} on {})",
            result.score,
            result.difficulty
        );
    }
    Some(result)
}
