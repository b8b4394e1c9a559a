//! Browser host binding
//!
//! The page owns the animation frame loop and DOM listeners; it forwards
//! key/touch events here, calls `update` once per frame and renders the
//! JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::input::InputNormalizer;
use crate::session::{GameMode, RunResult, practice_seed};
use crate::sim::Engine;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by a previous module instance
        return;
    }
    log::info!("Velocity Shift starting...");
}

/// One run plus its input state
#[wasm_bindgen]
pub struct WebGame {
    engine: Engine,
    input: InputNormalizer,
    mode: GameMode,
}

#[wasm_bindgen]
impl WebGame {
    /// `seed` is the daily seed from the backend, or omitted for practice
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<String>, daily: bool, speed_multiplier: f64) -> Result<WebGame, JsError> {
        let mode = if daily {
            GameMode::Daily
        } else {
            GameMode::Standard
        };
        let seed = seed.unwrap_or_else(|| practice_seed(js_sys::Date::now() as i64));
        let mut config = mode.config(seed);
        config.speed_multiplier = speed_multiplier;

        Ok(WebGame {
            engine: Engine::new(config)?,
            input: InputNormalizer::new(),
            mode,
        })
    }

    /// Returns true when the key is bound (caller should preventDefault)
    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.key_up(code)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.input.touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.input.touch_move(x, y);
    }

    pub fn touch_end(&mut self) {
        self.input.touch_end();
    }

    /// Advance one frame; `dt` in seconds
    pub fn update(&mut self, dt: f64) {
        let input = self.input.input_state();
        self.engine.update(&input, dt);
    }

    pub fn pause(&mut self) {
        self.engine.pause();
        self.input.reset();
    }

    pub fn resume(&mut self) {
        self.input.reset();
        self.engine.resume();
    }

    pub fn score(&self) -> f64 {
        self.engine.score() as f64
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Snapshot for the renderer
    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.engine.state())?)
    }

    /// Final result for the results page, once the run has ended
    pub fn result_json(&self) -> Result<Option<String>, JsError> {
        match self.engine.finished() {
            Some(state) => Ok(Some(serde_json::to_string(&RunResult::from_state(
                state, self.mode,
            ))?)),
            None => Ok(None),
        }
    }
}
