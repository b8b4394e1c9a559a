//! Input normalization
//!
//! Turns raw device events (key codes, touch positions) into the five
//! booleans the simulation reads each tick. Unknown keys and touch moves
//! without a touch start are ignored.

use std::sync::Arc;

use glam::DVec2;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::consts::TOUCH_DEADZONE;

/// Logical intent for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputVector {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl InputVector {
    /// True when any direction (not boost) is held
    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            Action::Up => self.up = pressed,
            Action::Down => self.down = pressed,
            Action::Boost => self.boost = pressed,
        }
    }
}

/// One logical control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Boost,
}

impl Action {
    /// Map a DOM `KeyboardEvent.code` (arrows, WASD, space)
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "ArrowUp" | "KeyW" => Some(Action::Up),
            "ArrowDown" | "KeyS" => Some(Action::Down),
            "Space" => Some(Action::Boost),
            _ => None,
        }
    }
}

/// Raw device event as delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Screen-space position in pixels
    TouchStart(f64, f64),
    TouchMove(f64, f64),
    TouchEnd,
}

/// Device-to-intent translator
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    state: InputVector,
    touch_origin: Option<DVec2>,
    deadzone: f64,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::with_deadzone(TOUCH_DEADZONE)
    }

    pub fn with_deadzone(deadzone: f64) -> Self {
        Self {
            state: InputVector::default(),
            touch_origin: None,
            deadzone,
        }
    }

    /// Snapshot of the current intent (a copy, never a live reference)
    pub fn input_state(&self) -> InputVector {
        self.state
    }

    /// Release everything, including any in-progress touch
    pub fn reset(&mut self) {
        self.state = InputVector::default();
        self.touch_origin = None;
    }

    /// Feed one raw event. Returns true when the event mapped to a control,
    /// so a host can suppress the device default (scrolling, etc).
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::KeyUp(code) => self.key_up(code),
            InputEvent::TouchStart(x, y) => {
                self.touch_start(*x, *y);
                true
            }
            InputEvent::TouchMove(x, y) => self.touch_move(*x, *y),
            InputEvent::TouchEnd => {
                self.touch_end();
                true
            }
        }
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.set_key(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.set_key(code, false)
    }

    fn set_key(&mut self, code: &str, pressed: bool) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.state.set(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.touch_origin = Some(DVec2::new(x, y));
    }

    /// Directions follow the drag from the touch start, past the deadzone
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        let Some(origin) = self.touch_origin else {
            return false;
        };
        let delta = DVec2::new(x, y) - origin;
        self.state.left = delta.x < -self.deadzone;
        self.state.right = delta.x > self.deadzone;
        self.state.up = delta.y < -self.deadzone;
        self.state.down = delta.y > self.deadzone;
        true
    }

    /// Lifting the finger releases all four directions
    pub fn touch_end(&mut self) {
        self.touch_origin = None;
        self.state.left = false;
        self.state.right = false;
        self.state.up = false;
        self.state.down = false;
    }
}

/// Input holder shared between an event thread and the simulation thread
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    inner: Arc<Mutex<InputNormalizer>>,
}

impl SharedInput {
    pub fn new(normalizer: InputNormalizer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(normalizer)),
        }
    }

    pub fn handle(&self, event: &InputEvent) -> bool {
        self.inner.lock().handle(event)
    }

    pub fn input_state(&self) -> InputVector {
        self.inner.lock().input_state()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputNormalizer::new();
        assert!(input.key_down("ArrowLeft"));
        assert!(input.key_down("KeyW"));
        assert!(input.key_down("Space"));

        let state = input.input_state();
        assert!(state.left && state.up && state.boost);
        assert!(!state.right && !state.down);

        assert!(input.key_up("KeyA"));
        assert!(!input.input_state().left);
        assert!(input.input_state().up);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputNormalizer::new();
        assert!(!input.key_down("KeyQ"));
        assert!(!input.key_up("Escape"));
        assert_eq!(input.input_state(), InputVector::default());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut input = InputNormalizer::new();
        input.key_down("ArrowRight");
        let mut snapshot = input.input_state();
        snapshot.right = false;
        snapshot.down = true;
        assert!(input.input_state().right);
        assert!(!input.input_state().down);
    }

    #[test]
    fn test_touch_deadzone() {
        let mut input = InputNormalizer::new();
        input.touch_start(100.0, 100.0);

        // Exactly at the deadzone: still inactive
        input.touch_move(120.0, 80.0);
        assert_eq!(input.input_state(), InputVector::default());

        input.touch_move(121.0, 70.0);
        let state = input.input_state();
        assert!(state.right && state.up);
        assert!(!state.left && !state.down);

        input.touch_move(60.0, 130.0);
        let state = input.input_state();
        assert!(state.left && state.down);
        assert!(!state.right && !state.up);
    }

    #[test]
    fn test_touch_end_releases_directions_only() {
        let mut input = InputNormalizer::new();
        input.key_down("Space");
        input.touch_start(0.0, 0.0);
        input.touch_move(-50.0, -50.0);
        input.touch_end();

        let state = input.input_state();
        assert!(!state.any_direction());
        assert!(state.boost);
    }

    #[test]
    fn test_touch_move_without_start_ignored() {
        let mut input = InputNormalizer::new();
        assert!(!input.touch_move(500.0, 500.0));
        assert_eq!(input.input_state(), InputVector::default());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputNormalizer::new();
        input.key_down("ArrowDown");
        input.key_down("Space");
        input.touch_start(10.0, 10.0);
        input.reset();
        assert_eq!(input.input_state(), InputVector::default());

        // The touch origin was dropped too
        assert!(!input.touch_move(100.0, 100.0));
    }

    #[test]
    fn test_event_dispatch() {
        let mut input = InputNormalizer::with_deadzone(5.0);
        let events = [
            InputEvent::KeyDown("KeyD".into()),
            InputEvent::TouchStart(0.0, 0.0),
            InputEvent::TouchMove(0.0, 10.0),
        ];
        for event in &events {
            assert!(input.handle(event));
        }
        let state = input.input_state();
        assert!(state.down);
        // Touch move recomputes all four directions
        assert!(!state.right);
        assert!(!input.handle(&InputEvent::KeyDown("Tab".into())));
    }

    #[test]
    fn test_shared_input_across_threads() {
        let shared = SharedInput::default();
        let writer = shared.clone();
        let handle = std::thread::spawn(move || {
            writer.handle(&InputEvent::KeyDown("ArrowUp".into()));
        });
        handle.join().unwrap();
        assert!(shared.input_state().up);

        shared.reset();
        assert_eq!(shared.input_state(), InputVector::default());
    }
}
