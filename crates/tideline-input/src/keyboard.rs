//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates key events during a frame and answers two
//! questions for any key code: is it held, and was it pressed this frame.
//! The second one is what makes the camera toggle edge-triggered.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The key involved.
    pub key: KeyCode,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `key`.
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `key`.
    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Tracks per-frame keyboard state by physical key code.
///
/// Forward events with [`process_event`](Self::process_event) or
/// [`process_raw`](Self::process_raw), read held/pressed state while building
/// the tick's snapshot, then call [`clear_transients`](Self::clear_transients).
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`]. Keys without a known code are ignored.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_raw(RawKeyEvent {
                key,
                state: event.state,
                repeat: event.repeat,
            });
        }
    }

    /// Processes a [`RawKeyEvent`]. Repeat events never register a new press.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.held.insert(event.key) {
                    self.just_pressed.insert(event.key);
                }
            }
            ElementState::Released => {
                self.held.remove(&event.key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Clears the per-frame press set. Call once per tick after capture.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}
