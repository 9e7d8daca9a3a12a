//! Scripted device input for headless runs.

use tideline_input::{KeyboardState, PointerState, RawKeyEvent};
use winit::keyboard::KeyCode;

/// One step of the script, starting at a given tick.
#[derive(Clone, Copy, Debug)]
pub enum Cue {
    Press(KeyCode),
    Release(KeyCode),
    /// Raw pointer motion in pixels.
    Drag(f64, f64),
}

/// Walk, look around, run, fly over the terrain, then land back.
const TOUR: &[(u64, Cue)] = &[
    (30, Cue::Press(KeyCode::KeyW)),
    (90, Cue::Drag(-120.0, 0.0)),
    (120, Cue::Press(KeyCode::ShiftLeft)),
    (240, Cue::Release(KeyCode::ShiftLeft)),
    (260, Cue::Press(KeyCode::KeyA)),
    (300, Cue::Release(KeyCode::KeyA)),
    (320, Cue::Release(KeyCode::KeyW)),
    (360, Cue::Press(KeyCode::KeyC)),
    (361, Cue::Release(KeyCode::KeyC)),
    (370, Cue::Drag(40.0, 30.0)),
    (380, Cue::Press(KeyCode::KeyW)),
    (380, Cue::Press(KeyCode::Space)),
    (440, Cue::Release(KeyCode::Space)),
    (500, Cue::Release(KeyCode::KeyW)),
    (520, Cue::Press(KeyCode::KeyC)),
    (521, Cue::Release(KeyCode::KeyC)),
    (540, Cue::Press(KeyCode::KeyS)),
    (600, Cue::Release(KeyCode::KeyS)),
];

/// Replays [`TOUR`] into the device state, one tick at a time.
pub struct Script {
    cues: &'static [(u64, Cue)],
    next: usize,
}

impl Script {
    pub fn tour() -> Self {
        Self {
            cues: TOUR,
            next: 0,
        }
    }

    /// Feed every cue scheduled for `tick`.
    pub fn feed(&mut self, tick: u64, keyboard: &mut KeyboardState, pointer: &mut PointerState) {
        while let Some(&(at, cue)) = self.cues.get(self.next)
            && at <= tick
        {
            match cue {
                Cue::Press(key) => keyboard.process_raw(RawKeyEvent::pressed(key)),
                Cue::Release(key) => keyboard.process_raw(RawKeyEvent::released(key)),
                Cue::Drag(dx, dy) => pointer.on_raw_motion(dx, dy),
            }
            self.next += 1;
        }
    }

    /// Tick of the last cue.
    pub fn length(&self) -> u64 {
        self.cues.last().map_or(0, |&(at, _)| at)
    }
}
