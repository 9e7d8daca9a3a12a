//! The read-only, per-tick view of input consumed by the kinematics.

use glam::Vec2;

use crate::bindings::{Control, KeyBindings};
use crate::keyboard::KeyboardState;
use crate::pointer::PointerState;
use crate::viewport::Viewport;

/// Held state of every movement control for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldControls {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub jump: bool,
    pub crouch: bool,
    pub boost: bool,
}

impl HeldControls {
    /// Whether any of the four planar direction controls is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }
}

/// Input for one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub held: HeldControls,
    /// Pointer motion since the previous tick, already divided by the
    /// viewport extents.
    pub pointer: Vec2,
    /// Set only on the tick the camera-mode key went down.
    pub toggle_camera_mode: bool,
}

impl InputSnapshot {
    /// Fold the frame's device state into a snapshot.
    ///
    /// The caller clears the keyboard and pointer transients afterwards.
    pub fn capture(
        keyboard: &KeyboardState,
        pointer: &PointerState,
        bindings: &KeyBindings,
        viewport: &Viewport,
    ) -> Self {
        let held = |control| bindings.is_held(control, keyboard);
        Self {
            held: HeldControls {
                forward: held(Control::Forward),
                backward: held(Control::Backward),
                strafe_left: held(Control::StrafeLeft),
                strafe_right: held(Control::StrafeRight),
                jump: held(Control::Jump),
                crouch: held(Control::Crouch),
                boost: held(Control::Boost),
            },
            pointer: viewport.normalise(pointer.delta()),
            toggle_camera_mode: bindings.just_pressed(Control::CameraMode, keyboard),
        }
    }

    /// A snapshot with only the given controls held and no pointer motion.
    pub fn holding(held: HeldControls) -> Self {
        Self {
            held,
            ..Default::default()
        }
    }
}
