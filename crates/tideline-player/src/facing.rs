//! Presentation yaw for the avatar model, eased toward its heading.

use std::f32::consts::{PI, TAU};

/// Smoothed model yaw for presenting the avatar's heading.
///
/// The model faces opposite to the movement heading, and turns the short
/// way round toward it by a fixed fraction per tick.
#[derive(Clone, Copy, Debug)]
pub struct ModelFacing {
    /// Current model yaw in radians. Not wrapped.
    pub yaw: f32,
    blend: f32,
}

impl Default for ModelFacing {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            blend: 0.1,
        }
    }
}

impl ModelFacing {
    pub fn update(&mut self, heading: f32) {
        let mut target = heading - PI;
        let diff = target - self.yaw;
        if diff > PI {
            target -= TAU;
        } else if diff < -PI {
            target += TAU;
        }
        self.yaw += (target - self.yaw) * self.blend;
    }
}
