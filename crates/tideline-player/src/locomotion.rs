//! Avatar locomotion: camera-relative heading, eased speed, action labels
//! and the terrain clamp.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec3;
use tideline_config::PlayerConfig;
use tideline_input::HeldControls;
use tideline_terrain::Terrain;

use crate::action::{ActionChange, PlayerAction};
use crate::camera::CameraMode;

/// Heading offset from the camera azimuth for the held direction keys.
///
/// Forward combinations win over backward, which win over pure strafes.
/// Returns `None` when no direction key is held.
pub fn heading_offset(held: &HeldControls) -> Option<f32> {
    if !held.any_direction() {
        return None;
    }
    let offset = if held.forward {
        if held.strafe_left {
            FRAC_PI_4
        } else if held.strafe_right {
            -FRAC_PI_4
        } else {
            0.0
        }
    } else if held.backward {
        if held.strafe_left {
            PI * 0.75
        } else if held.strafe_right {
            -PI * 0.75
        } else {
            PI
        }
    } else if held.strafe_left {
        FRAC_PI_2
    } else {
        -FRAC_PI_2
    };
    Some(offset)
}

/// The avatar's kinematic state.
#[derive(Clone, Debug)]
pub struct Player {
    /// World position. `y` is owned by the ground clamp.
    pub position: Vec3,
    /// Heading in radians about `+Y`.
    pub rotation: f32,
    /// Current planar speed in units per second.
    pub speed: f32,
    /// Displacement over the last full tick, including the ground clamp.
    pub position_delta: Vec3,
    /// Length of `position_delta`.
    pub real_speed: f32,
    action: PlayerAction,
    previous_action: PlayerAction,
    previous_position: Vec3,
    config: PlayerConfig,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            speed: 0.0,
            position_delta: Vec3::ZERO,
            real_speed: 0.0,
            action: PlayerAction::Idle,
            previous_action: PlayerAction::Idle,
            previous_position: Vec3::ZERO,
            config,
        }
    }

    /// Place the avatar, resetting the motion history.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self.previous_position = position;
        self
    }

    pub fn action(&self) -> PlayerAction {
        self.action
    }

    /// Action held at the end of the previous tick.
    pub fn previous_action(&self) -> PlayerAction {
        self.previous_action
    }

    /// Move the avatar for one tick.
    ///
    /// `camera_theta` is the orbit camera's azimuth. In fly mode the avatar
    /// stands still. Returns the transition when the action label changed.
    pub fn update_locomotion(
        &mut self,
        held: &HeldControls,
        dt: f32,
        mode: CameraMode,
        camera_theta: f32,
    ) -> Option<ActionChange> {
        self.previous_action = self.action;

        let offset = match mode {
            CameraMode::ThirdPerson => heading_offset(held),
            CameraMode::Fly => None,
        };

        match offset {
            Some(offset) => {
                self.rotation = camera_theta + offset;

                let target = if held.boost {
                    self.config.run_speed
                } else {
                    self.config.walk_speed
                };
                if (target - self.speed).abs() > self.config.speed_snap {
                    self.speed += (target - self.speed) * self.config.speed_ease;
                } else {
                    self.speed = target;
                }

                let step = dt * self.speed;
                self.position.x -= self.rotation.sin() * step;
                self.position.z -= self.rotation.cos() * step;

                self.action = if held.boost {
                    PlayerAction::Running
                } else {
                    PlayerAction::Walking
                };
            }
            None => {
                self.action = PlayerAction::Idle;
                self.speed = 0.0;
            }
        }

        (self.action != self.previous_action).then_some(ActionChange {
            before: self.previous_action,
            current: self.action,
        })
    }

    /// Stand the avatar on the ground at its `(x, z)`.
    ///
    /// Ground at or below the water floor, or missing ground, leaves the
    /// avatar at the water floor. Elevation `0.0` is real ground.
    pub fn clamp_to_ground<T: Terrain + ?Sized>(&mut self, terrain: &T) {
        let floor = self.config.water_floor;
        self.position.y = match terrain.elevation(self.position.x, self.position.z) {
            Some(elevation) if elevation > floor => elevation,
            _ => floor,
        };
    }

    /// Close the tick: record the displacement since the previous call.
    pub fn record_motion(&mut self) {
        self.position_delta = self.position - self.previous_position;
        self.previous_position = self.position;
        self.real_speed = self.position_delta.length();
    }
}
