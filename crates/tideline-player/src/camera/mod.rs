//! Camera controllers: third-person orbit, free fly, and the mode switch
//! between them.

mod controller;
mod fly;
mod orbit;

pub use controller::CameraController;
pub use fly::{FlyBasis, FlyCamera, look_angles};
pub use orbit::OrbitCamera;

use glam::{Mat3, Quat, Vec3};

/// World up axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Unrotated forward axis. Rotated by a pose built with [`target_to`] it
/// points from the look-at target back to the eye.
pub const FORWARD_REF: Vec3 = Vec3::Z;

/// Which sub-camera drives the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    ThirdPerson,
    Fly,
}

impl CameraMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::ThirdPerson => CameraMode::Fly,
            CameraMode::Fly => CameraMode::ThirdPerson,
        }
    }
}

/// Camera position and orientation as read by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Unit quaternion.
    pub orientation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// [`FORWARD_REF`] rotated by the orientation.
    pub fn forward(&self) -> Vec3 {
        self.orientation * FORWARD_REF
    }
}

/// Orientation whose `+Z` axis points from `target` to `eye`, with `+X`
/// kept horizontal relative to `up` (no roll).
///
/// Returns `None` when `eye == target` or the view direction is parallel
/// to `up`.
pub fn target_to(eye: Vec3, target: Vec3, up: Vec3) -> Option<Quat> {
    let z = (eye - target).try_normalize()?;
    let x = up.cross(z).try_normalize()?;
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}
