//! Avatar locomotion and camera kinematics.
//!
//! Each tick turns an [`InputSnapshot`](tideline_input::InputSnapshot) into
//! avatar displacement, heading and action label, and into a camera pose
//! produced by either the third-person [`OrbitCamera`] or the free
//! [`FlyCamera`]. [`Simulation::step`] runs the pieces in the required order.

pub mod action;
pub mod camera;
pub mod facing;
pub mod locomotion;
pub mod simulation;
pub mod water;

pub use action::{ActionChange, ActionEvents, PlayerAction, SubscriptionId};
pub use camera::{
    CameraController, CameraMode, CameraPose, FlyBasis, FlyCamera, OrbitCamera, look_angles,
    target_to,
};
pub use facing::ModelFacing;
pub use locomotion::{Player, heading_offset};
pub use simulation::Simulation;
pub use water::WaterTracker;
