//! Camera mode switching and publication of the active pose.

use glam::{Quat, Vec3};
use tideline_config::{FlyConfig, OrbitConfig};
use tideline_input::InputSnapshot;
use tideline_terrain::Terrain;

use super::{CameraMode, CameraPose, FlyCamera, OrbitCamera};

/// Owns both sub-cameras and exposes the active one's pose.
///
/// Both cameras always exist so their state survives mode switches; only
/// the one matching [`mode`](Self::mode) is active and advances.
#[derive(Clone, Debug)]
pub struct CameraController {
    mode: CameraMode,
    orbit: OrbitCamera,
    fly: FlyCamera,
    pose: CameraPose,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(OrbitConfig::default(), FlyConfig::default())
    }
}

impl CameraController {
    /// Controller starting in third-person.
    pub fn new(orbit: OrbitConfig, fly: FlyConfig) -> Self {
        Self::with_mode(orbit, fly, CameraMode::ThirdPerson)
    }

    /// Controller starting in `mode`. A fly start resumes the fly camera's
    /// configured pose.
    pub fn with_mode(orbit: OrbitConfig, fly: FlyConfig, mode: CameraMode) -> Self {
        let mut controller = Self {
            mode,
            orbit: OrbitCamera::new(orbit),
            fly: FlyCamera::new(fly),
            pose: CameraPose::default(),
        };
        match mode {
            CameraMode::ThirdPerson => controller.orbit.activate(),
            CameraMode::Fly => {
                controller.fly.activate(None);
                controller.pose = controller.fly.pose();
            }
        }
        controller
    }

    /// Switch to the other camera. Call once per toggle press.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Select a mode directly (debug selector). Selecting the current mode
    /// does nothing.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode == self.mode {
            return;
        }
        match mode {
            CameraMode::Fly => {
                // Continue from the last published view.
                self.fly.activate(Some(self.pose));
                self.orbit.deactivate();
            }
            CameraMode::ThirdPerson => {
                self.fly.deactivate();
                self.orbit.activate();
            }
        }
        self.mode = mode;
        tracing::info!(?mode, "camera mode changed");
    }

    /// Advance the active camera and publish its pose.
    pub fn update<T: Terrain + ?Sized>(
        &mut self,
        input: &InputSnapshot,
        dt: f32,
        avatar: Vec3,
        terrain: &T,
    ) {
        match self.mode {
            CameraMode::ThirdPerson => {
                self.orbit.update(input, avatar, terrain);
                self.pose = self.orbit.pose();
            }
            CameraMode::Fly => {
                self.fly.update(input, dt);
                self.pose = self.fly.pose();
            }
        }
        tracing::trace!(
            position = ?self.pose.position,
            orientation = ?self.pose.orientation,
            "camera pose"
        );
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn orientation(&self) -> Quat {
        self.pose.orientation
    }

    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    pub fn fly(&self) -> &FlyCamera {
        &self.fly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use tideline_input::HeldControls;
    use tideline_terrain::FlatTerrain;

    const GROUND: FlatTerrain = FlatTerrain { height: 0.0 };

    #[test]
    fn test_starts_in_third_person() {
        let controller = CameraController::default();
        assert_eq!(controller.mode(), CameraMode::ThirdPerson);
        assert!(controller.orbit().is_active());
        assert!(!controller.fly().is_active());
    }

    #[test]
    fn test_exactly_one_camera_active_after_each_toggle() {
        let mut controller = CameraController::default();
        for _ in 0..5 {
            controller.toggle();
            assert_ne!(controller.orbit().is_active(), controller.fly().is_active());
            assert_eq!(
                controller.fly().is_active(),
                controller.mode() == CameraMode::Fly
            );
        }
    }

    #[test]
    fn test_update_publishes_active_pose() {
        let mut controller = CameraController::default();
        controller.update(&InputSnapshot::default(), 0.016, Vec3::ZERO, &GROUND);
        assert_eq!(controller.pose(), controller.orbit().pose());

        controller.toggle();
        controller.update(&InputSnapshot::default(), 0.016, Vec3::ZERO, &GROUND);
        assert_eq!(controller.pose(), controller.fly().pose());
    }

    #[test]
    fn test_fly_is_seeded_from_orbit_view() {
        let mut controller = CameraController::default();
        for _ in 0..3 {
            controller.update(&InputSnapshot::default(), 0.016, Vec3::ZERO, &GROUND);
        }
        let orbit_pose = controller.pose();

        controller.toggle();
        let fly_pose = controller.fly().pose();
        assert_eq!(fly_pose.position, orbit_pose.position);
        assert!(fly_pose.forward().abs_diff_eq(orbit_pose.forward(), 1e-4));
    }

    #[test]
    fn test_inactive_orbit_keeps_angles_while_flying() {
        let mut controller = CameraController::default();
        controller.update(&InputSnapshot::default(), 0.016, Vec3::ZERO, &GROUND);
        let (phi, theta) = (controller.orbit().phi, controller.orbit().theta);

        controller.toggle();
        let drag = InputSnapshot {
            pointer: Vec2::new(0.4, -0.2),
            held: HeldControls {
                forward: true,
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..10 {
            controller.update(&drag, 0.016, Vec3::ZERO, &GROUND);
        }
        controller.toggle();

        assert_eq!(controller.orbit().phi, phi);
        assert_eq!(controller.orbit().theta, theta);
    }

    #[test]
    fn test_set_mode_to_current_is_noop() {
        let mut controller = CameraController::default();
        controller.set_mode(CameraMode::ThirdPerson);
        assert_eq!(controller.mode(), CameraMode::ThirdPerson);
        assert!(controller.orbit().is_active());
        assert!(!controller.fly().is_active());
    }

    #[test]
    fn test_set_mode_matches_toggle() {
        let mut toggled = CameraController::default();
        let mut selected = CameraController::default();
        for c in [&mut toggled, &mut selected] {
            c.update(&InputSnapshot::default(), 0.016, Vec3::ZERO, &GROUND);
        }
        toggled.toggle();
        selected.set_mode(CameraMode::Fly);
        assert_eq!(toggled.fly().pose(), selected.fly().pose());
        assert_eq!(toggled.fly().yaw, selected.fly().yaw);
    }

    #[test]
    fn test_fly_start_publishes_fly_pose() {
        let controller = CameraController::with_mode(
            OrbitConfig::default(),
            FlyConfig::default(),
            CameraMode::Fly,
        );
        assert!(controller.fly().is_active());
        assert!(!controller.orbit().is_active());
        assert_eq!(controller.position(), Vec3::new(40.0, 10.0, 40.0));
    }
}
