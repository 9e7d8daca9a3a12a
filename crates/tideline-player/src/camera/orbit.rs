//! Third-person orbit camera: spherical follow around the avatar with eased
//! radius, smoothed angles, and a terrain floor.

use glam::Vec3;
use tideline_config::OrbitConfig;
use tideline_input::InputSnapshot;
use tideline_terrain::Terrain;

use super::{CameraPose, WORLD_UP, target_to};

/// Camera on a sphere around a look-at point anchored to the avatar.
///
/// `phi` is the polar angle measured from `+Y`, `theta` the azimuth
/// (`theta = 0` puts the camera on the avatar's `+Z` side). Pointer input
/// accumulates into `target_phi`/`target_theta` and the current angles
/// chase them by a fixed per-tick factor. Angles survive
/// activate/deactivate cycles.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    active: bool,
    /// Current polar angle in radians, within `[phi_min, phi_max]`.
    pub phi: f32,
    /// Current azimuth in radians. Unbounded.
    pub theta: f32,
    /// Unsmoothed polar angle input.
    pub target_phi: f32,
    /// Unsmoothed azimuth input.
    pub target_theta: f32,
    /// Orbit radius.
    pub distance: f32,
    pose: CameraPose,
    config: OrbitConfig,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            active: false,
            phi: config.initial_phi,
            theta: config.initial_theta,
            target_phi: config.initial_phi,
            target_theta: config.initial_theta,
            distance: config.initial_distance,
            pose: CameraPose::default(),
            config,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pose computed by the last active update.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Advance one tick. Does nothing while inactive.
    ///
    /// The blend factors are per tick, so the feel depends on the tick rate.
    pub fn update<T: Terrain + ?Sized>(
        &mut self,
        input: &InputSnapshot,
        avatar: Vec3,
        terrain: &T,
    ) {
        if !self.active {
            return;
        }
        let cfg = &self.config;

        self.target_phi -= input.pointer.y;
        self.target_theta -= input.pointer.x;

        if self.distance > cfg.rest_distance + cfg.distance_snap {
            self.distance += (cfg.rest_distance - self.distance) * cfg.distance_ease;
        } else {
            self.distance = cfg.rest_distance;
        }

        self.phi += (self.target_phi - self.phi) * cfg.smooth_factor;
        self.theta += (self.target_theta - self.theta) * cfg.smooth_factor;

        // Pin the target too so dragging past a limit leaves no slack to unwind.
        if self.phi < cfg.phi_min {
            self.phi = cfg.phi_min;
            self.target_phi = cfg.phi_min;
        }
        if self.phi > cfg.phi_max {
            self.phi = cfg.phi_max;
            self.target_phi = cfg.phi_max;
        }

        let ring = self.phi.sin() * self.distance;
        let offset = Vec3::new(
            ring * self.theta.sin(),
            self.phi.cos() * self.distance,
            ring * self.theta.cos(),
        );
        let mut position = avatar + offset;
        let target = avatar + Vec3::new(0.0, cfg.above_offset, 0.0);

        if let Some(orientation) = target_to(position, target, WORLD_UP) {
            self.pose.orientation = orientation;
        }

        // Floor applied after the orientation; the look direction is not
        // recomputed for the raised eye.
        let elevation = terrain
            .elevation(position.x, position.z)
            .unwrap_or(cfg.ground_floor)
            .max(cfg.ground_floor);
        let floor = elevation + cfg.ground_offset;
        if position.y < floor {
            position.y = floor;
        }
        self.pose.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::PI;
    use tideline_terrain::{FlatTerrain, NoTerrain};

    fn active_camera() -> OrbitCamera {
        let mut cam = OrbitCamera::default();
        cam.activate();
        cam
    }

    fn drag(x: f32, y: f32) -> InputSnapshot {
        InputSnapshot {
            pointer: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_inactive_camera_does_not_advance() {
        let mut cam = OrbitCamera::default();
        cam.update(&drag(0.3, 0.3), Vec3::ZERO, &FlatTerrain::default());
        assert_eq!(cam.distance, 10.0);
        assert_eq!(cam.target_theta, 0.0);
        assert_eq!(cam.pose(), CameraPose::default());
    }

    #[test]
    fn test_first_tick_matches_spherical_formula() {
        let mut cam = active_camera();
        cam.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::default());

        assert!((cam.distance - 9.7).abs() < 1e-5);
        let phi = PI * 0.4;
        let expected = Vec3::new(0.0, phi.cos() * 9.7, phi.sin() * 9.7);
        assert!(cam.pose().position.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_distance_eases_then_snaps_to_rest() {
        let mut cam = active_camera();
        let mut previous = cam.distance;
        for _ in 0..400 {
            cam.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::default());
            assert!(cam.distance <= previous);
            previous = cam.distance;
        }
        assert_eq!(cam.distance, 4.0);
    }

    #[test]
    fn test_angles_smooth_toward_targets() {
        let mut cam = active_camera();
        cam.update(&drag(-1.0, 0.0), Vec3::ZERO, &FlatTerrain::default());
        assert!((cam.target_theta - 1.0).abs() < 1e-6);
        assert!((cam.theta - 0.2).abs() < 1e-6);
        cam.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::default());
        assert!((cam.theta - 0.36).abs() < 1e-6);
    }

    #[test]
    fn test_phi_stays_in_bounds_and_target_is_pinned() {
        let mut cam = active_camera();
        for _ in 0..50 {
            cam.update(&drag(0.0, 2.0), Vec3::ZERO, &FlatTerrain::default());
            assert!(cam.phi >= 0.1 && cam.phi <= PI - 0.1);
        }
        assert_eq!(cam.phi, 0.1);
        assert_eq!(cam.target_phi, 0.1);

        // Dragging back moves immediately, with no accumulated slack.
        cam.update(&drag(0.0, -0.5), Vec3::ZERO, &FlatTerrain::default());
        assert!(cam.phi > 0.1);

        for _ in 0..50 {
            cam.update(&drag(0.0, -2.0), Vec3::ZERO, &FlatTerrain::default());
            assert!(cam.phi >= 0.1 && cam.phi <= PI - 0.1);
        }
        assert!((cam.target_phi - (PI - 0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_theta_is_unbounded() {
        let mut cam = active_camera();
        for _ in 0..100 {
            cam.update(&drag(-1.0, 0.0), Vec3::ZERO, &FlatTerrain::default());
        }
        assert!(cam.theta > 2.0 * PI);
    }

    #[test]
    fn test_orientation_looks_at_point_above_avatar() {
        let mut cam = active_camera();
        let avatar = Vec3::new(5.0, 1.0, -3.0);
        cam.update(&drag(0.4, 0.1), avatar, &FlatTerrain::new(-50.0));
        let pose = cam.pose();
        let target = avatar + Vec3::new(0.0, 2.0, 0.0);
        let back = (pose.position - target).normalize();
        assert!(pose.forward().abs_diff_eq(back, 1e-4));
        assert!((pose.orientation.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_ground_clamp_raises_camera() {
        let mut cam = active_camera();
        // Look from below the avatar so the orbit dips under the ground.
        cam.phi = PI - 0.1;
        cam.target_phi = PI - 0.1;
        cam.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::new(3.0));
        assert!((cam.pose().position.y - 4.25).abs() < 1e-6);
    }

    #[test]
    fn test_ground_clamp_ignores_terrain_below_floor() {
        let mut cam = active_camera();
        cam.phi = PI - 0.1;
        cam.target_phi = PI - 0.1;
        cam.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::new(-20.0));
        assert!((cam.pose().position.y - 1.25).abs() < 1e-6);

        let mut cam = active_camera();
        cam.phi = PI - 0.1;
        cam.target_phi = PI - 0.1;
        cam.update(&InputSnapshot::default(), Vec3::ZERO, &NoTerrain);
        assert!((cam.pose().position.y - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_does_not_touch_orientation() {
        let mut high = active_camera();
        let mut low = active_camera();
        high.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::new(-5.0));
        low.update(&InputSnapshot::default(), Vec3::ZERO, &FlatTerrain::new(30.0));
        assert!(low.pose().position.y > high.pose().position.y);
        assert_eq!(low.pose().orientation, high.pose().orientation);
    }
}
