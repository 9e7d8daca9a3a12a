//! Free-fly camera: pointer look with yaw/pitch integration and key-driven
//! translation along the camera's own basis.

use glam::{Quat, Vec3};
use tideline_config::FlyConfig;
use tideline_input::InputSnapshot;

use super::{CameraPose, FORWARD_REF, WORLD_UP};

/// The six unit movement directions of a fly camera orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyBasis {
    pub forward: Vec3,
    pub backward: Vec3,
    pub rightward: Vec3,
    pub leftward: Vec3,
    pub upward: Vec3,
    pub downward: Vec3,
}

impl FlyBasis {
    /// Basis for `orientation`: forward is [`FORWARD_REF`] rotated, right is
    /// `up x forward`, and up is `forward x right`.
    pub fn from_orientation(orientation: Quat) -> Self {
        let forward = orientation * FORWARD_REF;
        let rightward = WORLD_UP.cross(forward).normalize_or_zero();
        let upward = forward.cross(rightward);
        Self {
            forward,
            backward: -forward,
            rightward,
            leftward: -rightward,
            upward,
            downward: -upward,
        }
    }
}

/// Yaw/pitch that reproduce the look direction of `orientation`.
///
/// Yaw is the unsigned angle between [`FORWARD_REF`] and the horizontal
/// projection of the rotated forward, negated when that forward points
/// toward `-X`. Pitch is the angle between the rotated forward and its
/// projection, negated when it points up. Roll is lost. Returns `None`
/// when the forward is (nearly) vertical and yaw is undefined.
pub fn look_angles(orientation: Quat) -> Option<(f32, f32)> {
    let rotated = orientation * FORWARD_REF;
    let horizontal = Vec3::new(rotated.x, 0.0, rotated.z);
    if horizontal.length_squared() < 1e-10 {
        return None;
    }

    let mut yaw = unsigned_angle(FORWARD_REF, horizontal);
    if rotated.dot(Vec3::X) < 0.0 {
        yaw = -yaw;
    }
    let mut pitch = unsigned_angle(rotated, horizontal);
    if rotated.dot(Vec3::Y) > 0.0 {
        pitch = -pitch;
    }
    Some((yaw, pitch))
}

/// Angle between two vectors in `[0, PI]`. Stays exact near zero, where
/// `acos` of the cosine does not.
fn unsigned_angle(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Avatar-independent camera.
///
/// Positive pitch looks down. The orientation is always
/// `Ry(yaw) * Rx(pitch)`, so fly mode never introduces roll.
#[derive(Clone, Debug)]
pub struct FlyCamera {
    active: bool,
    /// Pitch accumulator in radians, within `[-pitch_limit, pitch_limit]`.
    pub pitch: f32,
    /// Yaw accumulator in radians.
    pub yaw: f32,
    pose: CameraPose,
    basis: FlyBasis,
    config: FlyConfig,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(FlyConfig::default())
    }
}

impl FlyCamera {
    pub fn new(config: FlyConfig) -> Self {
        let orientation = orientation_from(config.start_yaw, config.start_pitch);
        Self {
            active: false,
            pitch: config.start_pitch,
            yaw: config.start_yaw,
            pose: CameraPose {
                position: Vec3::from_array(config.start_position),
                orientation,
            },
            basis: FlyBasis::from_orientation(orientation),
            config,
        }
    }

    /// Activate, optionally continuing from another camera's pose.
    ///
    /// Without a seed the camera resumes from its retained angles and
    /// position. With a seed the position is copied and yaw/pitch are
    /// re-derived so the view does not jump; a seed looking straight up or
    /// down keeps the previous angles.
    pub fn activate(&mut self, seed: Option<CameraPose>) {
        self.active = true;
        let Some(seed) = seed else {
            return;
        };

        self.pose.position = seed.position;
        match look_angles(seed.orientation) {
            Some((yaw, pitch)) => {
                self.yaw = yaw;
                self.pitch = pitch;
            }
            None => {
                tracing::warn!(
                    orientation = ?seed.orientation,
                    "fly camera seed has no horizontal heading, keeping previous angles"
                );
            }
        }
        // Leave the pose coherent with the angles until the first update.
        self.pose.orientation = orientation_from(self.yaw, self.pitch);
        self.basis = FlyBasis::from_orientation(self.pose.orientation);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn basis(&self) -> &FlyBasis {
        &self.basis
    }

    /// Advance one tick. Does nothing while inactive.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        if !self.active {
            return;
        }

        self.pitch -= input.pointer.y;
        self.yaw -= input.pointer.x;
        self.pitch = self
            .pitch
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);

        self.pose.orientation = orientation_from(self.yaw, self.pitch);
        self.basis = FlyBasis::from_orientation(self.pose.orientation);

        // Held "forward" travels along the back vector: the camera's +Z
        // faces away from what it looks at.
        let held = &input.held;
        let b = &self.basis;
        let mut direction = Vec3::ZERO;
        if held.forward {
            direction += b.backward;
        }
        if held.backward {
            direction += b.forward;
        }
        if held.strafe_right {
            direction += b.rightward;
        }
        if held.strafe_left {
            direction += b.leftward;
        }
        if held.jump {
            direction += b.upward;
        }
        if held.crouch {
            direction += b.downward;
        }

        let speed = if held.boost {
            self.config.boost_speed
        } else {
            self.config.speed
        };
        self.pose.position += direction.normalize_or_zero() * speed * dt;
    }
}

/// Yaw about world up first, then pitch about the yawed X axis.
fn orientation_from(yaw: f32, pitch: f32) -> Quat {
    (Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI};
    use tideline_input::HeldControls;

    fn active_camera() -> FlyCamera {
        let mut cam = FlyCamera::default();
        cam.activate(None);
        cam
    }

    fn holding(held: HeldControls) -> InputSnapshot {
        InputSnapshot::holding(held)
    }

    #[test]
    fn test_starts_at_configured_pose() {
        let cam = FlyCamera::default();
        assert_eq!(cam.pose().position, Vec3::new(40.0, 10.0, 40.0));
        assert!((cam.pitch + PI * 0.15).abs() < 1e-6);
        assert!((cam.yaw - PI * 0.25).abs() < 1e-6);
        assert!(!cam.is_active());
    }

    #[test]
    fn test_unseeded_activation_keeps_state() {
        let mut cam = FlyCamera::default();
        let before = cam.pose();
        cam.activate(None);
        assert_eq!(cam.pose(), before);
        assert!((cam.yaw - PI * 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_inactive_camera_ignores_input() {
        let mut cam = FlyCamera::default();
        let before = cam.pose();
        let input = InputSnapshot {
            pointer: Vec2::new(0.5, 0.5),
            held: HeldControls {
                forward: true,
                ..Default::default()
            },
            ..Default::default()
        };
        cam.update(&input, 1.0);
        assert_eq!(cam.pose(), before);
    }

    #[test]
    fn test_pointer_drag_is_inverted() {
        let mut cam = active_camera();
        let (yaw, pitch) = (cam.yaw, cam.pitch);
        cam.update(
            &InputSnapshot {
                pointer: Vec2::new(0.1, 0.05),
                ..Default::default()
            },
            0.016,
        );
        assert!((cam.yaw - (yaw - 0.1)).abs() < 1e-6);
        assert!((cam.pitch - (pitch - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = active_camera();
        for dy in [3.0, 3.0, -10.0, -10.0, 0.7] {
            cam.update(
                &InputSnapshot {
                    pointer: Vec2::new(0.0, dy),
                    ..Default::default()
                },
                0.016,
            );
            assert!(cam.pitch >= -FRAC_PI_2 && cam.pitch <= FRAC_PI_2);
        }
    }

    #[test]
    fn test_orientation_stays_unit() {
        let mut cam = active_camera();
        for i in 0..100 {
            let t = i as f32;
            cam.update(
                &InputSnapshot {
                    pointer: Vec2::new(t.sin() * 0.3, t.cos() * 0.2),
                    ..Default::default()
                },
                0.016,
            );
            assert!((cam.pose().orientation.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let basis = FlyBasis::from_orientation(orientation_from(0.8, -0.4));
        for v in [basis.forward, basis.rightward, basis.upward] {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
        assert!(basis.forward.dot(basis.rightward).abs() < 1e-5);
        assert!(basis.forward.dot(basis.upward).abs() < 1e-5);
        assert!(basis.rightward.y.abs() < 1e-6);
        assert_eq!(basis.backward, -basis.forward);
    }

    #[test]
    fn test_forward_key_moves_along_back_vector() {
        let mut cam = active_camera();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        let start = cam.pose().position;
        cam.update(
            &holding(HeldControls {
                forward: true,
                ..Default::default()
            }),
            0.5,
        );
        // Identity orientation: back is -Z, speed 10 for half a second.
        let moved = cam.pose().position - start;
        assert!(moved.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }

    #[test]
    fn test_boost_doubles_speed_and_diagonals_are_normalized() {
        let mut cam = active_camera();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        let start = cam.pose().position;
        cam.update(
            &holding(HeldControls {
                forward: true,
                strafe_right: true,
                boost: true,
                ..Default::default()
            }),
            1.0,
        );
        assert!(((cam.pose().position - start).length() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_opposite_keys_cancel_without_nan() {
        let mut cam = active_camera();
        let start = cam.pose().position;
        cam.update(
            &holding(HeldControls {
                forward: true,
                backward: true,
                jump: true,
                crouch: true,
                ..Default::default()
            }),
            1.0,
        );
        let position = cam.pose().position;
        assert!(position.is_finite());
        assert!(position.abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut cam = active_camera();
        let start = cam.pose().position;
        cam.update(&InputSnapshot::default(), 1.0);
        assert_eq!(cam.pose().position, start);
    }

    #[test]
    fn test_look_angles_recover_yaw_and_pitch() {
        for (yaw, pitch) in [(0.0, 0.0), (0.7, 0.3), (-2.5, -0.9), (3.0, 1.2)] {
            let (y, p) = look_angles(orientation_from(yaw, pitch)).unwrap();
            assert!((y - yaw).abs() < 1e-3, "yaw {yaw} -> {y}");
            assert!((p - pitch).abs() < 1e-3, "pitch {pitch} -> {p}");
        }
    }

    #[test]
    fn test_look_angles_exact_near_zero() {
        for i in -20..=20 {
            let small = i as f32 * 5e-5;
            for (yaw, pitch) in [(small, 0.3), (0.5, small), (small, small)] {
                let expected = orientation_from(yaw, pitch) * FORWARD_REF;
                let (y, p) = look_angles(orientation_from(yaw, pitch)).unwrap();
                let recovered = orientation_from(y, p) * FORWARD_REF;
                assert!(
                    recovered.abs_diff_eq(expected, 1e-5),
                    "yaw {yaw} pitch {pitch} -> {y} {p}"
                );
            }
        }
    }

    #[test]
    fn test_seeded_activation_reproduces_look_direction() {
        let seed = CameraPose {
            position: Vec3::new(1.0, 2.0, 3.0),
            orientation: orientation_from(-1.1, 0.45),
        };
        let mut cam = FlyCamera::default();
        cam.activate(Some(seed));
        assert_eq!(cam.pose().position, seed.position);
        assert!(cam.pose().forward().abs_diff_eq(seed.forward(), 1e-4));
    }

    #[test]
    fn test_vertical_seed_keeps_previous_angles() {
        let mut cam = FlyCamera::default();
        let (yaw, pitch) = (cam.yaw, cam.pitch);
        let seed = CameraPose {
            position: Vec3::new(0.0, 50.0, 0.0),
            orientation: Quat::from_rotation_x(-FRAC_PI_2),
        };
        cam.activate(Some(seed));
        assert_eq!(cam.yaw, yaw);
        assert_eq!(cam.pitch, pitch);
        assert_eq!(cam.pose().position, seed.position);
        assert!((cam.pose().orientation.length() - 1.0).abs() < 1e-5);
    }
}
