//! One-tick orchestration of locomotion, cameras, clamps and water.

use tideline_config::Config;
use tideline_input::InputSnapshot;
use tideline_terrain::Terrain;

use crate::action::{ActionChange, ActionEvents, SubscriptionId};
use crate::camera::{CameraController, CameraMode};
use crate::facing::ModelFacing;
use crate::locomotion::Player;
use crate::water::WaterTracker;

/// Avatar, cameras and water tracker advanced together.
///
/// Each component owns its state; [`step`](Self::step) hands every one of
/// them only what it reads, in the order: camera toggle, locomotion,
/// camera update, avatar ground clamp, motion record, water, facing.
#[derive(Debug)]
pub struct Simulation {
    pub player: Player,
    pub camera: CameraController,
    pub water: WaterTracker,
    pub facing: ModelFacing,
    events: ActionEvents,
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        let mode = if config.debug.fly_camera {
            CameraMode::Fly
        } else {
            CameraMode::ThirdPerson
        };
        Self {
            player: Player::new(config.player.clone()),
            camera: CameraController::with_mode(config.orbit.clone(), config.fly.clone(), mode),
            water: WaterTracker::new(config.water.clone()),
            facing: ModelFacing::default(),
            events: ActionEvents::new(),
            ticks: 0,
        }
    }

    /// Register an action-change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&ActionChange) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of completed steps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance everything by one tick of `dt` seconds.
    pub fn step<T: Terrain + ?Sized>(&mut self, input: &InputSnapshot, dt: f32, terrain: &T) {
        if input.toggle_camera_mode {
            self.camera.toggle();
        }

        let mode = self.camera.mode();
        let theta = self.camera.orbit().theta;
        if let Some(change) = self.player.update_locomotion(&input.held, dt, mode, theta) {
            self.events.emit(&change);
        }

        self.camera.update(input, dt, self.player.position, terrain);

        self.player.clamp_to_ground(terrain);
        self.player.record_motion();

        self.water.update(self.player.position, self.player.position_delta);
        self.facing.update(self.player.rotation);

        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            position = ?self.player.position,
            heading = self.player.rotation,
            action = %self.player.action(),
            "avatar"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tideline_input::HeldControls;
    use tideline_terrain::FlatTerrain;

    #[test]
    fn test_config_selects_start_mode() {
        let mut config = Config::default();
        assert_eq!(Simulation::new(&config).camera.mode(), CameraMode::ThirdPerson);
        config.debug.fly_camera = true;
        assert_eq!(Simulation::new(&config).camera.mode(), CameraMode::Fly);
    }

    #[test]
    fn test_step_counts_ticks_and_clamps() {
        let mut sim = Simulation::default();
        sim.step(&InputSnapshot::default(), 0.016, &FlatTerrain::new(1.5));
        assert_eq!(sim.ticks(), 1);
        assert_eq!(sim.player.position.y, 1.5);
    }

    #[test]
    fn test_toggle_is_applied_before_locomotion() {
        let mut sim = Simulation::default();
        let input = InputSnapshot {
            held: HeldControls {
                forward: true,
                ..Default::default()
            },
            toggle_camera_mode: true,
            ..Default::default()
        };
        sim.step(&input, 0.016, &FlatTerrain::default());
        assert_eq!(sim.camera.mode(), CameraMode::Fly);
        assert_eq!(sim.player.position.x, 0.0);
        assert_eq!(sim.player.position.z, 0.0);
    }
}
