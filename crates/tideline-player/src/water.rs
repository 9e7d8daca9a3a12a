//! Water surface tracking: keeps the water plane under the avatar and
//! scrolls the ripple texture with its motion.

use glam::{Vec2, Vec3};
use tideline_config::WaterConfig;

#[derive(Clone, Debug)]
pub struct WaterTracker {
    /// Ripple texture UV offset for this tick.
    pub offset_uv: Vec2,
    /// Water plane origin: the avatar's `(x, z)` at sea level.
    pub position: Vec3,
    wave_scale: f32,
    config: WaterConfig,
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(WaterConfig::default())
    }
}

impl WaterTracker {
    pub fn new(config: WaterConfig) -> Self {
        Self {
            offset_uv: Vec2::ZERO,
            position: Vec3::ZERO,
            wave_scale: (config.wave_size / config.water_size).powi(2),
            config,
        }
    }

    /// Fraction of the water plane covered by one wave tile, squared.
    pub fn wave_scale(&self) -> f32 {
        self.wave_scale
    }

    pub fn update(&mut self, avatar: Vec3, avatar_delta: Vec3) {
        let divisor = self.config.ripple_divisor;
        self.offset_uv = Vec2::new(avatar_delta.x / divisor, -avatar_delta.z / divisor);
        self.position = Vec3::new(avatar.x, 0.0, avatar.z);
    }
}
