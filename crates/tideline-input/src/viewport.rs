//! Viewport extents used to normalize pointer motion.

use glam::Vec2;

/// Viewport extents used to turn device-pixel pointer motion into
/// resolution-independent look deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Divide a pixel delta by the viewport extents, per axis. A drag across
    /// the full width yields 1.0; the mapping is linear and symmetric about zero.
    pub fn normalise(&self, delta: Vec2) -> Vec2 {
        delta / Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
