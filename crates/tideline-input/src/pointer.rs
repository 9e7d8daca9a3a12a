//! Pointer motion accumulator.

use glam::Vec2;

/// Accumulates raw pointer motion between ticks.
///
/// When the cursor is captured the platform only reports relative motion
/// (`on_raw_motion`); otherwise deltas come from successive cursor positions.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Option<Vec2>,
    delta: Vec2,
    captured: bool,
}

impl PointerState {
    /// Creates a pointer with no recorded motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event. The first sample only sets the origin.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        if !self.captured
            && let Some(prev) = self.position
        {
            self.delta += new_pos - prev;
        }
        self.position = Some(new_pos);
    }

    /// Process a `DeviceEvent::MouseMotion` raw delta (used when captured).
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// Switch between captured (raw motion) and free (cursor position) modes.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Whether raw motion is currently the delta source.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Motion in device pixels since the last clear.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Reset the accumulated delta. Call once per tick after capture.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cursor_sample_has_no_delta() {
        let mut p = PointerState::new();
        p.on_cursor_moved(300.0, 200.0);
        assert_eq!(p.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_cursor_deltas_accumulate() {
        let mut p = PointerState::new();
        p.on_cursor_moved(100.0, 100.0);
        p.on_cursor_moved(110.0, 95.0);
        p.on_cursor_moved(115.0, 90.0);
        assert_eq!(p.delta(), Vec2::new(15.0, -10.0));
    }

    #[test]
    fn test_raw_motion_only_when_captured() {
        let mut p = PointerState::new();
        p.on_raw_motion(5.0, 5.0);
        assert_eq!(p.delta(), Vec2::ZERO);

        p.set_captured(true);
        p.on_raw_motion(5.0, -2.0);
        p.on_cursor_moved(900.0, 900.0);
        assert_eq!(p.delta(), Vec2::new(5.0, -2.0));
    }

    #[test]
    fn test_clear_resets_delta() {
        let mut p = PointerState::new();
        p.set_captured(true);
        p.on_raw_motion(3.0, 4.0);
        p.clear_transients();
        assert_eq!(p.delta(), Vec2::ZERO);
    }
}
