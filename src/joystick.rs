//! On-screen virtual joystick for touch devices.
//!
//! A touch that starts on the left half of the screen anchors the stick. While
//! that finger drags, the offset from the anchor divided by the stick radius is
//! the movement vector, clamped to the unit disc. There is no deadzone and no
//! acceleration curve.

use glamx::Vec2;

/// Drag distance, in pixels, that maps to full speed.
pub const DEFAULT_RADIUS: f32 = 60.0;

/// A touch-drag joystick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Joystick {
    radius: f32,
    touch: Option<u64>,
    anchor: Vec2,
    value: Vec2,
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl Joystick {
    /// Creates an idle joystick with the given drag radius, in pixels.
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(f32::EPSILON),
            touch: None,
            anchor: Vec2::ZERO,
            value: Vec2::ZERO,
        }
    }

    /// Whether `pos` lies in the joystick region (the left half of the screen).
    #[inline]
    pub fn in_region(pos: Vec2, screen: Vec2) -> bool {
        pos.x < screen.x / 2.0
    }

    /// Whether a finger currently drives the stick.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.touch.is_some()
    }

    /// Starts tracking touch `id` if the stick is free and `pos` is in its region.
    ///
    /// Returns `true` if the touch was captured.
    pub fn touch_start(&mut self, id: u64, pos: Vec2, screen: Vec2) -> bool {
        if self.touch.is_some() || !Self::in_region(pos, screen) {
            return false;
        }

        self.touch = Some(id);
        self.anchor = pos;
        self.value = Vec2::ZERO;
        true
    }

    /// Updates the stick if `id` is the tracked touch.
    pub fn touch_move(&mut self, id: u64, pos: Vec2) -> bool {
        if self.touch != Some(id) {
            return false;
        }

        self.value = ((pos - self.anchor) / self.radius).clamp_length_max(1.0);
        true
    }

    /// Releases the stick if `id` is the tracked touch.
    pub fn touch_end(&mut self, id: u64) -> bool {
        if self.touch != Some(id) {
            return false;
        }

        self.touch = None;
        self.value = Vec2::ZERO;
        true
    }

    /// The current stick deflection, length at most 1.
    ///
    /// Screen coordinates grow downwards, so dragging down yields a positive
    /// `y`, which the world reads as moving towards the camera (+Z).
    #[inline]
    pub fn value(&self) -> Vec2 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn right_half_is_ignored() {
        let mut stick = Joystick::default();
        assert!(!stick.touch_start(1, Vec2::new(600.0, 300.0), SCREEN));
        assert!(!stick.is_active());
    }

    #[test]
    fn drag_maps_linearly() {
        let mut stick = Joystick::new(100.0);
        assert!(stick.touch_start(7, Vec2::new(100.0, 400.0), SCREEN));
        assert!(stick.touch_move(7, Vec2::new(150.0, 375.0)));
        assert_eq!(stick.value(), Vec2::new(0.5, -0.25));
    }

    #[test]
    fn drag_is_clamped_to_unit_length() {
        let mut stick = Joystick::new(10.0);
        stick.touch_start(1, Vec2::new(50.0, 50.0), SCREEN);
        stick.touch_move(1, Vec2::new(50.0, 250.0));
        assert!((stick.value().length() - 1.0).abs() < 1.0e-6);
        assert!(stick.value().y > 0.0);
    }

    #[test]
    fn other_fingers_do_not_steal_the_stick() {
        let mut stick = Joystick::new(10.0);
        stick.touch_start(1, Vec2::new(50.0, 50.0), SCREEN);
        assert!(!stick.touch_start(2, Vec2::new(60.0, 60.0), SCREEN));
        assert!(!stick.touch_move(2, Vec2::new(0.0, 0.0)));
        assert!(!stick.touch_end(2));
        assert!(stick.is_active());
    }

    #[test]
    fn release_resets() {
        let mut stick = Joystick::new(10.0);
        stick.touch_start(3, Vec2::new(50.0, 50.0), SCREEN);
        stick.touch_move(3, Vec2::new(55.0, 50.0));
        assert!(stick.touch_end(3));
        assert_eq!(stick.value(), Vec2::ZERO);
        assert!(!stick.is_active());
    }
}
