//! Day/night cycle.
//!
//! Brightness follows a sine of the elapsed phase. It drives both the sun's
//! intensity and the lightness of the sky color.

use crate::color::Color;

/// Hue of the sky, in turns.
const SKY_HUE: f32 = 0.6;
/// Saturation of the sky.
const SKY_SATURATION: f32 = 0.5;

/// The clock of the day/night cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayNightCycle {
    time: f32,
    speed: f32,
}

impl DayNightCycle {
    /// Creates a cycle starting at phase zero (half brightness, getting brighter).
    pub fn new(speed: f32) -> Self {
        Self { time: 0.0, speed }
    }

    /// Advances the cycle by one frame.
    #[inline]
    pub fn step(&mut self) {
        self.time += self.speed;
    }

    /// The current phase, in radians.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Brightness in `[0, 1]`: 1 at noon, 0 at midnight.
    #[inline]
    pub fn intensity(&self) -> f32 {
        self.time.sin() * 0.5 + 0.5
    }

    /// The background color for the current brightness.
    pub fn sky_color(&self) -> Color {
        hsl_to_rgb(SKY_HUE, SKY_SATURATION, self.intensity())
    }
}

/// Converts an HSL color to RGB.
///
/// `h` is in turns (`0.0..1.0`, wrapped), `s` and `l` are clamped to `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color::new(l, l, l, 1.0);
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
        1.0,
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-4
    }

    #[test]
    fn starts_at_half_brightness() {
        let cycle = DayNightCycle::new(0.002);
        assert!(approx(cycle.intensity(), 0.5));
    }

    #[test]
    fn step_advances_by_speed() {
        let mut cycle = DayNightCycle::new(0.25);
        cycle.step();
        cycle.step();
        assert!(approx(cycle.time(), 0.5));
    }

    #[test]
    fn noon_and_midnight() {
        let mut cycle = DayNightCycle::new(PI / 2.0);
        cycle.step();
        assert!(approx(cycle.intensity(), 1.0));
        cycle.step();
        cycle.step();
        assert!(approx(cycle.intensity(), 0.0));
        let sky = cycle.sky_color();
        assert!(approx(sky.r, 0.0) && approx(sky.g, 0.0) && approx(sky.b, 0.0));
    }

    #[test]
    fn intensity_stays_in_unit_range() {
        let mut cycle = DayNightCycle::new(0.37);
        for _ in 0..1000 {
            cycle.step();
            let i = cycle.intensity();
            assert!((0.0..=1.0).contains(&i));
        }
    }

    #[test]
    fn hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!(approx(red.r, 1.0) && approx(red.g, 0.0) && approx(red.b, 0.0));

        let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!(approx(green.r, 0.0) && approx(green.g, 1.0) && approx(green.b, 0.0));

        let white = hsl_to_rgb(0.6, 0.5, 1.0);
        assert!(approx(white.r, 1.0) && approx(white.g, 1.0) && approx(white.b, 1.0));
    }

    #[test]
    fn sky_is_blueish_at_half_brightness() {
        let sky = DayNightCycle::new(0.0).sky_color();
        // h = 0.6, s = 0.5, l = 0.5 -> (0.25, 0.45, 0.75)
        assert!(approx(sky.r, 0.25));
        assert!(approx(sky.g, 0.45));
        assert!(approx(sky.b, 0.75));
    }
}
