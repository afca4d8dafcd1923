//! Colors of the game's props.
//!
//! All values are [`Color`]s (RGBA, components in [0.0, 1.0]) so they can be
//! handed straight to kiss3d's `set_color` and `draw_text`.
//!
//! # Example
//! ```
//! # use wildlands::color;
//! let grass = color::from_hex(0x3cb043);
//! assert_eq!(grass, color::GRASS);
//! ```

pub use kiss3d::color::Color;

/// Converts a `0xRRGGBB` literal into an opaque [`Color`].
pub const fn from_hex(rgb: u32) -> Color {
    Color::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    )
}

// ============================================================================
// Environment
// ============================================================================

/// Daytime sky (0x87ceeb).
pub const SKY: Color = from_hex(0x87ceeb);
/// Ground plane (0x3cb043).
pub const GRASS: Color = from_hex(0x3cb043);
/// Tree trunks (0x8b4513).
pub const BARK: Color = from_hex(0x8b4513);
/// Tree leaves (0x006400).
pub const LEAVES: Color = from_hex(0x006400);
/// Mountains (0x777777).
pub const ROCK: Color = from_hex(0x777777);

// ============================================================================
// Actors
// ============================================================================

/// The player (0x0000ff).
pub const PLAYER: Color = from_hex(0x0000ff);
/// The car (0xff0000).
pub const CAR: Color = from_hex(0xff0000);
/// Enemies (0xff00ff).
pub const ENEMY: Color = from_hex(0xff00ff);
/// Bullets (0xffd700).
pub const BULLET: Color = from_hex(0xffd700);

// ============================================================================
// HUD
// ============================================================================

/// Regular HUD text.
pub const HUD_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// HUD text when health is low or the game is over.
pub const HUD_ALERT: Color = Color::new(1.0, 0.2, 0.2, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        let c = from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1.0e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn palette_uses_the_demo_colors() {
        assert_eq!(PLAYER, Color::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(ENEMY, Color::new(1.0, 0.0, 1.0, 1.0));
    }
}
