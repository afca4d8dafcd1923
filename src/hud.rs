//! The heads-up display.
//!
//! The text is rebuilt from the world every frame and drawn on top of the
//! scene with kiss3d's text renderer.

use crate::color;
use crate::world::World;
use glamx::Vec2;
use kiss3d::text::Font;
use kiss3d::window::Window;
use std::sync::Arc;
use web_time::Instant;

/// Health below which the HUD turns red.
pub const LOW_HEALTH: f32 = 25.0;

const TEXT_SCALE: f32 = 40.0;
const MARGIN: Vec2 = Vec2::new(10.0, 10.0);

/// The HUD text for the current state.
pub fn status_line(world: &World) -> String {
    let player = &world.player;
    format!(
        "Health: {} | Coins: {} | Level: {} | Inventory: {}",
        player.health.ceil() as u32,
        player.coins,
        player.level,
        player.inventory
    )
}

/// The second HUD line: movement mode, or how to restart.
pub fn hint_line(world: &World) -> &'static str {
    if world.is_game_over() {
        "GAME OVER - press R or tap to play again"
    } else if world.player.in_vehicle {
        "Driving - E to get out"
    } else {
        "On foot - E near the car to drive"
    }
}

/// Draws the HUD and keeps a frame-rate estimate.
pub struct Hud {
    font: Arc<Font>,
    last_frame: Instant,
    fps: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            font: Font::default(),
            last_frame: Instant::now(),
            fps: 0.0,
        }
    }

    /// Draws the HUD for this frame.
    pub fn draw(&mut self, window: &mut Window, world: &World) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        if dt > 0.0 {
            self.fps = self.fps * 0.9 + (1.0 / dt) * 0.1;
        }

        let alert = world.is_game_over() || world.player.health < LOW_HEALTH;
        let main_color = if alert { color::HUD_ALERT } else { color::HUD_TEXT };

        window.draw_text(&status_line(world), MARGIN, TEXT_SCALE, &self.font, main_color);

        let hint_color = if world.is_game_over() {
            color::HUD_ALERT
        } else {
            color::HUD_TEXT
        };
        window.draw_text(
            hint_line(world),
            MARGIN + Vec2::new(0.0, TEXT_SCALE),
            TEXT_SCALE,
            &self.font,
            hint_color,
        );

        window.draw_text(
            &format!("{:.0} fps", self.fps),
            MARGIN + Vec2::new(0.0, 2.0 * TEXT_SCALE),
            TEXT_SCALE * 0.6,
            &self.font,
            color::HUD_TEXT,
        );
    }
}
