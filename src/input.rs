//! Keyboard and touch input mapped to per-frame controls.
//!
//! # Bindings
//! - **W/A/S/D** or **arrow keys**: move (W is -Z, D is +X)
//! - **E**: enter or leave the car
//! - **Space**: shoot
//! - **F**: melee swing (also fells nearby trees)
//! - **H**: use a medkit
//! - **R**: restart after a game over
//! - **Touch, left half**: virtual joystick
//! - **Touch, right half**: shoot (or restart after a game over)

use crate::joystick::Joystick;
use glamx::Vec2;
use kiss3d::event::{Action, Key, TouchAction, WindowEvent};

/// What the player asked for during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Controls {
    /// Movement on the ground plane: `x` along world X, `y` along world Z.
    pub movement: Vec2,
    /// Enter or leave the car.
    pub toggle_vehicle: bool,
    /// Shoot.
    pub fire: bool,
    /// Melee swing.
    pub melee: bool,
    /// Consume a medkit.
    pub use_medkit: bool,
    /// Start a new game. Only honored once the current one is over.
    pub restart: bool,
}

impl Controls {
    /// Controls that only move.
    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

/// Accumulates window events between two frames.
#[derive(Clone, Debug)]
pub struct InputState {
    held: HeldKeys,
    joystick: Joystick,
    /// Framebuffer size, in physical pixels.
    screen: Vec2,
    /// Physical pixels per touch coordinate unit.
    touch_scale: f32,
    toggle_vehicle: bool,
    fire: bool,
    melee: bool,
    use_medkit: bool,
    restart: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held: HeldKeys::default(),
            joystick: Joystick::default(),
            screen: Vec2::ZERO,
            touch_scale: 1.0,
            toggle_vehicle: false,
            fire: false,
            melee: false,
            use_medkit: false,
            restart: false,
        }
    }
}

impl InputState {
    /// Creates an input state with no key held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the framebuffer size, in physical pixels, used to split the touch regions.
    pub fn set_screen_size(&mut self, size: Vec2) {
        self.screen = size;
    }

    /// Sets how many physical pixels one touch coordinate unit covers.
    ///
    /// Browsers report touches in CSS pixels, so on the web this is the
    /// device pixel ratio. Native touches are already in physical pixels.
    pub fn set_touch_scale(&mut self, scale: f32) {
        if scale > 0.0 {
            self.touch_scale = scale;
        }
    }

    /// The screen size in touch coordinates.
    fn touch_screen(&self) -> Vec2 {
        self.screen / self.touch_scale
    }

    /// The virtual joystick.
    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    /// Records one window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::Key(key, action, _) => self.handle_key(key, action),
            WindowEvent::Touch(id, x, y, action, _) => {
                self.handle_touch(id, Vec2::new(x as f32, y as f32), action)
            }
            WindowEvent::FramebufferSize(w, h) => {
                self.screen = Vec2::new(w as f32, h as f32);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: Key, action: Action) {
        let pressed = action == Action::Press;

        match key {
            Key::W | Key::Up => self.held.forward = pressed,
            Key::S | Key::Down => self.held.backward = pressed,
            Key::A | Key::Left => self.held.left = pressed,
            Key::D | Key::Right => self.held.right = pressed,
            Key::E if pressed => self.toggle_vehicle = true,
            Key::Space if pressed => self.fire = true,
            Key::F if pressed => self.melee = true,
            Key::H if pressed => self.use_medkit = true,
            Key::R if pressed => self.restart = true,
            _ => {}
        }
    }

    fn handle_touch(&mut self, id: u64, pos: Vec2, action: TouchAction) {
        match action {
            TouchAction::Start => {
                let screen = self.touch_screen();
                if Joystick::in_region(pos, screen) {
                    let _ = self.joystick.touch_start(id, pos, screen);
                } else {
                    self.fire = true;
                    self.restart = true;
                }
            }
            TouchAction::Move => {
                let _ = self.joystick.touch_move(id, pos);
            }
            TouchAction::End | TouchAction::Cancel => {
                let _ = self.joystick.touch_end(id);
            }
        }
    }

    /// Movement from the keyboard, per axis and not normalized.
    fn keyboard_movement(&self) -> Vec2 {
        let mut movement = Vec2::ZERO;

        if self.held.forward {
            movement.y -= 1.0;
        }
        if self.held.backward {
            movement.y += 1.0;
        }
        if self.held.left {
            movement.x -= 1.0;
        }
        if self.held.right {
            movement.x += 1.0;
        }

        movement
    }

    /// Returns this frame's controls and clears the one-shot actions.
    ///
    /// The keyboard takes precedence over the joystick when both are used.
    pub fn controls(&mut self) -> Controls {
        let keyboard = self.keyboard_movement();
        let movement = if keyboard != Vec2::ZERO {
            keyboard
        } else {
            self.joystick.value()
        };

        let controls = Controls {
            movement,
            toggle_vehicle: self.toggle_vehicle,
            fire: self.fire,
            melee: self.melee,
            use_medkit: self.use_medkit,
            restart: self.restart,
        };

        self.toggle_vehicle = false;
        self.fire = false;
        self.melee = false;
        self.use_medkit = false;
        self.restart = false;

        controls
    }
}
