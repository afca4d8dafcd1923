/*!
# Wildlands

A small open-field 3D game built on [kiss3d](https://docs.rs/kiss3d).

You walk a box across a large green field dotted with trees and mountains.
A handful of enemies chase you. Shoot them, club them, or jump in the red car
and outrun them. Felling trees yields wood, every few kills drop a medkit, and
the coin counter survives between sessions. The sky follows a slow day/night
cycle.

## Controls

* `W/A/S/D` or arrows: move.
* `E`: enter or leave the car (when close enough).
* `Space`: shoot in the direction you last moved.
* `F`: melee swing; also fells trees next to you.
* `H`: use a medkit.
* `R`: play again after a game over.
* Touch: drag on the left half of the screen to move, tap the right half to shoot.

## Layout

The game state lives in [`world`] and is plain data: a frame is one call to
[`World::step`](world::World::step) with the [`Controls`](input::Controls)
gathered by [`input`]. Nothing there touches the GPU, so the gameplay is
tested headless. [`render`] mirrors the state into a kiss3d scene graph,
[`camera`] trails the player and [`hud`] draws the status text.

The same code runs natively and in the browser through `#[kiss3d::main]`.
On native targets the coins are kept in a text file (see
`storage::FileCoinStore`), in the browser they go to `localStorage`.
*/
#![allow(clippy::module_inception)]

pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod day_night;
pub mod hud;
pub mod input;
pub mod inventory;
pub mod joystick;
pub mod render;
pub mod storage;
pub mod world;

pub mod prelude {
    pub use crate::camera::*;
    pub use crate::config::GameConfig;
    pub use crate::day_night::DayNightCycle;
    pub use crate::hud::Hud;
    pub use crate::input::{Controls, InputState};
    pub use crate::inventory::{Inventory, Item};
    pub use crate::joystick::Joystick;
    pub use crate::render::SceneView;
    pub use crate::storage::{CoinStore, MemoryCoinStore, StorageError};
    pub use crate::world::{GameEvent, World};
}
