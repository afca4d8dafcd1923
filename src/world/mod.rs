//! The game state and its per-frame update.
//!
//! Everything here is plain data: nothing touches the GPU, so the whole
//! simulation can run headless. The [`render`](crate::render) module mirrors
//! it into a kiss3d scene graph.

pub use self::entity::{
    Bullet, Enemy, EntityId, GameEvent, Mountain, Player, Tree, Vehicle, ACTOR_HEIGHT,
};
pub use self::world::World;

mod entity;
mod step;
mod world;
