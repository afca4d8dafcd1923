//! Cameras used by the game.

pub use self::follow3d::FollowCamera3d;

mod follow3d;
