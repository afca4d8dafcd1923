use crate::inventory::Inventory;
use glamx::Vec3;
use std::fmt;

/// Height of the player's and enemies' centers above the ground.
pub const ACTOR_HEIGHT: f32 = 1.0;

/// Stable identifier of a spawned entity, unique within one [`World`](super::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub(crate) u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The player character.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Center of the player's box.
    pub position: Vec3,
    /// Unit direction of the last movement, used to aim shots.
    pub facing: Vec3,
    /// Remaining health. The game is over at zero.
    pub health: f32,
    /// Health cap for medkits.
    pub max_health: f32,
    /// Persisted coin counter.
    pub coins: u64,
    /// Current wave number, starting at 1.
    pub level: u32,
    /// Enemies killed during this game.
    pub kills: u32,
    /// Carried items.
    pub inventory: Inventory,
    /// Whether the player is driving the car.
    pub in_vehicle: bool,
    /// Frames until the next shot is allowed.
    pub fire_cooldown: u32,
    /// Frames until the next melee swing is allowed.
    pub melee_cooldown: u32,
}

impl Player {
    pub(crate) fn new(health: f32, coins: u64) -> Self {
        Self {
            position: Vec3::new(0.0, ACTOR_HEIGHT, 0.0),
            facing: Vec3::NEG_Z,
            health,
            max_health: health,
            coins,
            level: 1,
            kills: 0,
            inventory: Inventory::new(),
            in_vehicle: false,
            fire_cooldown: 0,
            melee_cooldown: 0,
        }
    }

    /// Whether the player still has health left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// The drivable car.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// Center of the car's box.
    pub position: Vec3,
}

/// A chaser.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    pub health: u32,
}

/// A tree. `position` is the foot of the trunk.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub id: EntityId,
    pub position: Vec3,
}

/// A mountain. `position` is the center of its base.
#[derive(Clone, Debug, PartialEq)]
pub struct Mountain {
    pub id: EntityId,
    pub position: Vec3,
}

/// A flying bullet.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: EntityId,
    pub position: Vec3,
    /// Displacement per frame.
    pub velocity: Vec3,
    /// Frames before the bullet disappears.
    pub frames_left: u32,
}

/// Something notable that happened during a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    EnteredVehicle,
    ExitedVehicle,
    Fired(EntityId),
    EnemyKilled(EntityId),
    TreeFelled(EntityId),
    /// Damage taken this frame.
    PlayerHurt(f32),
    /// Health restored.
    Healed(f32),
    /// The new level.
    LevelUp(u32),
    /// The new coin total.
    CoinsChanged(u64),
    GameOver,
}
