//! Tuning constants for a game session.
//!
//! Every value is expressed per frame: the world advances by one [`World::step`]
//! for each rendered frame, so speeds are in world units per frame and
//! cooldowns are frame counts.
//!
//! [`World::step`]: crate::world::World::step

use glamx::Vec3;

/// Gameplay configuration.
///
/// The default values give the standard game. Override individual values
/// with the `with_*` builder methods:
///
/// ```
/// # use wildlands::config::GameConfig;
/// let config = GameConfig::default()
///     .with_enemy_count(8)
///     .with_walk_speed(0.5);
/// assert_eq!(config.enemy_count, 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square ground plane. Entities are kept on it.
    pub ground_size: f32,
    /// Number of trees scattered at startup.
    pub tree_count: usize,
    /// Trees are spawned in `[-tree_spread / 2, tree_spread / 2]` on X and Z.
    pub tree_spread: f32,
    /// Number of mountains scattered at startup.
    pub mountain_count: usize,
    /// Mountains are spawned in `[-mountain_spread / 2, mountain_spread / 2]`.
    pub mountain_spread: f32,
    /// Base radius of a mountain cone.
    pub mountain_radius: f32,
    /// Height of a mountain cone.
    pub mountain_height: f32,
    /// Number of enemies in each wave.
    pub enemy_count: usize,
    /// Enemies of a wave spawn within `enemy_spread / 2` of the player on X and Z.
    pub enemy_spread: f32,
    /// Where the car is parked when the world is generated.
    pub car_position: Vec3,

    /// Player speed on foot.
    pub walk_speed: f32,
    /// Car speed.
    pub drive_speed: f32,
    /// Maximum player/car distance for entering or leaving the car.
    pub vehicle_range: f32,
    /// Distance an enemy closes on the player each frame.
    pub enemy_speed: f32,

    /// Health the player starts with.
    pub player_health: f32,
    /// Hit points of a freshly spawned enemy.
    pub enemy_health: u32,
    /// Enemies closer than this hurt the player.
    pub contact_range: f32,
    /// Damage dealt by each touching enemy per frame.
    pub contact_damage: f32,

    /// Bullet speed.
    pub bullet_speed: f32,
    /// Frames before an unused bullet disappears.
    pub bullet_lifetime: u32,
    /// A bullet hits an enemy closer than this.
    pub bullet_hit_radius: f32,
    /// Frames between two shots.
    pub fire_cooldown: u32,

    /// Enemies closer than this are hit by a melee swing.
    pub melee_range: f32,
    /// Damage dealt by a melee swing.
    pub melee_damage: u32,
    /// Frames between two melee swings.
    pub melee_cooldown: u32,
    /// Trees closer than this are felled by a melee swing.
    pub chop_range: f32,

    /// Coins awarded for each enemy killed.
    pub coins_per_kill: u64,
    /// A medkit drops every `medkit_every_kills` kills. Zero disables drops.
    pub medkit_every_kills: u32,
    /// Health restored by a medkit.
    pub medkit_heal: f32,

    /// Day/night phase advance per frame, in radians.
    pub day_speed: f32,
    /// Camera position relative to the player.
    pub camera_offset: Vec3,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ground_size: 1000.0,
            tree_count: 50,
            tree_spread: 800.0,
            mountain_count: 10,
            mountain_spread: 900.0,
            mountain_radius: 20.0,
            mountain_height: 50.0,
            enemy_count: 5,
            enemy_spread: 200.0,
            car_position: Vec3::new(10.0, 0.5, 10.0),

            walk_speed: 0.3,
            drive_speed: 0.8,
            vehicle_range: 5.0,
            enemy_speed: 0.05,

            player_health: 100.0,
            enemy_health: 3,
            contact_range: 1.2,
            contact_damage: 0.25,

            bullet_speed: 1.5,
            bullet_lifetime: 90,
            bullet_hit_radius: 1.0,
            fire_cooldown: 10,

            melee_range: 2.5,
            melee_damage: 2,
            melee_cooldown: 20,
            chop_range: 3.0,

            coins_per_kill: 10,
            medkit_every_kills: 3,
            medkit_heal: 25.0,

            day_speed: 0.002,
            camera_offset: Vec3::new(0.0, 8.0, 15.0),
        }
    }
}

impl GameConfig {
    /// Sets the number of enemies per wave.
    pub fn with_enemy_count(mut self, count: usize) -> Self {
        self.enemy_count = count;
        self
    }

    /// Sets the number of trees.
    pub fn with_tree_count(mut self, count: usize) -> Self {
        self.tree_count = count;
        self
    }

    /// Sets the number of mountains.
    pub fn with_mountain_count(mut self, count: usize) -> Self {
        self.mountain_count = count;
        self
    }

    /// Sets the enemy spawn spread.
    pub fn with_enemy_spread(mut self, spread: f32) -> Self {
        self.enemy_spread = spread;
        self
    }

    /// Sets the walking speed.
    pub fn with_walk_speed(mut self, speed: f32) -> Self {
        self.walk_speed = speed;
        self
    }

    /// Sets the driving speed.
    pub fn with_drive_speed(mut self, speed: f32) -> Self {
        self.drive_speed = speed;
        self
    }

    /// Sets the enemy chase speed.
    pub fn with_enemy_speed(mut self, speed: f32) -> Self {
        self.enemy_speed = speed;
        self
    }

    /// Sets the player's starting health.
    pub fn with_player_health(mut self, health: f32) -> Self {
        self.player_health = health;
        self
    }

    /// Sets the contact damage per frame.
    pub fn with_contact_damage(mut self, damage: f32) -> Self {
        self.contact_damage = damage;
        self
    }

    /// Sets the day/night phase advance per frame.
    pub fn with_day_speed(mut self, speed: f32) -> Self {
        self.day_speed = speed;
        self
    }

    /// Sets the camera offset from the player.
    pub fn with_camera_offset(mut self, offset: Vec3) -> Self {
        self.camera_offset = offset;
        self
    }

    /// Half the ground size: the largest absolute X or Z an entity may have.
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.ground_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_the_standard_layout() {
        let config = GameConfig::default();
        assert_eq!(config.tree_count, 50);
        assert_eq!(config.mountain_count, 10);
        assert_eq!(config.enemy_count, 5);
        assert_eq!(config.walk_speed, 0.3);
        assert_eq!(config.drive_speed, 0.8);
        assert_eq!(config.vehicle_range, 5.0);
        assert_eq!(config.enemy_speed, 0.05);
        assert_eq!(config.day_speed, 0.002);
        assert_eq!(config.camera_offset, Vec3::new(0.0, 8.0, 15.0));
    }

    #[test]
    fn builders_override_single_fields() {
        let config = GameConfig::default()
            .with_enemy_count(1)
            .with_tree_count(0)
            .with_drive_speed(2.0);

        assert_eq!(config.enemy_count, 1);
        assert_eq!(config.tree_count, 0);
        assert_eq!(config.drive_speed, 2.0);
        assert_eq!(config.walk_speed, GameConfig::default().walk_speed);
    }

    #[test]
    fn half_extent_is_half_the_ground() {
        assert_eq!(GameConfig::default().half_extent(), 500.0);
    }
}
