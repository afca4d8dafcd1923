use super::entity::{Bullet, Enemy, EntityId, Mountain, Player, Tree, Vehicle, ACTOR_HEIGHT};
use crate::config::GameConfig;
use crate::day_night::DayNightCycle;
use glamx::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Enemies of a new wave never spawn closer than this to the player.
const MIN_SPAWN_DISTANCE: f32 = 10.0;

/// The complete state of one game.
///
/// Entity lists are public so that the renderer and tests can inspect and
/// arrange them; gameplay changes go through [`World::step`].
pub struct World {
    pub player: Player,
    pub vehicle: Vehicle,
    pub enemies: Vec<Enemy>,
    pub trees: Vec<Tree>,
    pub mountains: Vec<Mountain>,
    pub bullets: Vec<Bullet>,
    pub(super) day_night: DayNightCycle,
    pub(super) config: GameConfig,
    pub(super) rng: StdRng,
    next_id: u32,
}

impl World {
    /// Generates a world: props and the first wave are scattered at random.
    ///
    /// `coins` is the persisted coin counter.
    pub fn generate(config: GameConfig, rng: StdRng, coins: u64) -> Self {
        let mut world = Self::empty(config, rng, coins);

        for _ in 0..world.config.tree_count {
            let spread = world.config.tree_spread;
            let x = world.random_coord(spread);
            let z = world.random_coord(spread);
            let _ = world.spawn_tree(Vec3::new(x, 0.0, z));
        }

        for _ in 0..world.config.mountain_count {
            let spread = world.config.mountain_spread;
            let x = world.random_coord(spread);
            let z = world.random_coord(spread);
            let id = world.alloc_id();
            world.mountains.push(Mountain {
                id,
                position: Vec3::new(x, 0.0, z),
            });
        }

        world.spawn_wave();

        log::info!(
            "generated world: {} trees, {} mountains, {} enemies",
            world.trees.len(),
            world.mountains.len(),
            world.enemies.len()
        );

        world
    }

    /// Generates a world from a fixed seed.
    pub fn with_seed(config: GameConfig, seed: u64, coins: u64) -> Self {
        Self::generate(config, StdRng::seed_from_u64(seed), coins)
    }

    /// A world with only the player and the car.
    pub fn empty(config: GameConfig, rng: StdRng, coins: u64) -> Self {
        Self {
            player: Player::new(config.player_health, coins),
            vehicle: Vehicle {
                position: config.car_position,
            },
            enemies: Vec::new(),
            trees: Vec::new(),
            mountains: Vec::new(),
            bullets: Vec::new(),
            day_night: DayNightCycle::new(config.day_speed),
            config,
            rng,
            next_id: 0,
        }
    }

    /// Starts a new game with freshly scattered props, keeping the coins.
    pub fn restart(&mut self) {
        let rng = StdRng::from_rng(&mut self.rng);
        let coins = self.player.coins;
        *self = Self::generate(self.config.clone(), rng, coins);
        log::info!("restarted with {} coins", coins);
    }

    /// The configuration this world runs with.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The day/night clock.
    #[inline]
    pub fn day_night(&self) -> &DayNightCycle {
        &self.day_night
    }

    /// Whether the player has died.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// The position the camera follows.
    #[inline]
    pub fn focus(&self) -> Vec3 {
        self.player.position
    }

    /// Adds an enemy at `position` with full health.
    pub fn spawn_enemy(&mut self, position: Vec3) -> EntityId {
        let id = self.alloc_id();
        self.enemies.push(Enemy {
            id,
            position,
            health: self.config.enemy_health,
        });
        id
    }

    /// Adds a tree whose trunk stands at `position`.
    pub fn spawn_tree(&mut self, position: Vec3) -> EntityId {
        let id = self.alloc_id();
        self.trees.push(Tree { id, position });
        id
    }

    /// Spawns a full wave of enemies around the player.
    ///
    /// An offset that would leave the ground is mirrored on that axis, so a
    /// player standing at the edge still gets enemies at least
    /// `MIN_SPAWN_DISTANCE` away.
    pub(super) fn spawn_wave(&mut self) {
        let spread = self.config.enemy_spread;
        let h = self.config.half_extent();

        for _ in 0..self.config.enemy_count {
            let mut offset = Vec3::new(self.random_coord(spread), 0.0, self.random_coord(spread));
            if offset.length() < MIN_SPAWN_DISTANCE {
                offset = offset.try_normalize().unwrap_or(Vec3::X) * MIN_SPAWN_DISTANCE;
            }

            let target = self.player.position + offset;
            if target.x.abs() > h {
                offset.x = -offset.x;
            }
            if target.z.abs() > h {
                offset.z = -offset.z;
            }

            let mut position = self.clamp_to_ground(self.player.position + offset);
            position.y = ACTOR_HEIGHT;
            let _ = self.spawn_enemy(position);
        }
    }

    pub(super) fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Keeps `p` on the ground plane (X and Z only).
    pub(super) fn clamp_to_ground(&self, p: Vec3) -> Vec3 {
        let h = self.config.half_extent();
        Vec3::new(p.x.clamp(-h, h), p.y, p.z.clamp(-h, h))
    }

    fn random_coord(&mut self, spread: f32) -> f32 {
        (self.rng.random::<f32>() - 0.5) * spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_spawns_configured_counts() {
        let world = World::with_seed(GameConfig::default(), 42, 0);
        assert_eq!(world.trees.len(), 50);
        assert_eq!(world.mountains.len(), 10);
        assert_eq!(world.enemies.len(), 5);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn props_stay_inside_their_spread() {
        let config = GameConfig::default();
        let world = World::with_seed(config.clone(), 7, 0);

        for tree in &world.trees {
            assert!(tree.position.x.abs() <= config.tree_spread / 2.0);
            assert!(tree.position.z.abs() <= config.tree_spread / 2.0);
            assert_eq!(tree.position.y, 0.0);
        }

        for mountain in &world.mountains {
            assert!(mountain.position.x.abs() <= config.mountain_spread / 2.0);
            assert!(mountain.position.z.abs() <= config.mountain_spread / 2.0);
        }
    }

    #[test]
    fn enemies_spawn_away_from_the_player() {
        let world = World::with_seed(GameConfig::default().with_enemy_count(50), 3, 0);
        for enemy in &world.enemies {
            assert!(enemy.position.distance(world.player.position) >= MIN_SPAWN_DISTANCE - 1.0e-3);
            assert_eq!(enemy.position.y, ACTOR_HEIGHT);
            assert_eq!(enemy.health, 3);
        }
    }

    #[test]
    fn enemies_spawn_away_from_a_player_in_a_corner() {
        let config = GameConfig::default().with_enemy_count(20);
        let h = config.half_extent();

        for seed in 0..50 {
            let mut world = World::empty(config.clone(), StdRng::seed_from_u64(seed), 0);
            world.player.position = Vec3::new(h, ACTOR_HEIGHT, h);
            world.spawn_wave();

            for enemy in &world.enemies {
                let distance = enemy.position.distance(world.player.position);
                assert!(distance >= MIN_SPAWN_DISTANCE - 1.0e-3, "seed {}: {}", seed, distance);
                assert!(enemy.position.x.abs() <= h && enemy.position.z.abs() <= h);
            }
        }
    }

    #[test]
    fn same_seed_same_world() {
        let a = World::with_seed(GameConfig::default(), 9, 0);
        let b = World::with_seed(GameConfig::default(), 9, 0);
        assert_eq!(a.trees, b.trees);
        assert_eq!(a.enemies, b.enemies);
    }

    #[test]
    fn ids_are_unique() {
        let world = World::with_seed(GameConfig::default(), 1, 0);
        let mut ids: Vec<_> = world
            .trees
            .iter()
            .map(|t| t.id)
            .chain(world.mountains.iter().map(|m| m.id))
            .chain(world.enemies.iter().map(|e| e.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn player_starts_at_origin_with_restored_coins() {
        let world = World::with_seed(GameConfig::default(), 5, 120);
        assert_eq!(world.player.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(world.player.coins, 120);
        assert_eq!(world.player.level, 1);
        assert_eq!(world.vehicle.position, Vec3::new(10.0, 0.5, 10.0));
        assert!(!world.is_game_over());
    }

    #[test]
    fn restart_keeps_coins_and_heals() {
        let mut world = World::with_seed(GameConfig::default(), 5, 30);
        world.player.health = 0.0;
        world.player.coins = 70;
        world.restart();
        assert_eq!(world.player.coins, 70);
        assert_eq!(world.player.health, 100.0);
        assert_eq!(world.enemies.len(), 5);
    }
}
