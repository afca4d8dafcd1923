//! Mirrors the [`World`] into a kiss3d scene graph.
//!
//! Static props are built once. Enemies, trees and bullets keep one node per
//! entity id: nodes are added when an entity appears and removed from the
//! scene when it is gone.

use crate::color;
use crate::day_night::DayNightCycle;
use crate::world::{EntityId, World};
use glamx::Vec3;
use kiss3d::light::Light;
use kiss3d::scene::SceneNode3d;
use kiss3d::window::Window;
use std::collections::{HashMap, HashSet};

const GROUND_THICKNESS: f32 = 0.1;
const TRUNK_RADIUS: f32 = 0.5;
const TRUNK_HEIGHT: f32 = 4.0;
const LEAVES_RADIUS: f32 = 2.0;
const MOUNTAIN_SIDES: u32 = 4;
const BULLET_RADIUS: f32 = 0.2;
const AMBIENT: f32 = 0.4;

/// Scene nodes of every visible entity.
pub struct SceneView {
    root: SceneNode3d,
    sun: SceneNode3d,
    player: SceneNode3d,
    vehicle: SceneNode3d,
    enemies: HashMap<EntityId, SceneNode3d>,
    trees: HashMap<EntityId, SceneNode3d>,
    bullets: HashMap<EntityId, SceneNode3d>,
}

impl SceneView {
    /// Builds the scene for `world` under `scene`.
    pub fn new(scene: &mut SceneNode3d, world: &World) -> Self {
        let config = world.config();
        let mut root = scene.add_group();

        root.add_cube(config.ground_size, GROUND_THICKNESS, config.ground_size)
            .set_position(Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0))
            .set_color(color::GRASS);

        let sun = root
            .add_light(
                Light::directional(Vec3::new(-100.0, -200.0, -100.0).normalize())
                    .with_intensity(world.day_night().intensity()),
            )
            .set_position(Vec3::new(100.0, 200.0, 100.0));

        for mountain in &world.mountains {
            root.add_cone_with_subdiv(config.mountain_radius, config.mountain_height, MOUNTAIN_SIDES)
                .set_position(mountain.position + Vec3::Y * (config.mountain_height / 2.0))
                .set_color(color::ROCK);
        }

        let player = root.add_cube(1.0, 2.0, 1.0).set_color(color::PLAYER);
        let vehicle = root.add_cube(3.0, 1.0, 2.0).set_color(color::CAR);

        let mut view = Self {
            root,
            sun,
            player,
            vehicle,
            enemies: HashMap::new(),
            trees: HashMap::new(),
            bullets: HashMap::new(),
        };
        view.sync(world);
        view
    }

    /// Moves, adds and removes nodes to match `world`.
    pub fn sync(&mut self, world: &World) {
        self.player.set_position(world.player.position);
        self.vehicle.set_position(world.vehicle.position);

        let root = &mut self.root;

        sync_nodes(
            &mut self.enemies,
            world.enemies.iter().map(|e| (e.id, e.position)),
            |pos| root.add_cube(1.0, 2.0, 1.0).set_color(color::ENEMY).set_position(pos),
        );

        sync_nodes(
            &mut self.trees,
            world.trees.iter().map(|t| (t.id, t.position)),
            |pos| {
                let mut tree = root.add_group().set_position(pos);
                tree.add_cylinder(TRUNK_RADIUS, TRUNK_HEIGHT)
                    .set_position(Vec3::Y * (TRUNK_HEIGHT / 2.0))
                    .set_color(color::BARK);
                tree.add_sphere(LEAVES_RADIUS)
                    .set_position(Vec3::Y * (TRUNK_HEIGHT + LEAVES_RADIUS))
                    .set_color(color::LEAVES);
                tree
            },
        );

        sync_nodes(
            &mut self.bullets,
            world.bullets.iter().map(|b| (b.id, b.position)),
            |pos| root.add_sphere(BULLET_RADIUS).set_color(color::BULLET).set_position(pos),
        );
    }

    /// Applies the day/night cycle to the sun and the sky.
    pub fn apply_lighting(&mut self, window: &mut Window, cycle: &DayNightCycle) {
        let intensity = cycle.intensity();
        self.sun.modify_light(|light| light.intensity = intensity);
        window.set_background_color(cycle.sky_color());
        window.set_ambient(AMBIENT);
    }

    /// Removes every node of this view from the scene.
    pub fn clear(mut self) {
        self.root.remove();
        log::debug!(
            "cleared scene: {} enemies, {} trees, {} bullets",
            self.enemies.len(),
            self.trees.len(),
            self.bullets.len()
        );
    }
}

/// Updates the nodes of one entity kind.
///
/// Nodes of vanished entities are removed, new entities get a node from
/// `spawn`, and every remaining node is moved to its entity's position.
fn sync_nodes(
    nodes: &mut HashMap<EntityId, SceneNode3d>,
    entities: impl Iterator<Item = (EntityId, Vec3)>,
    mut spawn: impl FnMut(Vec3) -> SceneNode3d,
) {
    let mut alive = HashSet::new();

    for (id, position) in entities {
        let _ = alive.insert(id);
        let _ = nodes
            .entry(id)
            .or_insert_with(|| spawn(position))
            .set_position(position);
    }

    nodes.retain(|id, node| {
        let keep = alive.contains(id);
        if !keep {
            node.remove();
        }
        keep
    });
}
