//! The per-frame update.
//!
//! Every check is a linear scan over the handful of live entities.

use super::entity::{Bullet, GameEvent, ACTOR_HEIGHT};
use super::World;
use crate::input::Controls;
use crate::inventory::Item;
use glamx::{Vec2, Vec3};

/// Distance in front of the player where bullets appear.
const MUZZLE_OFFSET: f32 = 0.8;

impl World {
    /// Advances the game by one frame and reports what happened.
    ///
    /// Once the player is dead only the day/night clock keeps running.
    pub fn step(&mut self, controls: &Controls) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.is_game_over() {
            self.day_night.step();
            return events;
        }

        self.player.fire_cooldown = self.player.fire_cooldown.saturating_sub(1);
        self.player.melee_cooldown = self.player.melee_cooldown.saturating_sub(1);

        if controls.toggle_vehicle {
            self.toggle_vehicle(&mut events);
        }

        self.move_player(controls.movement);
        self.chase_player();

        if controls.fire {
            self.fire(&mut events);
        }

        self.update_bullets();

        if controls.melee {
            self.melee(&mut events);
        }

        self.collect_kills(&mut events);

        if controls.use_medkit {
            self.use_medkit(&mut events);
        }

        self.apply_contact_damage(&mut events);

        if self.enemies.is_empty() && self.config.enemy_count > 0 && !self.is_game_over() {
            self.player.level += 1;
            self.spawn_wave();
            log::info!("wave cleared, now at level {}", self.player.level);
            events.push(GameEvent::LevelUp(self.player.level));
        }

        self.day_night.step();

        events
    }

    fn toggle_vehicle(&mut self, events: &mut Vec<GameEvent>) {
        let distance = self.player.position.distance(self.vehicle.position);
        if distance >= self.config.vehicle_range {
            log::debug!("car is {:.1} away, too far to toggle", distance);
            return;
        }

        self.player.in_vehicle = !self.player.in_vehicle;

        if self.player.in_vehicle {
            self.snap_player_to_vehicle();
            log::debug!("entered the car");
            events.push(GameEvent::EnteredVehicle);
        } else {
            log::debug!("left the car");
            events.push(GameEvent::ExitedVehicle);
        }
    }

    fn move_player(&mut self, movement: Vec2) {
        let speed = if self.player.in_vehicle {
            self.config.drive_speed
        } else {
            self.config.walk_speed
        };
        let delta = Vec3::new(movement.x, 0.0, movement.y) * speed;

        if let Some(dir) = delta.try_normalize() {
            self.player.facing = dir;
        }

        if self.player.in_vehicle {
            self.vehicle.position = self.clamp_to_ground(self.vehicle.position + delta);
            self.snap_player_to_vehicle();
        } else {
            self.player.position = self.clamp_to_ground(self.player.position + delta);
        }
    }

    fn snap_player_to_vehicle(&mut self) {
        self.player.position = self.vehicle.position;
        self.player.position.y = ACTOR_HEIGHT;
    }

    fn chase_player(&mut self) {
        let target = self.player.position;
        let speed = self.config.enemy_speed;

        for enemy in &mut self.enemies {
            let dir = (target - enemy.position).normalize_or_zero();
            enemy.position += dir * speed;
        }
    }

    fn fire(&mut self, events: &mut Vec<GameEvent>) {
        if self.player.fire_cooldown > 0 {
            return;
        }

        let id = self.alloc_id();
        let facing = self.player.facing;
        self.bullets.push(Bullet {
            id,
            position: self.player.position + facing * MUZZLE_OFFSET,
            velocity: facing * self.config.bullet_speed,
            frames_left: self.config.bullet_lifetime,
        });
        self.player.fire_cooldown = self.config.fire_cooldown;
        events.push(GameEvent::Fired(id));
    }

    fn update_bullets(&mut self) {
        let hit_radius = self.config.bullet_hit_radius;
        let half = self.config.half_extent();
        let enemies = &mut self.enemies;

        self.bullets.retain_mut(|bullet| {
            bullet.position += bullet.velocity;
            bullet.frames_left = bullet.frames_left.saturating_sub(1);

            let target = enemies
                .iter_mut()
                .find(|e| e.health > 0 && e.position.distance(bullet.position) < hit_radius);

            if let Some(enemy) = target {
                enemy.health -= 1;
                log::debug!("bullet {} hit enemy {}", bullet.id, enemy.id);
                return false;
            }

            bullet.frames_left > 0
                && bullet.position.x.abs() <= half
                && bullet.position.z.abs() <= half
        });
    }

    fn melee(&mut self, events: &mut Vec<GameEvent>) {
        if self.player.melee_cooldown > 0 {
            return;
        }
        self.player.melee_cooldown = self.config.melee_cooldown;

        let origin = self.player.position;
        let range = self.config.melee_range;
        let damage = self.config.melee_damage;

        for enemy in &mut self.enemies {
            if enemy.position.distance(origin) < range {
                enemy.health = enemy.health.saturating_sub(damage);
            }
        }

        let chop_range = self.config.chop_range;
        let origin_xz = Vec2::new(origin.x, origin.z);
        let mut felled = 0;

        self.trees.retain(|tree| {
            let close = Vec2::new(tree.position.x, tree.position.z).distance(origin_xz) < chop_range;
            if close {
                log::debug!("felled tree {}", tree.id);
                events.push(GameEvent::TreeFelled(tree.id));
                felled += 1;
            }
            !close
        });

        self.player.inventory.add(Item::Wood, felled);
    }

    fn collect_kills(&mut self, events: &mut Vec<GameEvent>) {
        let before = self.player.coins;
        let mut killed = Vec::new();

        self.enemies.retain(|enemy| {
            if enemy.health == 0 {
                killed.push(enemy.id);
                false
            } else {
                true
            }
        });

        for id in killed {
            self.player.kills += 1;
            self.player.coins += self.config.coins_per_kill;

            let every = self.config.medkit_every_kills;
            if every > 0 && self.player.kills % every == 0 {
                self.player.inventory.add(Item::Medkit, 1);
            }

            log::debug!("enemy {} killed ({} kills)", id, self.player.kills);
            events.push(GameEvent::EnemyKilled(id));
        }

        if self.player.coins != before {
            events.push(GameEvent::CoinsChanged(self.player.coins));
        }
    }

    fn use_medkit(&mut self, events: &mut Vec<GameEvent>) {
        if self.player.health >= self.player.max_health {
            return;
        }

        if !self.player.inventory.take(Item::Medkit) {
            log::debug!("no medkit to use");
            return;
        }

        let before = self.player.health;
        self.player.health = (before + self.config.medkit_heal).min(self.player.max_health);
        events.push(GameEvent::Healed(self.player.health - before));
    }

    fn apply_contact_damage(&mut self, events: &mut Vec<GameEvent>) {
        let origin = self.player.position;
        let range = self.config.contact_range;
        let touching = self
            .enemies
            .iter()
            .filter(|e| e.position.distance(origin) < range)
            .count();

        if touching == 0 {
            return;
        }

        let damage = touching as f32 * self.config.contact_damage;
        self.player.health = (self.player.health - damage).max(0.0);
        events.push(GameEvent::PlayerHurt(damage));

        if self.is_game_over() {
            log::info!(
                "game over at level {} with {} kills and {} coins",
                self.player.level,
                self.player.kills,
                self.player.coins
            );
            events.push(GameEvent::GameOver);
        }
    }
}
