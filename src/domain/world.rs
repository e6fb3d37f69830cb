use strum::VariantArray;

use super::config::GameConfig;
use super::enemy::{Bounds, Enemy, EnemyKind};
use super::logging::LogComponent;
use super::random::RandomSource;
use super::surface::DrawSurface;
use crate::log_debug;

/// Owns the live enemies and the spawn timer.
pub struct World {
    config: GameConfig,
    enemies: Vec<Enemy>,
    spawn_timer: f64,
    spawned_total: u64,
    rng: Box<dyn RandomSource>,
}

impl World {
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        Self { config, enemies: Vec::new(), spawn_timer: 0.0, spawned_total: 0, rng }
    }

    /// Advance the world by `delta_time` milliseconds.
    ///
    /// When the spawn timer passes the interval, marked enemies are pruned and
    /// exactly one new enemy is spawned, however large `delta_time` is. Every
    /// live enemy is then updated, the new one included.
    pub fn update(&mut self, delta_time: f64) {
        self.spawn_timer += delta_time;
        if self.spawn_timer > self.config.spawn_interval_ms {
            self.prune();
            self.spawn_random();
            self.spawn_timer = 0.0;
        }

        for enemy in &mut self.enemies {
            enemy.update(delta_time);
        }
    }

    /// Draw every enemy in spawn order. Does not touch simulation state.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for enemy in &self.enemies {
            enemy.draw(surface);
        }
    }

    /// Spawn a specific kind right away, bypassing the timer.
    pub fn spawn(&mut self, kind: EnemyKind) -> &Enemy {
        let enemy = Enemy::spawn(kind, &self.config, self.rng.as_mut());
        log_debug!(
            LogComponent::Domain("World"),
            "👾 Spawned {} at ({:.1}, {:.1})",
            kind,
            enemy.x(),
            enemy.y()
        );
        self.spawned_total += 1;
        self.enemies.push(enemy);
        &self.enemies[self.enemies.len() - 1]
    }

    fn spawn_random(&mut self) {
        let kinds = EnemyKind::VARIANTS;
        let kind = kinds[self.rng.pick_index(kinds.len())];
        self.spawn(kind);
    }

    fn prune(&mut self) {
        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_marked_for_deletion());
        let removed = before - self.enemies.len();
        if removed > 0 {
            log_debug!(LogComponent::Domain("World"), "🧹 Pruned {} enemies", removed);
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn spawn_timer(&self) -> f64 {
        self.spawn_timer
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { width: self.config.width, height: self.config.height }
    }
}
