//! Enemy record and the shared per-frame behavior.
//!
//! Every enemy scrolls left, cycles through its sprite frames and marks itself
//! for deletion once it has left the screen. Variant-specific motion and
//! drawing live in [`behavior`] and call back into the base steps here.

pub mod behavior;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use super::config::GameConfig;
use super::random::RandomSource;
use super::surface::{DrawSurface, Rect};
pub use behavior::Behavior;

/// Enemy archetypes, in spawn-table order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Worm,
    Ghost,
    Spider,
}

/// World dimensions an enemy spawns into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    behavior: Behavior,
    x: f64,
    y: f64,
    vx: f64,
    width: f64,
    height: f64,
    sprite_width: f64,
    sprite_height: f64,
    frame: usize,
    max_frame: usize,
    frame_timer: f64,
    frame_interval: f64,
    marked_for_deletion: bool,
}

impl Enemy {
    /// Spawn a new enemy of `kind` using the spawn rule of that kind.
    pub fn spawn(kind: EnemyKind, config: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        let sheet = config.sprites.get(kind);
        let bounds = Bounds { width: config.width, height: config.height };
        let width = sheet.world_width();
        let height = sheet.world_height();
        let spawn = Behavior::spawn(kind, bounds, height, rng);

        Self {
            behavior: spawn.behavior,
            x: spawn.x,
            y: spawn.y,
            vx: spawn.vx,
            width,
            height,
            sprite_width: sheet.frame_width,
            sprite_height: sheet.frame_height,
            frame: 0,
            max_frame: sheet.max_frame,
            frame_timer: 0.0,
            frame_interval: config.frame_interval_ms,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, delta_time: f64) {
        match self.behavior {
            Behavior::Worm => self.base_update(delta_time),
            Behavior::Ghost { .. } => behavior::update_ghost(self, delta_time),
            Behavior::Spider { .. } => behavior::update_spider(self, delta_time),
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self.behavior {
            Behavior::Worm => self.base_draw(surface),
            Behavior::Ghost { .. } => behavior::draw_ghost(self, surface),
            Behavior::Spider { .. } => behavior::draw_spider(self, surface),
        }
    }

    /// Leftward scroll, off-screen check and frame animation shared by all kinds.
    pub(crate) fn base_update(&mut self, delta_time: f64) {
        self.x -= self.vx * delta_time;
        if self.x < -self.width {
            self.mark_for_deletion();
        }

        if self.frame_timer > self.frame_interval {
            self.frame = if self.frame < self.max_frame { self.frame + 1 } else { 0 };
            self.frame_timer = 0.0;
        } else {
            self.frame_timer += delta_time;
        }
    }

    pub(crate) fn base_draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.blit(self.kind(), self.source_rect(), self.dest_rect());
    }

    pub(crate) fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    pub(crate) fn shift_y(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Current frame's region of the sprite sheet.
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.frame as f64 * self.sprite_width, 0.0, self.sprite_width, self.sprite_height)
    }

    /// Where the enemy lands in world space.
    pub fn dest_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }

    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity_x(&self) -> f64 {
        self.vx
    }

    /// Vertical velocity. Only spiders move vertically on their own.
    pub fn velocity_y(&self) -> f64 {
        match self.behavior {
            Behavior::Spider { vy, .. } => vy,
            _ => 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn max_frame(&self) -> usize {
        self.max_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random::ScriptedRandom;

    fn worm() -> Enemy {
        Enemy::spawn(EnemyKind::Worm, &GameConfig::default(), &mut ScriptedRandom::constant(0.5))
    }

    #[test]
    fn frame_advances_after_interval_and_wraps() {
        let mut enemy = worm();
        // 101ms accumulates past the 100ms interval; the next call advances.
        enemy.update(101.0);
        assert_eq!(enemy.frame(), 0);
        enemy.update(1.0);
        assert_eq!(enemy.frame(), 1);

        for _ in 0..4 {
            enemy.update(101.0);
            enemy.update(1.0);
        }
        assert_eq!(enemy.frame(), 5);
        enemy.update(101.0);
        enemy.update(1.0);
        assert_eq!(enemy.frame(), 0);
    }

    #[test]
    fn source_rect_follows_frame() {
        let mut enemy = worm();
        enemy.update(101.0);
        enemy.update(1.0);
        let source = enemy.source_rect();
        assert_eq!(source.x, 229.0);
        assert_eq!(source.width, 229.0);
        assert_eq!(source.height, 171.0);
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(EnemyKind::Spider.to_string(), "spider");
        assert_eq!("ghost".parse::<EnemyKind>().unwrap(), EnemyKind::Ghost);
    }
}
