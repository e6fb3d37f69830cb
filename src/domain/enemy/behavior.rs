use super::{Bounds, Enemy, EnemyKind};
use crate::domain::random::RandomSource;
use crate::domain::surface::{DrawSurface, Point, with_opacity};

const WORM_SPEED: (f64, f64) = (0.1, 0.2);
const GHOST_SPEED: (f64, f64) = (0.1, 0.3);
const GHOST_MAX_CURVE: f64 = 3.0;
const GHOST_SPAWN_BAND: f64 = 0.6;
const GHOST_ANGLE_STEP: f64 = 0.04;
const GHOST_OPACITY: f64 = 0.7;
const SPIDER_SPEED: (f64, f64) = (0.1, 0.2);
const SPIDER_THREAD_OVERHANG: f64 = 10.0;

/// Variant tag plus the state only that variant needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Worm,
    /// Bobs on a sine wave while drifting left.
    Ghost { angle: f64, curve: f64 },
    /// Drops on a thread to `max_length`, then climbs back out the top.
    Spider { vy: f64, max_length: f64 },
}

pub(super) struct Spawn {
    pub behavior: Behavior,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
}

impl Behavior {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Behavior::Worm => EnemyKind::Worm,
            Behavior::Ghost { .. } => EnemyKind::Ghost,
            Behavior::Spider { .. } => EnemyKind::Spider,
        }
    }

    pub(super) fn spawn(
        kind: EnemyKind,
        bounds: Bounds,
        height: f64,
        rng: &mut dyn RandomSource,
    ) -> Spawn {
        match kind {
            EnemyKind::Worm => Spawn {
                behavior: Behavior::Worm,
                x: bounds.width,
                y: bounds.height - height,
                vx: rng.between(WORM_SPEED.0, WORM_SPEED.1),
            },
            EnemyKind::Ghost => {
                let y = rng.between(0.0, bounds.height * GHOST_SPAWN_BAND);
                let vx = rng.between(GHOST_SPEED.0, GHOST_SPEED.1);
                let curve = rng.between(0.0, GHOST_MAX_CURVE);
                Spawn { behavior: Behavior::Ghost { angle: 0.0, curve }, x: bounds.width, y, vx }
            }
            EnemyKind::Spider => {
                let x = rng.between(0.0, bounds.width);
                let vy = rng.between(SPIDER_SPEED.0, SPIDER_SPEED.1);
                let max_length = rng.between(0.0, bounds.height);
                Spawn { behavior: Behavior::Spider { vy, max_length }, x, y: -height, vx: 0.0 }
            }
        }
    }
}

pub(super) fn update_ghost(enemy: &mut Enemy, delta_time: f64) {
    enemy.base_update(delta_time);
    if let Behavior::Ghost { angle, curve } = enemy.behavior_mut() {
        let dy = angle.sin() * *curve;
        *angle += GHOST_ANGLE_STEP;
        enemy.shift_y(dy);
    }
}

pub(super) fn update_spider(enemy: &mut Enemy, delta_time: f64) {
    enemy.base_update(delta_time);
    // Top exit. The base check only covers the left edge.
    if enemy.y() < -enemy.height() {
        enemy.mark_for_deletion();
    }
    let Behavior::Spider { vy, max_length } = *enemy.behavior() else {
        return;
    };
    enemy.shift_y(vy * delta_time);
    // flip once, on the way down
    if enemy.y() > max_length && vy > 0.0 {
        if let Behavior::Spider { vy, .. } = enemy.behavior_mut() {
            *vy = -*vy;
        }
    }
}

pub(super) fn draw_ghost<S: DrawSurface + ?Sized>(enemy: &Enemy, surface: &mut S) {
    with_opacity(surface, GHOST_OPACITY, |surface| enemy.base_draw(surface));
}

pub(super) fn draw_spider<S: DrawSurface + ?Sized>(enemy: &Enemy, surface: &mut S) {
    let thread_x = enemy.x() + enemy.width() / 2.0;
    surface.line(
        Point::new(thread_x, 0.0),
        Point::new(thread_x, enemy.y() + SPIDER_THREAD_OVERHANG),
    );
    enemy.base_draw(surface);
}
