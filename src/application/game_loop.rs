use std::collections::VecDeque;

use crate::domain::{
    logging::{LogComponent, LogThrottle},
    surface::{DrawSurface, Rect},
    world::World,
};
use crate::log_info;

const FPS_WINDOW: usize = 60;
const STATS_LOG_EVERY: u64 = 300;

/// Turns host timestamps into frame deltas. Starts at zero like the
/// first `animate(0)` call of a browser loop.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous tick. A timestamp older than the
    /// previous one yields zero and becomes the new baseline.
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let delta = (timestamp - self.last_timestamp).max(0.0);
        self.last_timestamp = timestamp;
        delta
    }

    /// Make `timestamp` the baseline so the next tick measures from it.
    pub fn reset(&mut self, timestamp: f64) {
        self.last_timestamp = timestamp;
    }
}

/// Per-frame numbers surfaced to the HUD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub delta_ms: f64,
    pub fps: f64,
    pub live_enemies: usize,
    pub spawned_total: u64,
}

/// One frame of the game: clear, update, draw.
pub struct GameLoop<S: DrawSurface> {
    world: World,
    surface: S,
    clock: FrameClock,
    frame: u64,
    fps_log: VecDeque<f64>,
    throttle: LogThrottle,
}

impl<S: DrawSurface> GameLoop<S> {
    pub fn new(world: World, surface: S) -> Self {
        Self {
            world,
            surface,
            clock: FrameClock::new(),
            frame: 0,
            fps_log: VecDeque::with_capacity(FPS_WINDOW),
            throttle: LogThrottle::new(STATS_LOG_EVERY),
        }
    }

    pub fn run_frame(&mut self, timestamp: f64) -> FrameStats {
        let delta_time = self.clock.tick(timestamp);
        let bounds = self.world.bounds();

        self.surface.clear(Rect::new(0.0, 0.0, bounds.width, bounds.height));
        self.world.update(delta_time);
        self.world.draw(&mut self.surface);

        self.frame += 1;
        if delta_time > 0.0 {
            self.fps_log.push_back(1000.0 / delta_time);
            if self.fps_log.len() > FPS_WINDOW {
                self.fps_log.pop_front();
            }
        }

        let stats = self.stats(delta_time);
        if self.throttle.tick() {
            log_info!(
                LogComponent::Application("GameLoop"),
                "📊 frame {} • {:.1} fps • {} live • {} spawned",
                stats.frame,
                stats.fps,
                stats.live_enemies,
                stats.spawned_total
            );
        }
        stats
    }

    fn stats(&self, delta_ms: f64) -> FrameStats {
        let fps = if self.fps_log.is_empty() {
            0.0
        } else {
            self.fps_log.iter().sum::<f64>() / self.fps_log.len() as f64
        };
        FrameStats {
            frame: self.frame,
            delta_ms,
            fps,
            live_enemies: self.world.len(),
            spawned_total: self.world.spawned_total(),
        }
    }

    /// Restart delta measurement from `timestamp`, e.g. after the loop
    /// was paused.
    pub fn reset_clock(&mut self, timestamp: f64) {
        self.clock.reset(timestamp);
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_reports_deltas_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(0.0), 0.0);
        assert_eq!(clock.tick(16.0), 16.0);
        assert_eq!(clock.tick(50.0), 34.0);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut clock = FrameClock::new();
        clock.tick(5000.0);
        assert_eq!(clock.tick(0.0), 0.0);
        assert_eq!(clock.tick(16.0), 16.0);
    }

    #[test]
    fn reset_moves_the_baseline() {
        let mut clock = FrameClock::new();
        clock.tick(5000.0);
        clock.reset(120.0);
        assert_eq!(clock.tick(136.0), 16.0);
    }
}
