use crate::application::game_loop::FrameStats;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive mirrors of the running game, read by the HUD.
pub struct Globals {
    pub live_enemies: RwSignal<usize>,
    pub spawned_total: RwSignal<u64>,
    pub fps: RwSignal<f64>,
    pub loop_status: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        live_enemies: create_rw_signal(0),
        spawned_total: create_rw_signal(0),
        fps: create_rw_signal(0.0),
        loop_status: create_rw_signal("Idle".to_string()),
    })
}

crate::global_signals! {
    pub live_enemies => live_enemies: usize,
    pub spawned_total => spawned_total: u64,
    pub fps => fps: f64,
    pub loop_status => loop_status: String,
}

/// Push one frame's stats into the HUD signals. Only changed values are set.
pub fn publish_frame_stats(stats: &FrameStats) {
    let g = globals();
    if g.live_enemies.get_untracked() != stats.live_enemies {
        g.live_enemies.set(stats.live_enemies);
    }
    if g.spawned_total.get_untracked() != stats.spawned_total {
        g.spawned_total.set(stats.spawned_total);
    }
    // FPS text only needs a few updates a second
    if stats.frame % 15 == 0 {
        g.fps.set(stats.fps);
    }
}
