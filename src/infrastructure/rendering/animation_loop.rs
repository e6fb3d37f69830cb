use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

use crate::application::game_loop::{FrameStats, GameLoop};
use crate::domain::{logging::LogComponent, surface::DrawSurface};
use crate::log_info;

type FrameHook = Box<dyn FnMut(&FrameStats)>;

struct LoopState<S: DrawSurface> {
    game: GameLoop<S>,
    on_frame: Option<FrameHook>,
    pending: Option<AnimationFrame>,
    last_stats: FrameStats,
    running: bool,
    resync: bool,
}

/// Drives a [`GameLoop`] from `requestAnimationFrame`.
///
/// Once started, the scheduled callback keeps the loop alive on its own;
/// dropping the handle does not stop it. Call [`AnimationLoop::stop`] to
/// cancel the pending frame and release the game.
pub struct AnimationLoop<S: DrawSurface + 'static> {
    state: Rc<RefCell<LoopState<S>>>,
}

impl<S: DrawSurface + 'static> Clone for AnimationLoop<S> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<S: DrawSurface + 'static> AnimationLoop<S> {
    pub fn new(game: GameLoop<S>) -> Self {
        let state = LoopState {
            game,
            on_frame: None,
            pending: None,
            last_stats: FrameStats::default(),
            running: false,
            resync: false,
        };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// Called after every frame with that frame's stats.
    pub fn on_frame(self, hook: impl FnMut(&FrameStats) + 'static) -> Self {
        self.state.borrow_mut().on_frame = Some(Box::new(hook));
        self
    }

    /// Run frame zero immediately, then one frame per display refresh.
    ///
    /// Starting again after [`AnimationLoop::stop`] skips frame zero: the
    /// first refresh only re-anchors the clock, so the pause is not
    /// simulated.
    pub fn start(&self) {
        let restart = {
            let mut state = self.state.borrow_mut();
            if state.running {
                return;
            }
            state.running = true;
            state.resync = state.game.frame_count() > 0;
            state.resync
        };
        log_info!(LogComponent::Infrastructure("AnimationLoop"), "▶️ Game loop started");
        if restart {
            Self::schedule(&self.state);
        } else {
            Self::frame(&self.state, 0.0);
        }
    }

    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        if state.running {
            state.running = false;
            state.pending.take();
            log_info!(LogComponent::Infrastructure("AnimationLoop"), "⏹️ Game loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn last_stats(&self) -> FrameStats {
        self.state.borrow().last_stats.clone()
    }

    fn frame(state: &Rc<RefCell<LoopState<S>>>, timestamp: f64) {
        let (stats, mut hook) = {
            let mut guard = state.borrow_mut();
            if !guard.running {
                return;
            }
            if guard.resync {
                guard.game.reset_clock(timestamp);
                guard.resync = false;
            }
            let stats = guard.game.run_frame(timestamp);
            guard.last_stats = stats.clone();
            (stats, guard.on_frame.take())
        };

        // The hook runs unborrowed so it may call back into this loop.
        if let Some(hook) = hook.as_mut() {
            hook(&stats);
        }

        {
            let mut guard = state.borrow_mut();
            if guard.on_frame.is_none() {
                guard.on_frame = hook;
            }
        }
        Self::schedule(state);
    }

    fn schedule(state: &Rc<RefCell<LoopState<S>>>) {
        let mut guard = state.borrow_mut();
        if !guard.running {
            return;
        }
        let next = Rc::clone(state);
        guard.pending =
            Some(request_animation_frame(move |timestamp| Self::frame(&next, timestamp)));
    }
}
