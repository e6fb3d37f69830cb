use wasm_bindgen::prelude::*;

use crate::application::game_loop::GameLoop;
use crate::domain::{
    config::GameConfig,
    errors::GameResult,
    logging::{LogComponent, LogLevel, get_logger},
    world::World,
};
use crate::global_state::publish_frame_stats;
use crate::infrastructure::{AnimationLoop, BrowserRandom, CanvasSurface, SpriteAtlas};
use crate::log_error;

/// Preload sprites, bind the canvas and start the loop.
pub(crate) async fn launch(config: GameConfig) -> GameResult<AnimationLoop<CanvasSurface>> {
    config.validate()?;
    get_logger().log_with_metadata(
        LogLevel::Info,
        LogComponent::Presentation("Launch"),
        &format!("🚀 Starting enemy demo on #{}", config.canvas_id),
        &serde_json::to_string(&config)?,
    );

    let atlas = SpriteAtlas::preload(&config.sprites).await?;
    let surface = CanvasSurface::from_canvas_id(
        &config.canvas_id,
        config.width.round() as u32,
        config.height.round() as u32,
        atlas,
    )?;
    let world = World::new(config, Box::new(BrowserRandom));
    let game_loop =
        AnimationLoop::new(GameLoop::new(world, surface)).on_frame(publish_frame_stats);
    game_loop.start();
    Ok(game_loop)
}

/// Start the demo. `config_json` may override any [`GameConfig`] field.
#[wasm_bindgen(js_name = startDemo)]
pub async fn start_demo(config_json: Option<String>) -> Result<DemoHandle, JsValue> {
    let config = match config_json {
        Some(json) => GameConfig::from_json(&json)?,
        None => GameConfig::default(),
    };
    let game_loop = launch(config).await.map_err(|err| {
        log_error!(LogComponent::Presentation("Launch"), "❌ {}", err);
        JsValue::from(err)
    })?;
    Ok(DemoHandle { game_loop })
}

/// Handle to a running demo
#[wasm_bindgen]
pub struct DemoHandle {
    game_loop: AnimationLoop<CanvasSurface>,
}

#[wasm_bindgen]
impl DemoHandle {
    pub fn stop(&self) {
        self.game_loop.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.game_loop.is_running()
    }

    #[wasm_bindgen(js_name = liveEnemies)]
    pub fn live_enemies(&self) -> usize {
        self.game_loop.last_stats().live_enemies
    }

    #[wasm_bindgen(js_name = spawnedTotal)]
    pub fn spawned_total(&self) -> f64 {
        self.game_loop.last_stats().spawned_total as f64
    }

    pub fn fps(&self) -> f64 {
        self.game_loop.last_stats().fps
    }
}
