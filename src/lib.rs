use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod macros;

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod global_state;
pub mod app;

/// Install the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    log_info!(LogComponent::Presentation("Initialize"), "🚀 Enemy spawner initialized");
}

/// Mount the HUD page, which creates the canvas and starts the game.
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}
