use leptos::html::Canvas;
use leptos::*;

use crate::domain::{config::GameConfig, logging::LogComponent};
use crate::global_state::{fps, live_enemies, loop_status, spawned_total};
use crate::log_error;
use crate::presentation::wasm_api::launch;

/// 🦀 Demo page: the game canvas plus a small HUD
#[component]
pub fn App() -> impl IntoView {
    let config = GameConfig::default();
    view! {
        <style>
            {r#"
            .enemy-demo {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 20px;
            }

            .hud {
                display: flex;
                gap: 32px;
                font-size: 14px;
            }

            .hud-value {
                font-weight: 600;
            }

            #canvas1 {
                border: 3px solid black;
            }
            "#}
        </style>
        <div class="enemy-demo">
            <Hud />
            <GameCanvas config=config />
        </div>
    }
}

#[component]
fn Hud() -> impl IntoView {
    let live = live_enemies();
    let total = spawned_total();
    let fps = fps();
    let status = loop_status();

    view! {
        <div class="hud">
            <div>"Live: "<span class="hud-value">{move || live.get().to_string()}</span></div>
            <div>"Spawned: "<span class="hud-value">{move || total.get().to_string()}</span></div>
            <div>"FPS: "<span class="hud-value">{move || format!("{:.0}", fps.get())}</span></div>
            <div class="hud-value">{move || status.get()}</div>
        </div>
    }
}

/// 🎨 Canvas that starts the game loop once it is mounted
#[component]
fn GameCanvas(config: GameConfig) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let canvas_id = config.canvas_id.clone();
    let (width, height) = (config.width.to_string(), config.height.to_string());
    let pending = store_value(Some(config));

    create_effect(move |_| {
        if canvas_ref.get().is_none() {
            return;
        }
        // only the first mount starts a loop
        let Some(config) = pending.try_update_value(Option::take).flatten() else {
            return;
        };
        spawn_local(async move {
            let status = loop_status();
            status.set("⏳ Loading sprites...".to_string());
            match launch(config).await {
                // the loop reschedules itself and needs no owner here
                Ok(_game_loop) => status.set("🟢 Running".to_string()),
                Err(err) => {
                    log_error!(LogComponent::Presentation("GameCanvas"), "{}", err);
                    status.set(format!("❌ {}", err));
                }
            }
        });
    });

    view! {
        <canvas id=canvas_id node_ref=canvas_ref width=width height=height />
    }
}
