//! Wall Pong entry point
//!
//! On the web this starts the canvas game; natively it runs a headless game
//! and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wall_pong::platform::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wall_pong::Tuning;
    use wall_pong::platform::{Autopilot, run_headless};
    use wall_pong::sim::Field;

    env_logger::init();
    log::info!("Wall Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let frames = std::env::var("WALL_PONG_FRAMES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    let tuning = match std::env::var("WALL_PONG_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring WALL_PONG_TUNING: {e}");
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let summary = run_headless(
        Field::default(),
        tuning,
        frames,
        Autopilot::Chase { offset: 12.0 },
    );
    println!(
        "{} frames, {} ticks: {} paddle hits, {} wall hits ({} left, {} right, {} top), {} misses",
        summary.frames,
        summary.ticks,
        summary.paddle_hits,
        summary.left_hits + summary.right_hits + summary.top_hits,
        summary.left_hits,
        summary.right_hits,
        summary.top_hits,
        summary.misses
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
