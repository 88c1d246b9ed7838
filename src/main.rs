//! Canvas Pong entry point
//!
//! On the web the game is started on `#canvas`. Natively there is no window:
//! the binary runs a seeded headless attract mode and logs the points.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    match canvas_pong::platform::web::start_pong("canvas") {
        // The page owns the game for its whole lifetime
        Some(handle) => std::mem::forget(handle),
        None => log::warn!("Canvas Pong could not start"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::GameLoop;
    use canvas_pong::platform::headless::{KeyFeed, ManualScheduler};
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::sim::GamePhase;
    use canvas_pong::tuning::Tuning;

    /// Frames to simulate (about five minutes at 60 Hz)
    const FRAMES: u64 = 5 * 60 * 60;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);
    // Faster ball so rallies finish within the run
    let tuning = Tuning {
        ball_speed: 2.0,
        ..Default::default()
    };
    let serve_key = tuning.keys.serve.clone();

    let Some(mut game) = GameLoop::new(
        tuning,
        seed,
        Some(RecordingSurface::default()),
        ManualScheduler::default(),
        KeyFeed::default(),
    ) else {
        return;
    };
    game.start();

    let mut points = 0;
    while game.scheduler_mut().take() && game.state().frame < FRAMES {
        if game.state().phase == GamePhase::Idle {
            game.key_down(&serve_key);
            game.key_up(&serve_key);
        }
        game.on_frame();

        let score = game.state().score;
        if score.total() != points {
            points = score.total();
            log::info!(
                "Frame {}: player {} - opponent {}",
                game.state().frame,
                score.player,
                score.opponent
            );
        }
    }
    game.stop();

    let score = game.state().score;
    println!(
        "Final score after {} frames (seed {}): player {} - opponent {}",
        game.state().frame,
        seed,
        score.player,
        score.opponent
    );
}
