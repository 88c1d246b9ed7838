//! 2D rendering
//!
//! The game draws with four primitives only. Hosts implement `RenderSurface`
//! over whatever canvas they have; tests use `RecordingSurface`.

pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use recording::{DrawCommand, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;

use crate::consts::SCORE_BASELINE;
use crate::sim::GameState;
use crate::tuning::Tuning;

/// Drawing primitives the game needs from a host canvas
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Filled circle around (`cx`, `cy`)
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);
    /// Text with its baseline-left corner at (`x`, `y`)
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Issue one frame of draw calls. Reads the state, never mutates it.
pub fn draw_frame<S: RenderSurface + ?Sized>(state: &GameState, tuning: &Tuning, surface: &mut S) {
    let w = tuning.canvas_width;
    let h = tuning.canvas_height;

    surface.clear_rect(0.0, 0.0, w, h);

    surface.fill_rect(0.0, state.player.y, tuning.paddle_width, tuning.paddle_height);
    surface.fill_rect(
        tuning.opponent_x(),
        state.opponent.y,
        tuning.paddle_width,
        tuning.paddle_height,
    );

    surface.fill_circle(state.ball.pos.x, state.ball.pos.y, tuning.ball_radius);

    surface.fill_text(&state.score.player.to_string(), w / 4.0, SCORE_BASELINE);
    surface.fill_text(&state.score.opponent.to_string(), 3.0 * w / 4.0, SCORE_BASELINE);
}
