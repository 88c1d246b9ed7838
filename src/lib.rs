//! Canvas Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `input`: Keyboard mapping to logical game keys
//! - `renderer`: Draw calls against a 2D surface
//! - `platform`: Frame loop driver and browser glue
//! - `tuning`: Data-driven game geometry and speeds

pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::{InputState, Key, KeyBindings};
pub use platform::{FrameScheduler, GameLoop, InputSource, LoopStatus};
pub use renderer::{DrawCommand, RecordingSurface, RenderSurface, draw_frame};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 300.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball displacement per frame once served
    pub const BALL_SPEED: f32 = 0.02;

    /// Player paddle step per frame while a move key is held
    pub const PLAYER_SPEED: f32 = 0.1;
    /// Opponent paddle step per frame while tracking
    pub const OPPONENT_SPEED: f32 = 1.0;
    /// Subtracted from half the paddle height to get the tracking dead-zone
    pub const TRACKING_MARGIN: f32 = 0.0;

    /// Score text baseline and font
    pub const SCORE_BASELINE: f32 = 30.0;
    pub const SCORE_FONT: &str = "24px Arial";
}
