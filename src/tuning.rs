//! Data-driven game geometry and speeds
//!
//! Defaults mirror `consts`. Overrides arrive as JSON (on the web, from the
//! canvas element's `data-tuning` attribute) and are validated before use so
//! that every clamp in the simulation has a non-empty range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::input::KeyBindings;

/// Reasons a tuning override is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit a canvas {canvas} tall")]
    PaddleTooTall { paddle: f32, canvas: f32 },
    #[error("ball radius {radius} does not fit a canvas {canvas} tall")]
    BallTooLarge { radius: f32, canvas: f32 },
    #[error("paddles {paddle} wide overlap on a canvas {canvas} wide")]
    PaddlesOverlap { paddle: f32, canvas: f32 },
    #[error("tracking margin {margin} must be within 0..={max}")]
    MarginOutOfRange { margin: f32, max: f32 },
}

/// Game tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub tracking_margin: f32,
    pub keys: KeyBindings,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            player_speed: PLAYER_SPEED,
            opponent_speed: OPPONENT_SPEED,
            tracking_margin: TRACKING_MARGIN,
            keys: KeyBindings::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse an optional override, falling back to defaults when it is
    /// absent or rejected.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(tuning)) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.paddle_height > self.canvas_height {
            return Err(TuningError::PaddleTooTall {
                paddle: self.paddle_height,
                canvas: self.canvas_height,
            });
        }
        if self.ball_radius * 2.0 > self.canvas_height {
            return Err(TuningError::BallTooLarge {
                radius: self.ball_radius,
                canvas: self.canvas_height,
            });
        }
        if self.paddle_width * 2.0 > self.canvas_width {
            return Err(TuningError::PaddlesOverlap {
                paddle: self.paddle_width,
                canvas: self.canvas_width,
            });
        }

        let max_margin = self.paddle_height / 2.0;
        if !(0.0..=max_margin).contains(&self.tracking_margin) {
            return Err(TuningError::MarginOutOfRange {
                margin: self.tracking_margin,
                max: max_margin,
            });
        }
        Ok(())
    }

    /// Lowest allowed paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.canvas_height - self.paddle_height
    }

    /// Left edge of the opponent paddle
    #[inline]
    pub fn opponent_x(&self) -> f32 {
        self.canvas_width - self.paddle_width
    }

    /// Distance from the ball within which the opponent holds still
    #[inline]
    pub fn dead_zone(&self) -> f32 {
        self.paddle_height / 2.0 - self.tracking_margin
    }

    /// Clamp a paddle top edge to the canvas
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }
}
