//! Collision detection and response
//!
//! All tests run against the ball position after it has been advanced for the
//! current frame; paddle tests also look at where the center started the
//! frame so a fast ball cannot skip over a face. Responses only ever negate one velocity component and snap
//! the ball back to the surface it crossed, so speed is conserved.

use super::state::{Ball, Paddle, Side};
use crate::tuning::Tuning;

/// Reflect the ball off whichever paddle face it overlaps.
///
/// `prev_x` is the ball center before this frame's advance. The vertical test
/// uses the ball center only: a ball clipping a paddle corner with its rim is
/// not a hit. A ball moving away from a paddle, or whose center was already
/// behind its face, is left alone.
pub fn paddle_collision(
    ball: &mut Ball,
    prev_x: f32,
    player: &Paddle,
    opponent: &Paddle,
    tuning: &Tuning,
) -> Option<Side> {
    let r = tuning.ball_radius;

    let face = tuning.paddle_width;
    if ball.vel.x < 0.0
        && ball.pos.x - r < face
        && prev_x >= face
        && player.spans(ball.pos.y, tuning)
    {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = face + r;
        return Some(Side::Player);
    }

    let face = tuning.opponent_x();
    if ball.vel.x > 0.0
        && ball.pos.x + r > face
        && prev_x <= face
        && opponent.spans(ball.pos.y, tuning)
    {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = face - r;
        return Some(Side::Opponent);
    }

    None
}

/// Bounce off the top or bottom wall. Returns true on a bounce.
pub fn wall_collision(ball: &mut Ball, tuning: &Tuning) -> bool {
    let r = tuning.ball_radius;
    let bottom = tuning.canvas_height - r;

    if ball.pos.y < r {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        true
    } else if ball.pos.y > bottom {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = bottom;
        true
    } else {
        false
    }
}

/// Side that wins the point once the ball has fully left the canvas
pub fn out_of_bounds(ball: &Ball, tuning: &Tuning) -> Option<Side> {
    let r = tuning.ball_radius;
    if ball.pos.x - r > tuning.canvas_width {
        Some(Side::Player)
    } else if ball.pos.x + r < 0.0 {
        Some(Side::Opponent)
    } else {
        None
    }
}
