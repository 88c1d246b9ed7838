//! Per-frame simulation tick
//!
//! Advances the game state by one display frame.

use super::collision::{out_of_bounds, paddle_collision, wall_collision};
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Held keys sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.frame += 1;

    if state.phase == GamePhase::InPlay {
        physics(state, tuning);
    }

    // Player paddle responds in both phases
    if input.move_up {
        state.player.shift(-tuning.player_speed, tuning);
    }
    if input.move_down {
        state.player.shift(tuning.player_speed, tuning);
    }
}

fn physics(state: &mut GameState, tuning: &Tuning) {
    let ball = &mut state.ball;
    let prev_x = ball.pos.x;
    ball.pos += ball.vel;

    if let Some(side) = paddle_collision(ball, prev_x, &state.player, &state.opponent, tuning) {
        log::trace!("Paddle hit ({:?}) at frame {}", side, state.frame);
    }
    wall_collision(ball, tuning);

    if let Some(winner) = out_of_bounds(ball, tuning) {
        state.point_reset(winner, tuning);
        return;
    }

    track_ball(state, tuning);
}

/// Proportional opponent rule: step toward the ball when it leaves the
/// dead-zone around the paddle center.
fn track_ball(state: &mut GameState, tuning: &Tuning) {
    let center = state.opponent.center(tuning);
    let ball_y = state.ball.pos.y;
    let dead_zone = tuning.dead_zone();

    if center < ball_y - dead_zone {
        state.opponent.shift(tuning.opponent_speed, tuning);
    } else if center > ball_y + dead_zone {
        state.opponent.shift(-tuning.opponent_speed, tuning);
    }
}
