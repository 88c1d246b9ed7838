//! Game state and core simulation types
//!
//! Everything a frame needs lives in one `GameState`, owned by the game loop
//! and mutated in place by `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball parked, waiting for a serve
    Idle,
    /// Rally in progress
    InPlay,
}

/// Which side a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Keyboard-driven paddle on the left edge
    Player,
    /// Tracking paddle on the right edge
    Opponent,
}

/// A paddle. Only the top edge moves; width, height and x come from tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered on the canvas
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            y: tuning.canvas_height / 2.0 - tuning.paddle_height / 2.0,
        }
    }

    #[inline]
    pub fn center(&self, tuning: &Tuning) -> f32 {
        self.y + tuning.paddle_height / 2.0
    }

    /// Whether `y` falls in the paddle's vertical span `[top, top + height)`
    #[inline]
    pub fn spans(&self, y: f32, tuning: &Tuning) -> bool {
        y >= self.y && y < self.y + tuning.paddle_height
    }

    /// Move by `delta`, clamped to the canvas
    pub fn shift(&mut self, delta: f32, tuning: &Tuning) {
        self.y = tuning.clamp_paddle_y(self.y + delta);
    }
}

/// The ball. `vel` is displacement per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Parked at the canvas center
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.canvas_width / 2.0, tuning.canvas_height / 2.0),
            vel: Vec2::ZERO,
        }
    }
}

/// Points won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.opponent
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve direction and reset position source
    rng: Pcg32,
    /// Frames ticked since start
    pub frame: u64,
    pub phase: GamePhase,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            phase: GamePhase::Idle,
            player: Paddle::centered(tuning),
            opponent: Paddle::centered(tuning),
            ball: Ball::centered(tuning),
            score: Score::default(),
        }
    }

    /// Launch the ball diagonally with independently random signs.
    /// Returns false (and changes nothing) unless the ball is parked.
    pub fn serve(&mut self, tuning: &Tuning) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        let dx = if self.rng.random_bool(0.5) {
            tuning.ball_speed
        } else {
            -tuning.ball_speed
        };
        let dy = if self.rng.random_bool(0.5) {
            tuning.ball_speed
        } else {
            -tuning.ball_speed
        };
        self.ball.vel = Vec2::new(dx, dy);
        self.phase = GamePhase::InPlay;
        log::info!("Serve at frame {}: vel=({}, {})", self.frame, dx, dy);
        true
    }

    /// Credit `winner` and park the ball at a fresh random height
    pub fn point_reset(&mut self, winner: Side, tuning: &Tuning) {
        self.score.award(winner);
        let r = tuning.ball_radius;
        let y = self.rng.random_range(r..=tuning.canvas_height - r);
        self.ball = Ball {
            pos: Vec2::new(tuning.canvas_width / 2.0, y),
            vel: Vec2::ZERO,
        };
        self.phase = GamePhase::Idle;
        log::debug!(
            "Point to {:?} ({} - {})",
            winner,
            self.score.player,
            self.score.opponent
        );
    }

    /// The state one frame later, leaving `self` untouched
    pub fn next(&self, input: &TickInput, tuning: &Tuning) -> Self {
        let mut next = self.clone();
        tick(&mut next, input, tuning);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tuning = Tuning::default();
        let state = GameState::new(7, &tuning);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.y, 215.0);
        assert_eq!(state.opponent.y, 215.0);
        assert_eq!(state.ball.pos, Vec2::new(150.0, 250.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_serve_sets_diagonal_velocity() {
        let tuning = Tuning::default();
        let mut state = GameState::new(42, &tuning);
        assert!(state.serve(&tuning));
        assert_eq!(state.phase, GamePhase::InPlay);
        assert_eq!(state.ball.vel.x.abs(), tuning.ball_speed);
        assert_eq!(state.ball.vel.y.abs(), tuning.ball_speed);
    }

    #[test]
    fn test_serve_ignored_in_play() {
        let tuning = Tuning::default();
        let mut state = GameState::new(42, &tuning);
        state.serve(&tuning);
        let vel = state.ball.vel;
        for _ in 0..10 {
            assert!(!state.serve(&tuning));
        }
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_serve_covers_all_directions() {
        let tuning = Tuning::default();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut state = GameState::new(seed, &tuning);
            state.serve(&tuning);
            seen.insert((state.ball.vel.x > 0.0, state.ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let tuning = Tuning::default();
        let mut a = GameState::new(99, &tuning);
        let mut b = GameState::new(99, &tuning);
        a.serve(&tuning);
        b.serve(&tuning);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_point_reset() {
        let tuning = Tuning::default();
        let mut state = GameState::new(3, &tuning);
        state.serve(&tuning);
        state.ball.pos = Vec2::new(-20.0, 100.0);

        state.point_reset(Side::Opponent, &tuning);
        assert_eq!(state.score, Score { player: 0, opponent: 1 });
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ball.pos.x, 150.0);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(state.ball.pos.y >= 10.0 && state.ball.pos.y <= 490.0);
    }

    #[test]
    fn test_paddle_span_is_half_open() {
        let tuning = Tuning::default();
        let paddle = Paddle { y: 100.0 };
        assert!(paddle.spans(100.0, &tuning));
        assert!(paddle.spans(169.9, &tuning));
        assert!(!paddle.spans(170.0, &tuning));
        assert!(!paddle.spans(99.9, &tuning));
        assert_eq!(paddle.center(&tuning), 135.0);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let tuning = Tuning::default();
        let mut paddle = Paddle { y: 5.0 };
        paddle.shift(-10.0, &tuning);
        assert_eq!(paddle.y, 0.0);
        paddle.shift(1000.0, &tuning);
        assert_eq!(paddle.y, 430.0);
    }

    #[test]
    fn test_next_leaves_previous_untouched() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        state.serve(&tuning);
        let before = state.ball.pos;
        let next = state.next(&TickInput::default(), &tuning);
        assert_eq!(state.ball.pos, before);
        assert_eq!(next.ball.pos, before + state.ball.vel);
        assert_eq!(next.frame, state.frame + 1);
    }
}
