//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{out_of_bounds, paddle_collision, wall_collision};
pub use state::{Ball, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
