//! Platform abstraction layer
//!
//! The game loop is written against three host collaborators:
//! - `RenderSurface` (see `renderer`) for drawing
//! - `FrameScheduler` for display refresh callbacks
//! - `InputSource` for keyboard event delivery
//!
//! `web` binds them to the browser; `headless` drives them by hand for the
//! native binary and tests.

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::input::InputState;
use crate::renderer::{RenderSurface, draw_frame};
use crate::sim::{GameState, tick};
use crate::tuning::Tuning;

/// Host hook that calls `GameLoop::on_frame` before the next repaint
pub trait FrameScheduler {
    /// Ask for one callback before the next repaint
    fn request_frame(&mut self);
    /// Drop the pending callback, if any
    fn cancel_frame(&mut self);
}

/// Host keyboard subscription feeding `GameLoop::key_down`/`key_up`
pub trait InputSource {
    /// Stop delivering key events
    fn detach(&mut self);
}

/// Lifecycle of a `GameLoop`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    /// Built, first frame not yet requested
    Ready,
    /// Re-requests a frame at the end of every frame
    Running,
    /// Torn down; frames and keys are ignored
    Stopped,
}

/// Owns the game state and its collaborators and runs one frame per
/// scheduler callback. Dropping it tears it down like `stop`.
pub struct GameLoop<R: RenderSurface, F: FrameScheduler, I: InputSource> {
    state: GameState,
    tuning: Tuning,
    input: InputState,
    surface: R,
    scheduler: F,
    source: I,
    status: LoopStatus,
}

impl<R, F, I> GameLoop<R, F, I>
where
    R: RenderSurface,
    F: FrameScheduler,
    I: InputSource,
{
    /// Build a loop around an optional surface. Without a surface there is
    /// nothing to draw on, so no loop is built and nothing is scheduled.
    pub fn new(
        tuning: Tuning,
        seed: u64,
        surface: Option<R>,
        scheduler: F,
        source: I,
    ) -> Option<Self> {
        let Some(surface) = surface else {
            log::warn!("No drawing surface; game loop not started");
            return None;
        };
        Some(Self {
            state: GameState::new(seed, &tuning),
            tuning,
            input: InputState::default(),
            surface,
            scheduler,
            source,
            status: LoopStatus::Ready,
        })
    }

    /// Request the first frame
    pub fn start(&mut self) {
        if self.status != LoopStatus::Ready {
            return;
        }
        self.status = LoopStatus::Running;
        self.scheduler.request_frame();
        log::info!("Game loop started (seed {})", self.state.seed);
    }

    /// Cancel the pending frame and detach input. Safe to call at any point,
    /// including before `start`, and more than once.
    pub fn stop(&mut self) {
        if self.status == LoopStatus::Stopped {
            return;
        }
        self.status = LoopStatus::Stopped;
        self.scheduler.cancel_frame();
        self.source.detach();
        log::info!(
            "Game loop stopped after {} frames ({} - {})",
            self.state.frame,
            self.state.score.player,
            self.state.score.opponent
        );
    }

    /// One display refresh: draw, advance, then re-arm the scheduler
    pub fn on_frame(&mut self) {
        if self.status != LoopStatus::Running {
            return;
        }
        draw_frame(&self.state, &self.tuning, &mut self.surface);
        tick(&mut self.state, &self.input.sample(), &self.tuning);
        self.scheduler.request_frame();
    }

    pub fn key_down(&mut self, key: &str) {
        if self.status == LoopStatus::Stopped {
            return;
        }
        let Some(key) = self.tuning.keys.resolve(key) else {
            return;
        };
        if self.input.key_down(key) {
            self.state.serve(&self.tuning);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if self.status == LoopStatus::Stopped {
            return;
        }
        if let Some(key) = self.tuning.keys.resolve(key) {
            self.input.key_up(key);
        }
    }

    /// Forget every held key, e.g. when the window loses focus and the
    /// matching key-ups will never arrive
    pub fn release_keys(&mut self) {
        if self.status == LoopStatus::Stopped {
            return;
        }
        if self.input != InputState::default() {
            log::debug!("Released held keys");
        }
        self.input.release_all();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn source(&self) -> &I {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut I {
        &mut self.source
    }
}

impl<R, F, I> Drop for GameLoop<R, F, I>
where
    R: RenderSurface,
    F: FrameScheduler,
    I: InputSource,
{
    fn drop(&mut self) {
        self.stop();
    }
}
