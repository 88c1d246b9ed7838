//! Hand-driven collaborators for running the loop without a browser

use super::{FrameScheduler, InputSource};

/// Scheduler whose single pending callback is fired by the caller
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: bool,
    /// Total `request_frame` calls
    pub requests: u64,
    /// `cancel_frame` calls that dropped a pending frame
    pub cancels: u64,
}

impl ManualScheduler {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending frame. Returns false if none was requested.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn cancel_frame(&mut self) {
        if self.take() {
            self.cancels += 1;
        }
    }
}

/// Input source with no real subscription; the caller feeds keys directly
#[derive(Debug, Clone, Default)]
pub struct KeyFeed {
    /// Number of `detach` calls
    pub detaches: u32,
}

impl KeyFeed {
    pub fn is_detached(&self) -> bool {
        self.detaches > 0
    }
}

impl InputSource for KeyFeed {
    fn detach(&mut self) {
        self.detaches += 1;
    }
}
