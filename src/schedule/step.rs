use crate::schedule::scheduler::{FrameHandle, FrameScheduler};

/// Refresh simulator for offline rendering and tests.
///
/// Requested handles queue up until the next [`StepScheduler::tick`], which fires each live handle
/// exactly once. Handles requested while a tick is being dispatched wait for the following tick.
#[derive(Debug, Default)]
pub struct StepScheduler {
    next_id: u64,
    queued: Vec<FrameHandle>,
    ticks: u64,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one refresh and return the handles due on it, in request order.
    pub fn tick(&mut self) -> Vec<FrameHandle> {
        self.ticks += 1;
        std::mem::take(&mut self.queued)
    }

    pub fn pending(&self) -> &[FrameHandle] {
        &self.queued
    }

    pub fn is_idle(&self) -> bool {
        self.queued.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl FrameScheduler for StepScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queued.retain(|h| *h != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/step.rs"]
mod tests;
