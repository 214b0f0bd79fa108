use std::collections::VecDeque;

/// Handle for one outstanding next-frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequestId(pub u64);

/// The host's display-refresh primitive: ask for one callback before the next repaint, or
/// withdraw that ask.
///
/// A request fires at most once. After `cancel(id)` the host must never deliver `id`.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId;

    fn cancel(&mut self, id: FrameRequestId);
}

/// Scheduler for headless hosts and tests: requests queue up until the host drains them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameRequestId>,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every request due at the next refresh, oldest first.
    pub fn take_due(&mut self) -> Vec<FrameRequestId> {
        self.pending.drain(..).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.pending.push_back(id);
        id
    }

    fn cancel(&mut self, id: FrameRequestId) {
        let before = self.pending.len();
        self.pending.retain(|&p| p != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
