//! Scheduler port: cancelable timers.
//!
//! The scheduler never calls back into components directly. When a timer
//! elapses, the host delivers its [`TimerId`] to
//! [`Dashboard::fire`](crate::dashboard::Dashboard::fire).

use std::time::Duration;

/// Handle of a scheduled timer, unique for the lifetime of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Arms and cancels timers.
pub trait Scheduler {
    /// Fire once after `delay`. A zero delay means "next frame".
    fn once(&self, delay: Duration) -> TimerId;

    /// Fire every `period` until cancelled.
    fn every(&self, period: Duration) -> TimerId;

    /// Cancel `id`. Cancelling an elapsed or unknown timer is a no-op.
    fn cancel(&self, id: TimerId);
}
