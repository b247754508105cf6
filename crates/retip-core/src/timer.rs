//! Hide-delay scheduling.
//!
//! The host event loop owns real time. A [`HideScheduler`] registers a
//! one-shot callback and later reports the [`TimerHandle`] back to the
//! tooltip when it fires.

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque identifier of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// Host-provided one-shot timer service.
pub trait HideScheduler {
    /// Schedule a callback `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a previously scheduled callback. Unknown or already-fired
    /// handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Used by hosts that tick on their own frame loop and by tests.
///
/// ```
/// use retip_core::{HideScheduler, ManualScheduler};
/// use std::time::Duration;
///
/// let mut scheduler = ManualScheduler::new();
/// let handle = scheduler.schedule(Duration::from_millis(100));
/// assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![handle]);
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    deadlines: BTreeMap<TimerHandle, Duration>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Move the clock forward and return every timer now due, in deadline
    /// order (ties broken by scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.now += by;

        let mut due: Vec<(Duration, TimerHandle)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= self.now)
            .map(|(handle, deadline)| (*deadline, *handle))
            .collect();
        due.sort_unstable();

        for (_, handle) in &due {
            self.deadlines.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl HideScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.deadlines.insert(handle, self.now + delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.remove(&handle);
    }
}
