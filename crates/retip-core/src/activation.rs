//! Hover-driven show/hide with a cancellable hide delay.

use crate::timer::{HideScheduler, TimerHandle};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

/// Whether the tooltip is currently shown by hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivationState {
    /// Shown
    pub is_active: bool,
}

/// Per-tooltip hover state machine.
///
/// Entering shows the tooltip immediately. Leaving schedules a hide after
/// `hide_delay`; a later enter cancels it. At most one hide is ever pending.
///
/// The owner must call [`HoverActivation::teardown`] before dropping the
/// tooltip so the host never delivers a callback for a dead instance.
#[derive(Debug)]
pub struct HoverActivation {
    state: ActivationState,
    hide_delay: Duration,
    pending_hide: Option<TimerHandle>,
    torn_down: bool,
}

impl Default for HoverActivation {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl HoverActivation {
    /// Create an inactive machine.
    #[must_use]
    pub const fn new(hide_delay: Duration) -> Self {
        Self {
            state: ActivationState { is_active: false },
            hide_delay,
            pending_hide: None,
            torn_down: false,
        }
    }

    /// Current hover state.
    #[must_use]
    pub const fn state(&self) -> ActivationState {
        self.state
    }

    /// Whether hover currently shows the tooltip.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Visibility once the parent-controlled override is layered on.
    #[must_use]
    pub const fn is_visible(&self, force_active: bool) -> bool {
        force_active || self.state.is_active
    }

    /// Handle of the hide currently waiting to fire.
    #[must_use]
    pub const fn pending_hide(&self) -> Option<TimerHandle> {
        self.pending_hide
    }

    /// Configured hide delay.
    #[must_use]
    pub const fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Change the hide delay. Applies to the next leave.
    pub fn set_hide_delay(&mut self, hide_delay: Duration) {
        self.hide_delay = hide_delay;
    }

    /// Pointer entered the anchor. Returns true if visibility changed.
    pub fn on_enter<S: HideScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.torn_down {
            return false;
        }
        self.cancel_pending(scheduler);

        let changed = !self.state.is_active;
        self.state.is_active = true;
        if changed {
            debug!("tooltip activated");
        }
        changed
    }

    /// Pointer left the anchor. Schedules the hide.
    pub fn on_leave<S: HideScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.torn_down {
            return;
        }
        self.cancel_pending(scheduler);

        let handle = scheduler.schedule(self.hide_delay);
        trace!(?handle, delay_ms = self.hide_delay.as_millis() as u64, "hide scheduled");
        self.pending_hide = Some(handle);
    }

    /// A scheduled timer fired. Returns true if visibility changed.
    ///
    /// Only the currently pending handle is honored; anything else was
    /// superseded and is ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.torn_down || self.pending_hide != Some(handle) {
            trace!(?handle, "ignoring stale hide timer");
            return false;
        }
        self.pending_hide = None;

        let changed = self.state.is_active;
        self.state.is_active = false;
        if changed {
            debug!("tooltip deactivated");
        }
        changed
    }

    /// Cancel any pending hide and stop reacting to further events.
    pub fn teardown<S: HideScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.cancel_pending(scheduler);
        self.torn_down = true;
    }

    /// Whether [`HoverActivation::teardown`] has run.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn cancel_pending<S: HideScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending_hide.take() {
            trace!(?handle, "hide cancelled");
            scheduler.cancel(handle);
        }
    }
}
