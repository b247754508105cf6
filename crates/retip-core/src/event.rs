//! Input events a tooltip reacts to.

use crate::geometry::Size;
use crate::timer::TimerHandle;

/// Events delivered by the host to a tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer entered the anchor bounds
    MouseEnter,
    /// Pointer left the anchor bounds
    MouseLeave,
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    /// A timer scheduled through a [`crate::HideScheduler`] fired
    Timer(TimerHandle),
}

impl Event {
    /// Viewport size carried by a resize event.
    #[must_use]
    pub const fn viewport(&self) -> Option<Size> {
        match self {
            Self::Resize { width, height } => Some(Size::new(*width, *height)),
            _ => None,
        }
    }
}
