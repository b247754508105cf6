//! Measurement seam between the host layout engine and the tooltip.

use crate::geometry::{AnchorRect, Size};

/// Host-side measurement of the rendered tooltip.
///
/// Implementations read live layout; the tooltip calls them on mount and
/// again after every viewport resize.
pub trait Measure {
    /// Current viewport-relative bounds of the anchor.
    fn anchor_rect(&self) -> AnchorRect;

    /// Rendered size of the tooltip panel.
    fn panel_size(&self) -> Size;

    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// A fixed snapshot, for hosts that measure up front and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticMeasure {
    /// Anchor bounds
    pub anchor: AnchorRect,
    /// Panel size
    pub panel: Size,
    /// Viewport size
    pub viewport: Size,
}

impl Measure for StaticMeasure {
    fn anchor_rect(&self) -> AnchorRect {
        self.anchor
    }

    fn panel_size(&self) -> Size {
        self.panel
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
