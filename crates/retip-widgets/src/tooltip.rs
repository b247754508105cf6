//! Tooltip widget for contextual hover information.

use crate::css::StyleRenderer;
use crate::style::{compute_style, Layout, TooltipStyle};
use retip_core::{
    normalize_offset, Alignment, AnchorRect, Color, DimensionConstraint, Event, HideScheduler,
    HoverActivation, Measure, PartialOffset, Size, TimerHandle, TooltipProps,
};
use retip_yaml::{ConfigError, TooltipConfig};
use std::time::Duration;
use tracing::debug;

/// Emitted when the tooltip's effective visibility flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipVisibilityChanged {
    /// New visibility
    pub visible: bool,
}

/// Tooltip attached to an anchor element.
///
/// Owns its hover state machine and the last measurement. The host feeds it
/// [`Event`]s together with a [`Measure`] for re-measurement and a
/// [`HideScheduler`] for the hide delay, then asks for a [`TooltipStyle`].
#[derive(Debug)]
pub struct Tooltip {
    props: TooltipProps,
    activation: HoverActivation,
    layout: Layout,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::from_props(TooltipProps::default())
    }
}

impl Tooltip {
    /// Create a new tooltip.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_props(TooltipProps {
            message: message.into(),
            ..TooltipProps::default()
        })
    }

    /// Create from fully-specified props.
    #[must_use]
    pub fn from_props(props: TooltipProps) -> Self {
        Self {
            activation: HoverActivation::new(props.hide_delay),
            props,
            layout: Layout::default(),
        }
    }

    /// Create from a loaded config entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn from_config(config: &TooltipConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_props(config.to_props()?))
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.props.message = message.into();
        self
    }

    /// Set the alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.props.alignment = alignment;
        self
    }

    /// Set background color.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.props.background_color = color;
        self
    }

    /// Set shadow color.
    #[must_use]
    pub const fn shadow_color(mut self, color: Color) -> Self {
        self.props.shadow_color = color;
        self
    }

    /// Set the hide delay.
    #[must_use]
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.props.hide_delay = delay;
        self.activation.set_hide_delay(delay);
        self
    }

    /// Force visibility from the parent.
    #[must_use]
    pub const fn active(mut self, is_active: bool) -> Self {
        self.props.is_active = is_active;
        self
    }

    /// Render the anchor container as a block.
    #[must_use]
    pub const fn block(mut self, is_block: bool) -> Self {
        self.props.is_block = is_block;
        self
    }

    /// Set max height constraint.
    #[must_use]
    pub fn max_height(mut self, constraint: impl Into<DimensionConstraint>) -> Self {
        self.props.max_height = constraint.into();
        self
    }

    /// Set max width constraint.
    #[must_use]
    pub fn max_width(mut self, constraint: impl Into<DimensionConstraint>) -> Self {
        self.props.max_width = constraint.into();
        self
    }

    /// Set the offset. Omitted sides are zero.
    #[must_use]
    pub fn offset(mut self, offset: PartialOffset) -> Self {
        self.props.offset = normalize_offset(Some(offset));
        self
    }

    /// Get the props.
    #[must_use]
    pub const fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// Parent-controlled override, changeable after construction.
    pub fn set_active(&mut self, is_active: bool) {
        self.props.is_active = is_active;
    }

    /// Get the last anchor measurement.
    #[must_use]
    pub const fn anchor(&self) -> AnchorRect {
        self.layout.anchor
    }

    /// Get the last measured viewport.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.layout.viewport
    }

    /// Whether the tooltip is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.activation.is_visible(self.props.is_active)
    }

    /// Handle of the pending hide, if any.
    #[must_use]
    pub const fn pending_hide(&self) -> Option<TimerHandle> {
        self.activation.pending_hide()
    }

    /// Take an initial measurement.
    pub fn mount<M: Measure + ?Sized>(&mut self, measure: &M) {
        self.remeasure(measure);
    }

    /// Re-read anchor, panel and viewport geometry.
    pub fn remeasure<M: Measure + ?Sized>(&mut self, measure: &M) {
        self.layout = Layout {
            anchor: measure.anchor_rect(),
            panel: measure.panel_size(),
            viewport: measure.viewport(),
        };
        debug!(
            top = self.layout.anchor.top,
            left = self.layout.anchor.left,
            viewport_width = self.layout.viewport.width,
            viewport_height = self.layout.viewport.height,
            "tooltip measured"
        );
    }

    /// Handle a host event.
    pub fn event<M, S>(
        &mut self,
        event: &Event,
        measure: &M,
        scheduler: &mut S,
    ) -> Option<TooltipVisibilityChanged>
    where
        M: Measure + ?Sized,
        S: HideScheduler + ?Sized,
    {
        let was_visible = self.is_visible();

        match event {
            Event::MouseEnter => {
                self.activation.on_enter(scheduler);
            }
            Event::MouseLeave => self.activation.on_leave(scheduler),
            Event::Timer(handle) => {
                self.activation.on_timer(*handle);
            }
            Event::Resize { .. } => {
                self.remeasure(measure);
                // the host may report the new size before layout settles
                if let Some(viewport) = event.viewport() {
                    self.layout.viewport = viewport;
                }
            }
        }

        let visible = self.is_visible();
        (visible != was_visible).then_some(TooltipVisibilityChanged { visible })
    }

    /// Cancel any pending hide. Call before dropping the tooltip.
    pub fn teardown<S: HideScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.activation.teardown(scheduler);
        debug!("tooltip torn down");
    }

    /// Compute the current style.
    #[must_use]
    pub fn style(&self) -> TooltipStyle {
        compute_style(&self.props, &self.layout, self.is_visible())
    }

    /// Hand the current style to a renderer.
    pub fn render<R: StyleRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retip_core::{ManualScheduler, ResolvedDimension, StaticMeasure};

    fn measure() -> StaticMeasure {
        StaticMeasure {
            anchor: AnchorRect::from_edges(100.0, 150.0, 120.0, 50.0),
            panel: Size::new(200.0, 60.0),
            viewport: Size::new(1280.0, 800.0),
        }
    }

    #[test]
    fn test_tooltip_new() {
        let t = Tooltip::new("Help text");
        assert_eq!(t.props().message, "Help text");
        assert_eq!(t.props().alignment, Alignment::Top);
        assert!(!t.is_visible());
    }

    #[test]
    fn test_tooltip_builder() {
        let t = Tooltip::new("m")
            .alignment(Alignment::Left)
            .background_color(Color::WHITE)
            .shadow_color(Color::BLACK)
            .hide_delay(Duration::from_millis(300))
            .block(true)
            .max_height(120.0_f32)
            .max_width("40vw")
            .offset(PartialOffset::top(8.0));

        let p = t.props();
        assert_eq!(p.alignment, Alignment::Left);
        assert_eq!(p.background_color, Color::WHITE);
        assert_eq!(p.shadow_color, Color::BLACK);
        assert_eq!(p.hide_delay, Duration::from_millis(300));
        assert!(p.is_block);
        assert_eq!(p.max_height, DimensionConstraint::Pixels(120.0));
        assert_eq!(p.max_width, DimensionConstraint::Css("40vw".into()));
        assert_eq!(p.offset.top, 8.0);
        assert_eq!(p.offset.left, 0.0);
    }

    #[test]
    fn test_tooltip_max_dimension_integer_pixels() {
        let t = Tooltip::new("m").max_height(100).max_width(250_u32);
        assert_eq!(t.props().max_height, DimensionConstraint::Pixels(100.0));
        assert_eq!(t.props().max_width, DimensionConstraint::Pixels(250.0));
    }

    #[test]
    fn test_tooltip_max_dimension_none() {
        let t = Tooltip::new("m").max_height("none");
        assert_eq!(t.props().max_height, DimensionConstraint::None);
    }

    #[test]
    fn test_tooltip_active_override() {
        let mut t = Tooltip::new("m").active(true);
        assert!(t.is_visible());
        t.set_active(false);
        assert!(!t.is_visible());
    }

    #[test]
    fn test_tooltip_enter_leave() {
        let m = measure();
        let mut s = ManualScheduler::new();
        let mut t = Tooltip::new("m");
        t.mount(&m);

        assert_eq!(
            t.event(&Event::MouseEnter, &m, &mut s),
            Some(TooltipVisibilityChanged { visible: true })
        );
        assert_eq!(t.event(&Event::MouseLeave, &m, &mut s), None);
        assert!(t.is_visible());

        let due = s.advance(Duration::ZERO);
        assert_eq!(due.len(), 1);
        assert_eq!(
            t.event(&Event::Timer(due[0]), &m, &mut s),
            Some(TooltipVisibilityChanged { visible: false })
        );
    }

    #[test]
    fn test_tooltip_override_masks_hover_changes() {
        let m = measure();
        let mut s = ManualScheduler::new();
        let mut t = Tooltip::new("m").active(true);
        assert_eq!(t.event(&Event::MouseEnter, &m, &mut s), None);
        assert!(t.is_visible());
    }

    #[test]
    fn test_tooltip_resize_remeasures() {
        let mut m = measure();
        let mut s = ManualScheduler::new();
        let mut t = Tooltip::new("m").alignment(Alignment::Bottom);
        t.mount(&m);
        assert_eq!(t.style().max_height, ResolvedDimension::Pixels(680.0));

        m.anchor = AnchorRect::from_edges(200.0, 150.0, 220.0, 50.0);
        let event = Event::Resize {
            width: 1280.0,
            height: 600.0,
        };
        assert_eq!(t.event(&event, &m, &mut s), None);
        assert_eq!(t.anchor().top, 200.0);
        assert_eq!(t.viewport().height, 600.0);
        assert_eq!(t.style().max_height, ResolvedDimension::Pixels(380.0));
    }

    #[test]
    fn test_tooltip_teardown() {
        let m = measure();
        let mut s = ManualScheduler::new();
        let mut t = Tooltip::new("m").hide_delay(Duration::from_millis(100));
        t.event(&Event::MouseEnter, &m, &mut s);
        t.event(&Event::MouseLeave, &m, &mut s);
        assert!(t.pending_hide().is_some());

        t.teardown(&mut s);
        assert!(t.pending_hide().is_none());
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_tooltip_from_config() {
        let config = TooltipConfig {
            alignment: Alignment::Right,
            hide_delay: 1000,
            message: "from yaml".to_string(),
            ..TooltipConfig::default()
        };
        let t = Tooltip::from_config(&config).unwrap();
        assert_eq!(t.props().alignment, Alignment::Right);
        assert_eq!(t.props().hide_delay, Duration::from_millis(1000));

        assert!(Tooltip::from_config(&TooltipConfig::default()).is_err());
    }
}
