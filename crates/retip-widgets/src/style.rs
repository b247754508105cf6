//! Style payload combining placement and activation.

use retip_core::{
    compute_contrast_color, compute_max_height, compute_max_width, compute_panel_position,
    compute_shadow_color, compute_triangle_position, compute_wrapper_max_dimensions,
    props::{
        BACKGROUND_COLOR, CONTAINER_PADDING, CONTAINER_PADDING_MULTIPLIER, INVERSE_COLOR,
        TRIANGLE_FADE,
    },
    resolve_dimension, AnchorRect, Color, PanelPosition, Rect, ResolvedDimension, Size,
    TooltipProps, TrianglePosition, WrapperDimensions,
};
use serde::{Deserialize, Serialize};

/// Display mode of the element wrapping the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainerDisplay {
    /// Flows inline with surrounding content
    #[default]
    InlineBlock,
    /// Takes the full line
    Block,
}

impl ContainerDisplay {
    /// CSS `display` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::InlineBlock => "inline-block",
            Self::Block => "block",
        }
    }
}

impl From<bool> for ContainerDisplay {
    fn from(is_block: bool) -> Self {
        if is_block {
            Self::Block
        } else {
            Self::InlineBlock
        }
    }
}

/// Everything a renderer needs to draw one tooltip frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    /// Anchor container display
    pub display: ContainerDisplay,
    /// Whether the panel is shown
    pub visible: bool,
    /// Fixed-position placement of the panel
    pub panel: PanelPosition,
    /// On-screen panel rectangle for the measured panel size
    pub panel_bounds: Rect,
    /// Panel max height
    pub max_height: ResolvedDimension,
    /// Panel max width
    pub max_width: ResolvedDimension,
    /// Inner wrapper max dimensions
    pub wrapper: WrapperDimensions,
    /// Body fill
    pub background_color: Color,
    /// Body text
    pub text_color: Color,
    /// Wrapper shadow
    pub shadow_color: Color,
    /// Pointer triangle placement
    pub triangle: TrianglePosition,
    /// Pointer triangle shadow
    pub triangle_shadow_color: Color,
}

/// Measured inputs for [`compute_style`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Anchor bounds
    pub anchor: AnchorRect,
    /// Rendered panel size
    pub panel: Size,
    /// Viewport size
    pub viewport: Size,
}

/// Compute the full style for the given props, measurement and visibility.
#[must_use]
pub fn compute_style(props: &TooltipProps, layout: &Layout, visible: bool) -> TooltipStyle {
    let alignment = props.alignment;

    let max_height = resolve_dimension(
        &props.max_height,
        compute_max_height(alignment, &layout.anchor, layout.viewport.height),
    );
    let max_width = resolve_dimension(
        &props.max_width,
        compute_max_width(alignment, &layout.anchor, layout.viewport.width),
    );
    let wrapper = compute_wrapper_max_dimensions(
        &max_height,
        &max_width,
        CONTAINER_PADDING,
        CONTAINER_PADDING_MULTIPLIER,
    );
    let panel = compute_panel_position(alignment, &layout.anchor, &props.offset);

    TooltipStyle {
        display: props.is_block.into(),
        visible,
        panel,
        panel_bounds: panel.bounds(layout.panel),
        max_height,
        max_width,
        wrapper,
        background_color: props.background_color,
        text_color: compute_contrast_color(props.background_color, INVERSE_COLOR, BACKGROUND_COLOR),
        shadow_color: props.shadow_color,
        triangle: compute_triangle_position(alignment),
        triangle_shadow_color: compute_shadow_color(props.shadow_color, TRIANGLE_FADE),
    }
}
