//! Core types for Retip tooltips.
//!
//! This crate provides the data-producing half of a tooltip:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`AnchorRect`]
//! - Placement engine: [`compute_panel_position`], [`compute_triangle_position`],
//!   [`compute_max_height`], [`compute_max_width`], [`resolve_dimension`]
//! - Colors: [`Color`] parsing, fading and contrast selection
//! - Hover activation: [`HoverActivation`] over a host [`HideScheduler`]
//!
//! Nothing here touches a rendering surface. A renderer consumes the values.

mod activation;
mod color;
mod dimension;
mod event;
mod geometry;
mod measure;
mod offset;
mod placement;
pub mod props;
mod timer;

pub use activation::{ActivationState, HoverActivation};
pub use color::{Color, ColorParseError};
pub use dimension::{
    compute_max_height, compute_max_width, compute_wrapper_max_dimensions, resolve_dimension,
    DimensionConstraint, ResolvedDimension, WrapperDimensions,
};
pub use event::Event;
pub use geometry::{AnchorRect, Point, Rect, Size};
pub use measure::{Measure, StaticMeasure};
pub use offset::{normalize_offset, Offset, PartialOffset};
pub use placement::{
    compute_contrast_color, compute_panel_position, compute_shadow_color,
    compute_triangle_position, Alignment, Edge, Length, PanelPosition, PanelTransform,
    TrianglePosition,
};
pub use props::TooltipProps;
pub use timer::{HideScheduler, ManualScheduler, TimerHandle};
