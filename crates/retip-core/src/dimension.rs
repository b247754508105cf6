//! Max-height / max-width bounds derived from the anchor and viewport.

use crate::geometry::AnchorRect;
use crate::placement::Alignment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller constraint on a tooltip's max dimension.
///
/// Serialized the way props are written: the string `"none"`, a number of
/// pixels, or any other string as a raw CSS length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawDimension", into = "RawDimension")]
pub enum DimensionConstraint {
    /// Use the bound computed from the viewport
    #[default]
    None,
    /// Clamp the computed bound to at most this many pixels
    Pixels(f32),
    /// Raw CSS length, used verbatim and never clamped
    Css(String),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f32),
    Text(String),
}

impl From<RawDimension> for DimensionConstraint {
    fn from(raw: RawDimension) -> Self {
        match raw {
            RawDimension::Number(px) => Self::Pixels(px),
            RawDimension::Text(s) if s == "none" => Self::None,
            RawDimension::Text(s) => Self::Css(s),
        }
    }
}

impl From<DimensionConstraint> for RawDimension {
    fn from(constraint: DimensionConstraint) -> Self {
        match constraint {
            DimensionConstraint::None => Self::Text("none".to_string()),
            DimensionConstraint::Pixels(px) => Self::Number(px),
            DimensionConstraint::Css(s) => Self::Text(s),
        }
    }
}

impl From<f32> for DimensionConstraint {
    fn from(px: f32) -> Self {
        Self::Pixels(px)
    }
}

impl From<u32> for DimensionConstraint {
    fn from(px: u32) -> Self {
        Self::Pixels(px as f32)
    }
}

impl From<i32> for DimensionConstraint {
    fn from(px: i32) -> Self {
        Self::Pixels(px as f32)
    }
}

impl From<&str> for DimensionConstraint {
    fn from(s: &str) -> Self {
        RawDimension::Text(s.to_string()).into()
    }
}

/// A max dimension ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolvedDimension {
    /// Pixel length
    Pixels(f32),
    /// CSS length expression
    Css(String),
}

impl ResolvedDimension {
    /// Pixel value, if this dimension is numeric.
    #[must_use]
    pub const fn as_pixels(&self) -> Option<f32> {
        match self {
            Self::Pixels(px) => Some(*px),
            Self::Css(_) => None,
        }
    }

    /// Shrink by `amount` pixels. CSS lengths become a `calc()` expression.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        match self {
            Self::Pixels(px) => Self::Pixels(px - amount),
            Self::Css(len) => Self::Css(format!("calc({len} - {amount}px)")),
        }
    }
}

impl fmt::Display for ResolvedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Css(len) => f.write_str(len),
        }
    }
}

/// Room available for the panel along the vertical axis.
///
/// Below the anchor for [`Alignment::Bottom`], above it otherwise.
#[must_use]
pub fn compute_max_height(alignment: Alignment, anchor: &AnchorRect, viewport_height: f32) -> f32 {
    match alignment {
        Alignment::Bottom => viewport_height - anchor.bottom,
        _ => anchor.top,
    }
}

/// Room available for the panel along the horizontal axis.
#[must_use]
pub fn compute_max_width(alignment: Alignment, anchor: &AnchorRect, viewport_width: f32) -> f32 {
    match alignment {
        Alignment::Left => anchor.left,
        Alignment::Right => viewport_width - anchor.right,
        Alignment::Top | Alignment::Bottom => viewport_width - anchor.left,
    }
}

/// Apply a caller constraint to a computed bound.
#[must_use]
pub fn resolve_dimension(constraint: &DimensionConstraint, computed: f32) -> ResolvedDimension {
    match constraint {
        DimensionConstraint::None => ResolvedDimension::Pixels(computed),
        DimensionConstraint::Pixels(px) => ResolvedDimension::Pixels(computed.min(*px)),
        DimensionConstraint::Css(len) => ResolvedDimension::Css(len.clone()),
    }
}

/// Max dimensions for the scrollable wrapper inside the padded panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperDimensions {
    /// Max height of the wrapper
    pub max_height: ResolvedDimension,
    /// Max width of the wrapper
    pub max_width: ResolvedDimension,
}

/// Subtract the panel padding (on both sides) from each resolved dimension.
#[must_use]
pub fn compute_wrapper_max_dimensions(
    max_height: &ResolvedDimension,
    max_width: &ResolvedDimension,
    padding: f32,
    padding_multiplier: f32,
) -> WrapperDimensions {
    let inset = padding * padding_multiplier;
    WrapperDimensions {
        max_height: max_height.shrink(inset),
        max_width: max_width.shrink(inset),
    }
}
