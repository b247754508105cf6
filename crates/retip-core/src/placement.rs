//! Panel and pointer-triangle placement.
//!
//! Every function here is pure: the same alignment, anchor and offset always
//! produce the same geometry, so callers can recompute after any resize
//! without cache invalidation.

use crate::color::Color;
use crate::geometry::{AnchorRect, Point, Rect, Size};
use crate::offset::Offset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the anchor the tooltip panel appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Above the anchor
    #[default]
    Top,
    /// Below the anchor
    Bottom,
    /// Left of the anchor
    Left,
    /// Right of the anchor
    Right,
}

impl Alignment {
    /// All alignments.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

/// A translation distance, absolute or relative to the panel's own size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Pixels
    Px(f32),
    /// Percentage of the panel extent along the same axis
    Percent(f32),
}

impl Length {
    /// Resolve to pixels against the panel extent on this axis.
    #[must_use]
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// 2-D translation applied to the panel after it is placed at `(left, top)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PanelTransform {
    /// Horizontal shift only
    TranslateX(Length),
    /// Vertical shift only
    TranslateY(Length),
    /// Horizontal and vertical shift
    Translate(Length, Length),
}

impl PanelTransform {
    /// Pixel shift for a panel of the given measured size.
    #[must_use]
    pub fn offset_for(&self, panel: Size) -> Point {
        match *self {
            Self::TranslateX(x) => Point::new(x.resolve(panel.width), 0.0),
            Self::TranslateY(y) => Point::new(0.0, y.resolve(panel.height)),
            Self::Translate(x, y) => Point::new(x.resolve(panel.width), y.resolve(panel.height)),
        }
    }
}

impl fmt::Display for PanelTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateX(x) => write!(f, "translateX({x})"),
            Self::TranslateY(y) => write!(f, "translateY({y})"),
            Self::Translate(x, y) => write!(f, "translate({x}, {y})"),
        }
    }
}

/// Fixed-position placement of the tooltip panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelPosition {
    /// Viewport x before the transform
    pub left: f32,
    /// Viewport y before the transform
    pub top: f32,
    /// Shift applied after positioning
    pub transform: PanelTransform,
}

impl PanelPosition {
    /// On-screen rectangle of a panel of the given size once the transform
    /// is applied.
    #[must_use]
    pub fn bounds(&self, panel: Size) -> Rect {
        let origin = Point::new(self.left, self.top) + self.transform.offset_for(panel);
        Rect::from_origin_size(origin, panel)
    }
}

/// Place the panel against the anchor edge selected by `alignment`.
///
/// The constant nudges line the pointer triangle up with the anchor.
#[must_use]
pub fn compute_panel_position(
    alignment: Alignment,
    anchor: &AnchorRect,
    offset: &Offset,
) -> PanelPosition {
    let (left, top, transform) = match alignment {
        Alignment::Bottom => (
            anchor.left,
            anchor.bottom,
            PanelTransform::TranslateX(Length::Px(-25.0)),
        ),
        Alignment::Left => (
            anchor.left,
            anchor.top,
            PanelTransform::Translate(Length::Percent(-100.0), Length::Px(-24.0)),
        ),
        Alignment::Right => (
            anchor.right,
            anchor.top,
            PanelTransform::TranslateY(Length::Px(-24.0)),
        ),
        Alignment::Top => (
            anchor.left,
            anchor.top,
            PanelTransform::Translate(Length::Px(-25.0), Length::Percent(-100.0)),
        ),
    };

    PanelPosition {
        left: left + offset.left,
        top: top + offset.top,
        transform,
    }
}

/// Box edge the triangle is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

impl Edge {
    /// CSS property name.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Absolute placement of the pointer triangle inside the panel body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrianglePosition {
    /// The two edges the triangle is pinned to, with pixel distances
    pub edges: [(Edge, f32); 2],
    /// Rotation in degrees
    pub rotation: f32,
}

impl TrianglePosition {
    /// Distance from `edge`, if the triangle is pinned to it.
    #[must_use]
    pub fn edge(&self, edge: Edge) -> Option<f32> {
        self.edges.iter().find(|(e, _)| *e == edge).map(|(_, d)| *d)
    }
}

/// Static triangle layout for each alignment.
#[must_use]
pub const fn compute_triangle_position(alignment: Alignment) -> TrianglePosition {
    match alignment {
        Alignment::Bottom => TrianglePosition {
            edges: [(Edge::Left, 43.0), (Edge::Top, 16.0)],
            rotation: 135.0,
        },
        Alignment::Left => TrianglePosition {
            edges: [(Edge::Right, 0.0), (Edge::Top, 43.0)],
            rotation: 225.0,
        },
        Alignment::Right => TrianglePosition {
            edges: [(Edge::Left, 15.0), (Edge::Top, 22.0)],
            rotation: 45.0,
        },
        Alignment::Top => TrianglePosition {
            edges: [(Edge::Bottom, 0.0), (Edge::Left, 18.0)],
            rotation: -45.0,
        },
    }
}

/// Shadow color for the triangle: the base shadow with its alpha faded.
#[must_use]
pub fn compute_shadow_color(base: Color, fade: f32) -> Color {
    base.fade(fade)
}

/// Text color legible over `background`.
///
/// Light backgrounds get `dark`; everything else gets `light`.
#[must_use]
pub fn compute_contrast_color(background: Color, light: Color, dark: Color) -> Color {
    if background.is_light() {
        dark
    } else {
        light
    }
}
