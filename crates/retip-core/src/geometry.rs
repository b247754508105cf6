//! Geometric primitives: Point, Size, Rect, `AnchorRect`.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Viewport-relative bounding box of the element a tooltip is attached to.
///
/// Mirrors what a layout engine reports for a measured element: all four
/// edges plus the derived height and width. Produced by a measurement
/// provider on mount and on every viewport resize; the placement engine only
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorRect {
    /// Distance from the viewport top to the anchor's top edge
    pub top: f32,
    /// Distance from the viewport left to the anchor's right edge
    pub right: f32,
    /// Distance from the viewport top to the anchor's bottom edge
    pub bottom: f32,
    /// Distance from the viewport left to the anchor's left edge
    pub left: f32,
    /// Anchor height
    pub height: f32,
    /// Anchor width
    pub width: f32,
}

impl AnchorRect {
    /// Build from the four edges, deriving height and width.
    #[must_use]
    pub fn from_edges(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            height: bottom - top,
            width: right - left,
        }
    }
}

impl From<Rect> for AnchorRect {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.y,
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.x,
            height: rect.height,
            width: rect.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add() {
        assert_eq!(Point::new(1.0, 2.0) + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
    }

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(50.0, 100.0, 100.0, 20.0);
        assert_eq!(r.right(), 150.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(
            Rect::from_origin_size(Point::new(50.0, 100.0), Size::new(100.0, 20.0)),
            r
        );
    }

    #[test]
    fn test_anchor_from_rect() {
        let anchor = AnchorRect::from(Rect::new(50.0, 100.0, 100.0, 20.0));
        assert_eq!(
            anchor,
            AnchorRect {
                top: 100.0,
                right: 150.0,
                bottom: 120.0,
                left: 50.0,
                height: 20.0,
                width: 100.0,
            }
        );
    }

    #[test]
    fn test_anchor_from_edges() {
        let anchor = AnchorRect::from_edges(100.0, 150.0, 120.0, 50.0);
        assert_eq!(anchor.height, 20.0);
        assert_eq!(anchor.width, 100.0);
    }
}
