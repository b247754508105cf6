//! Tooltip configuration surface and its defaults.

use crate::color::Color;
use crate::dimension::DimensionConstraint;
use crate::offset::Offset;
use crate::placement::Alignment;
use std::time::Duration;

/// Default panel fill (`#1d1d1d`).
pub const BACKGROUND_COLOR: Color = Color {
    r: 29.0 / 255.0,
    g: 29.0 / 255.0,
    b: 29.0 / 255.0,
    a: 1.0,
};

/// Default shadow color and light text color (`#d5d5d5`).
pub const INVERSE_COLOR: Color = Color {
    r: 213.0 / 255.0,
    g: 213.0 / 255.0,
    b: 213.0 / 255.0,
    a: 1.0,
};

/// Panel padding in pixels.
pub const CONTAINER_PADDING: f32 = 15.0;

/// Padding is applied on both sides of each axis.
pub const CONTAINER_PADDING_MULTIPLIER: f32 = 2.0;

/// Alpha fade applied to the shadow color for the pointer triangle.
pub const TRIANGLE_FADE: f32 = 0.5;

/// Show/hide transition duration.
pub const TRANSITION: Duration = Duration::from_millis(150);

/// Everything a caller can configure on a tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipProps {
    /// Side of the anchor the panel appears on
    pub alignment: Alignment,
    /// Panel fill
    pub background_color: Color,
    /// Base color for panel and triangle shadows
    pub shadow_color: Color,
    /// Delay between pointer leave and hide
    pub hide_delay: Duration,
    /// Force the tooltip visible regardless of hover
    pub is_active: bool,
    /// Render the anchor container as a block instead of inline-block
    pub is_block: bool,
    /// Max height constraint
    pub max_height: DimensionConstraint,
    /// Max width constraint
    pub max_width: DimensionConstraint,
    /// Pixel nudge
    pub offset: Offset,
    /// Body content
    pub message: String,
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            alignment: Alignment::Top,
            background_color: BACKGROUND_COLOR,
            shadow_color: INVERSE_COLOR,
            hide_delay: Duration::ZERO,
            is_active: false,
            is_block: false,
            max_height: DimensionConstraint::None,
            max_width: DimensionConstraint::None,
            offset: Offset::default(),
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_match_hex() {
        assert_eq!(BACKGROUND_COLOR.to_hex(), "#1d1d1d");
        assert_eq!(INVERSE_COLOR.to_hex(), "#d5d5d5");
        assert!(!BACKGROUND_COLOR.is_light());
        assert!(INVERSE_COLOR.is_light());
    }

    #[test]
    fn test_default_props() {
        let props = TooltipProps::default();
        assert_eq!(props.alignment, Alignment::Top);
        assert_eq!(props.hide_delay, Duration::ZERO);
        assert!(!props.is_active);
        assert!(!props.is_block);
        assert_eq!(props.max_height, DimensionConstraint::None);
        assert_eq!(props.offset, Offset::default());
    }
}
