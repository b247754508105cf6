//! Pixel nudges applied on top of computed placement.

use serde::{Deserialize, Serialize};

/// Fully-specified pixel offset. Every side is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Vertical nudge
    pub top: f32,
    /// Horizontal nudge
    pub left: f32,
    /// Reserved; not read by any placement formula
    pub right: f32,
    /// Reserved; not read by any placement formula
    pub bottom: f32,
}

/// Caller-supplied offset where any side may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialOffset {
    /// Vertical nudge
    pub top: Option<f32>,
    /// Horizontal nudge
    pub left: Option<f32>,
    /// Right side
    pub right: Option<f32>,
    /// Bottom side
    pub bottom: Option<f32>,
}

impl PartialOffset {
    /// Offset that only moves horizontally.
    #[must_use]
    pub const fn left(left: f32) -> Self {
        Self {
            top: None,
            left: Some(left),
            right: None,
            bottom: None,
        }
    }

    /// Offset that only moves vertically.
    #[must_use]
    pub const fn top(top: f32) -> Self {
        Self {
            top: Some(top),
            left: None,
            right: None,
            bottom: None,
        }
    }
}

impl From<Offset> for PartialOffset {
    fn from(offset: Offset) -> Self {
        Self {
            top: Some(offset.top),
            left: Some(offset.left),
            right: Some(offset.right),
            bottom: Some(offset.bottom),
        }
    }
}

/// Merge a partial offset onto all-zero defaults, field by field.
#[must_use]
pub fn normalize_offset(passed: Option<PartialOffset>) -> Offset {
    let passed = passed.unwrap_or_default();
    Offset {
        top: passed.top.unwrap_or(0.0),
        left: passed.left.unwrap_or(0.0),
        right: passed.right.unwrap_or(0.0),
        bottom: passed.bottom.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_offset_none() {
        assert_eq!(
            normalize_offset(None),
            Offset {
                top: 0.0,
                left: 0.0,
                right: 0.0,
                bottom: 0.0
            }
        );
    }

    #[test]
    fn test_normalize_offset_partial() {
        assert_eq!(
            normalize_offset(Some(PartialOffset::left(-15.0))),
            Offset {
                top: 0.0,
                left: -15.0,
                right: 0.0,
                bottom: 0.0
            }
        );
    }

    #[test]
    fn test_normalize_offset_full_roundtrip() {
        let full = Offset {
            top: 1.0,
            left: 2.0,
            right: 3.0,
            bottom: 4.0,
        };
        assert_eq!(normalize_offset(Some(full.into())), full);
    }

    #[test]
    fn test_partial_offset_deserializes_missing_fields() {
        let parsed: PartialOffset = serde_json::from_str(r#"{"top": 5}"#).unwrap();
        assert_eq!(parsed, PartialOffset::top(5.0));
        assert_eq!(normalize_offset(Some(parsed)).left, 0.0);
    }
}
