//! Geometry primitives in viewport pixel space.
//! Spec: <https://www.w3.org/TR/css-box-3/#box-model>

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle as reported by `getBoundingClientRect()`.
///
/// Coordinates are floating-point CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport top to the border-box top edge.
    pub top: f64,
    /// Distance from the viewport left to the border-box left edge.
    pub left: f64,
    /// Border-box width.
    pub width: f64,
    /// Border-box height.
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// `top + height`.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `left + width`.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Width and height of the rectangle.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Per-edge pixel magnitudes in CSS order (top, right, bottom, left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// Same value on all four edges.
    #[inline]
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `left + right`.
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Edges in `[top, right, bottom, left]` order.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Round to the nearest whole pixel, halves toward positive infinity.
///
/// This is `Math.round`, which existing fixture tables were generated with;
/// it differs from [`f64::round`] for negative halves.
#[inline]
#[must_use]
pub fn round_px(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
