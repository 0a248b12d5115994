#![forbid(unsafe_code)]

//! Geometric primitives for proportional panel layout.
//!
//! Sizes in sash are percentages of a group's main axis, stored as `f32`.
//! Pixel geometry only appears at the edges: converting pointer displacement
//! into a percentage delta, and realizing resolved sizes into rects.

use serde::{Deserialize, Serialize};

/// Tolerance for percentage comparisons (sum-to-100 invariant, clamp
/// saturation detection).
pub const PCT_EPSILON: f32 = 1e-3;

/// Direction along which a group arranges its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Regions side by side; the main axis is width.
    #[default]
    Horizontal,
    /// Regions stacked; the main axis is height.
    Vertical,
}

impl Axis {
    /// Pick the main-axis component of a `(width, height)` pair.
    #[inline]
    #[must_use]
    pub const fn main_extent(self, width: f32, height: f32) -> f32 {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }

    /// Pick the main-axis component of an `(dx, dy)` displacement.
    #[inline]
    #[must_use]
    pub const fn main_delta(self, dx: f32, dy: f32) -> f32 {
        match self {
            Self::Horizontal => dx,
            Self::Vertical => dy,
        }
    }
}

/// A pixel-space rectangle (floats, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Length of this rect along the given main axis.
    #[inline]
    #[must_use]
    pub const fn extent(self, axis: Axis) -> f32 {
        axis.main_extent(self.width, self.height)
    }
}

/// Clamp a percentage into `[lo, hi]`.
///
/// Tolerates a malformed range (`lo > hi`) by collapsing to `lo`, so
/// user-supplied bounds degrade instead of panicking in a render loop.
#[inline]
#[must_use]
pub fn clamp_pct(value: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        return lo;
    }
    value.clamp(lo, hi)
}

/// Rescale `values` in place so they sum to `total`.
///
/// Slack is absorbed proportionally across all entries rather than dumped on
/// a single one. A (near-)zero input sum falls back to an even split, which
/// keeps the degenerate all-zero case well defined.
pub fn rescale_to_total(values: &mut [f32], total: f32) {
    if values.is_empty() {
        return;
    }
    let sum: f32 = values.iter().sum();
    if sum.abs() <= PCT_EPSILON {
        let share = total / values.len() as f32;
        values.fill(share);
        return;
    }
    let factor = total / sum;
    for value in values.iter_mut() {
        *value *= factor;
    }
}
