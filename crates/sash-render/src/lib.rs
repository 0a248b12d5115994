#![forbid(unsafe_code)]

//! Compositor adapter: resolved percentage sizes → renderable geometry.
//!
//! # Role in sash
//! The layout engine stores pure percentages; the host's compositing layer
//! wants flex weights and pixel rects every frame. This crate is the stateless
//! bridge: build a [`TrackPlan`] from a group (or from raw sizes and items),
//! then realize it against whatever pixel bounds the host measured.
//!
//! # Invariants
//!
//! 1. Region weights are never negative: a region whose resolved size is
//!    non-positive renders at 0, without error.
//! 2. Handle thickness is constant — it never scales with region sizes and
//!    never participates in weight math.
//! 3. Planning and realization are pure functions of their inputs; nothing
//!    here reads or writes layout state.

use serde::{Deserialize, Serialize};

use sash_core::geometry::{Axis, RectF};
use sash_layout::{GroupItem, PanelGroup};

/// One renderable slot along the main axis, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackSegment {
    /// A region, weighted by its resolved share of the flexible space.
    Region { weight: f32 },
    /// A handle with fixed thickness.
    Handle { thickness_px: f32, grip_visible: bool },
}

/// A span along the main axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Span {
    pub offset_px: f32,
    pub length_px: f32,
}

/// Orientation-tagged segment list for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPlan {
    pub axis: Axis,
    pub segments: Vec<TrackSegment>,
}

impl TrackPlan {
    /// Plan a group's current state.
    #[must_use]
    pub fn of(group: &PanelGroup) -> Self {
        plan(group.sizes(), group.items(), group.axis(), group.thickness_px())
    }

    /// Sum of all fixed handle thicknesses.
    #[must_use]
    pub fn fixed_px(&self) -> f32 {
        self.segments
            .iter()
            .map(|segment| match segment {
                TrackSegment::Handle { thickness_px, .. } => *thickness_px,
                TrackSegment::Region { .. } => 0.0,
            })
            .sum()
    }

    /// Realize the plan into main-axis spans within `extent_px`.
    ///
    /// Handles take their fixed thickness first (collectively capped at the
    /// extent); regions share the remainder proportionally to weight. With a
    /// zero total weight every region collapses to a zero-length span.
    #[must_use]
    pub fn spans(&self, extent_px: f32) -> Vec<Span> {
        let extent_px = extent_px.max(0.0);
        let fixed = self.fixed_px().min(extent_px);
        let flexible = extent_px - fixed;
        let total_weight: f32 = self
            .segments
            .iter()
            .map(|segment| match segment {
                TrackSegment::Region { weight } => *weight,
                TrackSegment::Handle { .. } => 0.0,
            })
            .sum();
        // If handles overflow the extent, scale them down together.
        let handle_scale = {
            let want = self.fixed_px();
            if want > extent_px && want > 0.0 {
                extent_px / want
            } else {
                1.0
            }
        };

        let mut spans = Vec::with_capacity(self.segments.len());
        let mut cursor = 0.0f32;
        for segment in &self.segments {
            let length_px = match segment {
                TrackSegment::Region { weight } => {
                    if total_weight > 0.0 {
                        flexible * (weight / total_weight)
                    } else {
                        0.0
                    }
                }
                TrackSegment::Handle { thickness_px, .. } => thickness_px * handle_scale,
            };
            spans.push(Span {
                offset_px: cursor,
                length_px,
            });
            cursor += length_px;
        }
        spans
    }

    /// Realize the plan into pixel rects inside `bounds`.
    ///
    /// Spans run along the group's main axis; the cross axis is filled
    /// entirely. Horizontal groups vary x/width, vertical groups y/height.
    #[must_use]
    pub fn rects(&self, bounds: RectF) -> Vec<RectF> {
        self.spans(bounds.extent(self.axis))
            .into_iter()
            .map(|span| match self.axis {
                Axis::Horizontal => RectF::new(
                    bounds.x + span.offset_px,
                    bounds.y,
                    span.length_px,
                    bounds.height,
                ),
                Axis::Vertical => RectF::new(
                    bounds.x,
                    bounds.y + span.offset_px,
                    bounds.width,
                    span.length_px,
                ),
            })
            .collect()
    }
}

/// Build a plan from raw engine outputs.
///
/// `sizes` pairs with the regions in `items` by declaration order; missing
/// entries weigh 0 (renders empty rather than erroring on a stale frame).
#[must_use]
pub fn plan(
    sizes: &[f32],
    items: &[GroupItem],
    axis: Axis,
    handle_thickness_px: f32,
) -> TrackPlan {
    let mut next_size = 0usize;
    let segments = items
        .iter()
        .map(|item| match item {
            GroupItem::Region(_) => {
                let size = sizes.get(next_size).copied().unwrap_or(0.0);
                next_size += 1;
                TrackSegment::Region {
                    weight: size.max(0.0),
                }
            }
            GroupItem::Handle(options) => TrackSegment::Handle {
                thickness_px: handle_thickness_px.max(0.0),
                grip_visible: options.grip_visible,
            },
        })
        .collect();
    TrackPlan { axis, segments }
}
