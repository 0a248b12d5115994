#![forbid(unsafe_code)]

//! The panel group: exclusive owner of the ordered size list.
//!
//! # Invariants
//!
//! 1. `sizes().iter().sum() == 100 ± ε` for every reachable state (float
//!    drift is corrected opportunistically at the next full re-derivation,
//!    never per move).
//! 2. A drag mutates only the two regions flanking the dragged handle.
//! 3. Changing the axis extent alone never changes sizes — proportions are
//!    resize-invariant because they are stored as percentages.
//! 4. At most one drag session is active per group; the host event model
//!    serializes deliveries, so no internal locking exists.

use sash_core::event::{DragEvent, PointerDelta};
use sash_core::geometry::Axis;

use crate::drag::{DragEffect, DragNoopReason, DragSnapshot, DragState};
use crate::init::initial_sizes;
use crate::region::{
    GroupItem, HandleBinding, HandleOptions, RegionDescriptor, derive_bindings,
    region_descriptors,
};
use crate::resolver::resolve_pair;

/// Default handle thickness, in pixels. Rendering-only.
pub const DEFAULT_HANDLE_THICKNESS_PX: f32 = 8.0;

/// A group of adjacent resizable regions along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGroup {
    axis: Axis,
    handle_thickness_px: f32,
    items: Vec<GroupItem>,
    regions: Vec<RegionDescriptor>,
    bindings: Vec<Option<HandleBinding>>,
    sizes: Vec<f32>,
    axis_extent_px: f32,
    drag: DragState,
}

impl PanelGroup {
    /// Build a group from its ordered declaration list.
    #[must_use]
    pub fn new(axis: Axis, items: Vec<GroupItem>) -> Self {
        let regions = region_descriptors(&items);
        let bindings = derive_bindings(&items);
        let sizes = initial_sizes(&regions);
        Self {
            axis,
            handle_thickness_px: DEFAULT_HANDLE_THICKNESS_PX,
            items,
            regions,
            bindings,
            sizes,
            axis_extent_px: 0.0,
            drag: DragState::Idle,
        }
    }

    /// Set the rendered handle thickness. Never affects size math.
    #[must_use]
    pub fn handle_thickness_px(mut self, px: f32) -> Self {
        self.handle_thickness_px = px;
        self
    }

    /// Main axis of this group.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Rendered handle thickness, in pixels.
    #[must_use]
    pub const fn thickness_px(&self) -> f32 {
        self.handle_thickness_px
    }

    /// Current proportional sizes, one per region in declaration order.
    /// Read-only to everything outside this group.
    #[must_use]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// The declaration list this group was built from.
    #[must_use]
    pub fn items(&self) -> &[GroupItem] {
        &self.items
    }

    /// Number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of handles (inert ones included).
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.bindings.len()
    }

    /// The region pair a handle resizes, or `None` for an inert handle.
    #[must_use]
    pub fn binding(&self, handle_index: usize) -> Option<HandleBinding> {
        self.bindings.get(handle_index).copied().flatten()
    }

    /// Rendering options for a handle.
    #[must_use]
    pub fn handle_options(&self, handle_index: usize) -> Option<HandleOptions> {
        self.items
            .iter()
            .filter_map(|item| match item {
                GroupItem::Handle(options) => Some(*options),
                GroupItem::Region(_) => None,
            })
            .nth(handle_index)
    }

    /// Current drag lifecycle state.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Current main-axis pixel length.
    #[must_use]
    pub const fn axis_extent_px(&self) -> f32 {
        self.axis_extent_px
    }

    /// Record a new main-axis pixel length from the host layout callback.
    ///
    /// Only future drags see the new value; an in-flight session keeps the
    /// extent frozen in its snapshot, and `sizes` are never rescaled here.
    pub fn set_axis_extent(&mut self, px: f32) {
        self.axis_extent_px = px;
    }

    /// Swap the declaration list.
    ///
    /// Sizes are re-derived from scratch only when the region count changed
    /// (which also squares away any accumulated float drift); in-place
    /// descriptor changes keep the current sizes and take effect through the
    /// bounds read at the next drag. An active drag is force-ended first
    /// because its snapshot indices may no longer be valid.
    pub fn replace_items(&mut self, items: Vec<GroupItem>) {
        if self.drag.is_dragging() {
            let _ = self.end_drag();
        }
        let regions = region_descriptors(&items);
        let count_changed = regions.len() != self.regions.len();
        self.bindings = derive_bindings(&items);
        self.regions = regions;
        self.items = items;
        if count_changed {
            self.sizes = initial_sizes(&self.regions);
        }
    }

    /// Dispatch one host pointer event.
    pub fn apply(&mut self, event: &DragEvent) -> DragEffect {
        match *event {
            DragEvent::Press { handle_index } => self.begin_drag(handle_index),
            DragEvent::Move { delta } => self.drag_to(delta),
            DragEvent::Release | DragEvent::Cancel => self.end_drag(),
        }
    }

    /// Start a drag session on `handle_index`.
    ///
    /// Rejected (with an explicit reason) while another session is active,
    /// for unknown handle indices, and for inert handles.
    pub fn begin_drag(&mut self, handle_index: usize) -> DragEffect {
        if self.drag.is_dragging() {
            return DragEffect::noop(DragNoopReason::DragInProgress);
        }
        let Some(slot) = self.bindings.get(handle_index) else {
            return DragEffect::noop(DragNoopReason::UnknownHandle);
        };
        let Some(binding) = *slot else {
            return DragEffect::noop(DragNoopReason::InertHandle);
        };

        self.drag = DragState::Dragging {
            handle_index,
            binding,
            snapshot: DragSnapshot {
                sizes: self.sizes.clone(),
                axis_extent_px: self.axis_extent_px,
            },
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            handle_index,
            left = binding.left,
            right = binding.right,
            extent_px = self.axis_extent_px,
            "drag session started"
        );
        DragEffect::Started { handle_index }
    }

    /// Resolve the active session against cumulative pointer displacement.
    ///
    /// The displacement is projected onto the main axis and converted to a
    /// percentage of the snapshot's extent, then the flanking pair is
    /// resolved from the snapshot (never from the latest sizes).
    pub fn drag_to(&mut self, delta: PointerDelta) -> DragEffect {
        let DragState::Dragging {
            binding, snapshot, ..
        } = &self.drag
        else {
            return DragEffect::noop(DragNoopReason::NotDragging);
        };
        if snapshot.axis_extent_px <= 0.0 {
            return DragEffect::noop(DragNoopReason::UnusableExtent);
        }

        let delta_pct = delta.along(self.axis) / snapshot.axis_extent_px * 100.0;
        let left = binding.left;
        let right = binding.right;
        let pair = resolve_pair(
            snapshot.sizes[left],
            snapshot.sizes[right],
            delta_pct,
            self.regions[left].bounds(),
            self.regions[right].bounds(),
        );
        self.sizes[left] = pair.left_pct;
        self.sizes[right] = pair.right_pct;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            left,
            right,
            delta_pct,
            left_pct = pair.left_pct,
            right_pct = pair.right_pct,
            "drag resolved"
        );
        DragEffect::Updated {
            left_index: left,
            right_index: right,
            left_pct: pair.left_pct,
            right_pct: pair.right_pct,
        }
    }

    /// End the active session (release and cancel are identical).
    ///
    /// No rollback: whatever the last processed move left in `sizes` stays.
    pub fn end_drag(&mut self) -> DragEffect {
        let DragState::Dragging { handle_index, .. } = &self.drag else {
            return DragEffect::noop(DragNoopReason::NotDragging);
        };
        let handle_index = *handle_index;
        self.drag = DragState::Idle;
        #[cfg(feature = "tracing")]
        tracing::trace!(handle_index, "drag session ended");
        DragEffect::Ended { handle_index }
    }
}
