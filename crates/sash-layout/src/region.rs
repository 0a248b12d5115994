#![forbid(unsafe_code)]

//! Region descriptors, group items, and handle bindings.
//!
//! A panel group is declared as an explicit ordered list of tagged items —
//! regions interleaved with handles — rather than discovered by probing an
//! opaque child collection. Handle-to-region pairings are derived once from
//! that list at construction and never change for the life of the mount.

use std::fmt;

use serde::{Deserialize, Serialize};

use sash_core::geometry::clamp_pct;

/// Default minimum region size, in percent of the main axis.
pub const DEFAULT_MIN_SIZE_PCT: f32 = 5.0;

/// Default maximum region size, in percent of the main axis.
pub const DEFAULT_MAX_SIZE_PCT: f32 = 100.0;

/// Caller-supplied stable identifier for a region.
///
/// The engine never mints identities itself; hosts pass whatever stable key
/// their own model uses (list index, entity id, hash of a route name).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(pub u64);

impl RegionId {
    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// Sanitized per-region size bounds, in percent.
///
/// Produced at the point of use from a descriptor's raw fields. Malformed
/// config (out-of-range values, `min > max`) is clamped to the nearest valid
/// shape rather than rejected; layout config comes from untrusted app code
/// and must degrade gracefully inside a render loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min_pct: f32,
    pub max_pct: f32,
}

impl SizeBounds {
    /// Build sanitized bounds from raw min/max percentages.
    #[must_use]
    pub fn sanitize(min_pct: f32, max_pct: f32) -> Self {
        let min_pct = clamp_pct(min_pct, 0.0, 100.0);
        let max_pct = clamp_pct(max_pct, min_pct, 100.0);
        Self { min_pct, max_pct }
    }

    /// Clamp a size into these bounds.
    #[inline]
    #[must_use]
    pub fn clamp(self, size_pct: f32) -> f32 {
        clamp_pct(size_pct, self.min_pct, self.max_pct)
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min_pct: DEFAULT_MIN_SIZE_PCT,
            max_pct: DEFAULT_MAX_SIZE_PCT,
        }
    }
}

/// Declaration-time configuration for one resizable region.
///
/// Immutable per mount; owned by the caller and read-only to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    pub id: RegionId,
    /// Initial share of the main axis, in percent. Regions without a default
    /// split the unclaimed remainder evenly.
    #[serde(default)]
    pub default_size_pct: Option<f32>,
    /// Smallest share this region may be dragged to. Default 5.
    pub min_size_pct: f32,
    /// Largest share this region may be dragged to. Default 100.
    pub max_size_pct: f32,
}

impl RegionDescriptor {
    /// Create a descriptor with default bounds and no default size.
    #[must_use]
    pub const fn new(id: RegionId) -> Self {
        Self {
            id,
            default_size_pct: None,
            min_size_pct: DEFAULT_MIN_SIZE_PCT,
            max_size_pct: DEFAULT_MAX_SIZE_PCT,
        }
    }

    /// Set the initial share, in percent.
    #[must_use]
    pub const fn default_size_pct(mut self, pct: f32) -> Self {
        self.default_size_pct = Some(pct);
        self
    }

    /// Set the minimum share, in percent.
    #[must_use]
    pub const fn min_size_pct(mut self, pct: f32) -> Self {
        self.min_size_pct = pct;
        self
    }

    /// Set the maximum share, in percent.
    #[must_use]
    pub const fn max_size_pct(mut self, pct: f32) -> Self {
        self.max_size_pct = pct;
        self
    }

    /// Sanitized bounds for this region.
    #[must_use]
    pub fn bounds(&self) -> SizeBounds {
        SizeBounds::sanitize(self.min_size_pct, self.max_size_pct)
    }
}

/// Rendering-only configuration for one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandleOptions {
    /// Whether the handle paints a grip affordance. Has no effect on size
    /// math or hit testing.
    #[serde(default)]
    pub grip_visible: bool,
}

impl HandleOptions {
    /// Handle with a visible grip.
    #[must_use]
    pub const fn with_grip() -> Self {
        Self { grip_visible: true }
    }
}

/// One entry in a group's ordered declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupItem {
    Region(RegionDescriptor),
    Handle(HandleOptions),
}

impl GroupItem {
    /// Shorthand for a region item.
    #[must_use]
    pub const fn region(descriptor: RegionDescriptor) -> Self {
        Self::Region(descriptor)
    }

    /// Shorthand for a default handle item.
    #[must_use]
    pub const fn handle() -> Self {
        Self::Handle(HandleOptions { grip_visible: false })
    }
}

/// Pairing of a handle with the two regions it resizes.
///
/// Indices are region indices (positions among regions only, not positions in
/// the full item list), and always satisfy `right == left + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleBinding {
    pub left: usize,
    pub right: usize,
}

/// Derive one binding slot per handle, in declaration order.
///
/// A handle binds only when its immediate neighbors in the item list are both
/// regions. Handles at the ends of the list, or stacked back to back, get
/// `None` and stay inert forever.
#[must_use]
pub fn derive_bindings(items: &[GroupItem]) -> Vec<Option<HandleBinding>> {
    let mut bindings = Vec::new();
    let mut regions_before = 0usize;
    for (position, item) in items.iter().enumerate() {
        match item {
            GroupItem::Region(_) => regions_before += 1,
            GroupItem::Handle(_) => {
                let left_is_region = position > 0
                    && matches!(items[position - 1], GroupItem::Region(_));
                let right_is_region =
                    matches!(items.get(position + 1), Some(GroupItem::Region(_)));
                let binding = (left_is_region && right_is_region).then(|| HandleBinding {
                    left: regions_before - 1,
                    right: regions_before,
                });
                bindings.push(binding);
            }
        }
    }
    bindings
}

/// Collect the region descriptors out of an item list, in order.
#[must_use]
pub fn region_descriptors(items: &[GroupItem]) -> Vec<RegionDescriptor> {
    items
        .iter()
        .filter_map(|item| match item {
            GroupItem::Region(descriptor) => Some(*descriptor),
            GroupItem::Handle(_) => None,
        })
        .collect()
}
