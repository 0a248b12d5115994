#![forbid(unsafe_code)]

//! Constraint resolution for one adjacent region pair.
//!
//! A drag on a handle redistributes size between exactly the two regions
//! flanking it. Because the pair's combined size is conserved, the group-wide
//! sum-to-100 invariant holds without any global re-normalization pass.

use sash_core::geometry::PCT_EPSILON;

use crate::region::SizeBounds;

/// Resolved sizes for the dragged pair, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPair {
    pub left_pct: f32,
    pub right_pct: f32,
}

/// Apply `delta_pct` to an adjacent pair, honoring each side's bounds.
///
/// `snapshot_left` / `snapshot_right` are the pair's sizes at gesture start;
/// positive `delta_pct` grows the left region. Both sides are clamped against
/// their own bounds; if a saturation made the pair total drift, the side
/// whose clamp deviated most is treated as the binding constraint and the
/// other side is recomputed from the conserved total, re-clamped once.
///
/// That single reconciliation pass is the whole algorithm. When both sides
/// saturate simultaneously the pair simply stops moving — a stable terminal
/// state, not an error — and no fixed-point iteration happens (iterating
/// would change the observable drag feel).
#[must_use]
pub fn resolve_pair(
    snapshot_left: f32,
    snapshot_right: f32,
    delta_pct: f32,
    left_bounds: SizeBounds,
    right_bounds: SizeBounds,
) -> ResolvedPair {
    let pair_total = snapshot_left + snapshot_right;

    let proposed_left = snapshot_left + delta_pct;
    let proposed_right = snapshot_right - delta_pct;
    let mut left = left_bounds.clamp(proposed_left);
    let mut right = right_bounds.clamp(proposed_right);

    if (left + right - pair_total).abs() > PCT_EPSILON {
        // A bound bit. The side clamped the hardest is the binding
        // constraint; it keeps its clamped value and the other side absorbs
        // the slack, re-clamped once against its own bounds.
        let left_deviation = (left - proposed_left).abs();
        let right_deviation = (right - proposed_right).abs();
        if left_deviation >= right_deviation {
            right = right_bounds.clamp(pair_total - left);
        } else {
            left = left_bounds.clamp(pair_total - right);
        }
    }

    ResolvedPair {
        left_pct: left,
        right_pct: right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f32, max: f32) -> SizeBounds {
        SizeBounds::sanitize(min, max)
    }

    #[test]
    fn unbounded_move_conserves_pair_total() {
        let pair = resolve_pair(50.0, 50.0, 12.5, bounds(5.0, 100.0), bounds(5.0, 100.0));
        assert!((pair.left_pct - 62.5).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 37.5).abs() < PCT_EPSILON);
    }

    #[test]
    fn overshoot_lands_both_sides_on_bounds() {
        // Start [50, 50], drag +60: left caps at 90, right floors at 10,
        // total still 100.
        let pair = resolve_pair(50.0, 50.0, 60.0, bounds(10.0, 90.0), bounds(10.0, 90.0));
        assert!((pair.left_pct - 90.0).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 10.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn left_saturation_reconciles_right() {
        // Left caps at 60; right absorbs the slack instead of shrinking by
        // the raw delta.
        let pair = resolve_pair(50.0, 50.0, 30.0, bounds(5.0, 60.0), bounds(5.0, 100.0));
        assert!((pair.left_pct - 60.0).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 40.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn right_saturation_reconciles_left() {
        let pair = resolve_pair(50.0, 50.0, -30.0, bounds(5.0, 100.0), bounds(5.0, 60.0));
        assert!((pair.right_pct - 60.0).abs() < PCT_EPSILON);
        assert!((pair.left_pct - 40.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn below_min_start_clamps_upward_immediately() {
        // A bad default left this region at 20 with min 40. The first drag
        // snaps it to its floor rather than erroring.
        let pair = resolve_pair(20.0, 80.0, 1.0, bounds(40.0, 100.0), bounds(5.0, 100.0));
        assert!((pair.left_pct - 40.0).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 60.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn overshooting_both_limits_stops_at_the_binding_bound() {
        // Left could reach 100, but the right's floor binds first: the pair
        // stops at [95, 5] no matter how far past it the pointer goes.
        let near = resolve_pair(50.0, 50.0, 60.0, bounds(5.0, 100.0), bounds(5.0, 100.0));
        let far = resolve_pair(50.0, 50.0, 500.0, bounds(5.0, 100.0), bounds(5.0, 100.0));
        assert_eq!(near, far);
        assert!((near.left_pct - 95.0).abs() < PCT_EPSILON);
        assert!((near.right_pct - 5.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn double_saturation_is_terminal() {
        // Both sides clamp and the reconciliation pass cannot restore the
        // total; the pair stops where the bounds put it.
        let pair = resolve_pair(20.0, 80.0, 5.0, bounds(40.0, 100.0), bounds(70.0, 100.0));
        assert!((pair.left_pct - 40.0).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 70.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn zero_delta_still_normalizes_out_of_bounds_snapshot() {
        let pair = resolve_pair(20.0, 80.0, 0.0, bounds(40.0, 100.0), bounds(5.0, 100.0));
        assert!((pair.left_pct - 40.0).abs() < PCT_EPSILON);
        assert!((pair.right_pct - 60.0).abs() < PCT_EPSILON);
    }
}
