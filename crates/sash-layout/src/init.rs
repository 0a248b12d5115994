#![forbid(unsafe_code)]

//! Initial size derivation for a region list.

use sash_core::geometry::{clamp_pct, rescale_to_total};

use crate::region::RegionDescriptor;

/// Derive initial proportional sizes (summing to 100) from descriptors.
///
/// 1. Regions with a declared `default_size_pct` keep it, clamped to
///    `[0, 100]`.
/// 2. The unclaimed remainder (`100 − Σ declared`, floored at 0) is split
///    evenly among regions without a declared default. When declared defaults
///    already exceed 100, the undeclared regions therefore start at 0.
/// 3. One proportional rescale brings the total to exactly 100, spreading
///    rounding slack across every region instead of one victim.
///
/// Min/max bounds are deliberately *not* applied here: a default that lands
/// outside its own bounds (or gets pushed outside by rescaling) is corrected
/// by the constraint resolver on the first drag that touches it, which keeps
/// initialization a pure function of the declared defaults.
#[must_use]
pub fn initial_sizes(descriptors: &[RegionDescriptor]) -> Vec<f32> {
    if descriptors.is_empty() {
        return Vec::new();
    }

    let declared_total: f32 = descriptors
        .iter()
        .filter_map(|descriptor| descriptor.default_size_pct)
        .map(|pct| clamp_pct(pct, 0.0, 100.0))
        .sum();
    let undeclared = descriptors
        .iter()
        .filter(|descriptor| descriptor.default_size_pct.is_none())
        .count();
    let share = if undeclared == 0 {
        0.0
    } else {
        (100.0 - declared_total).max(0.0) / undeclared as f32
    };

    let mut sizes: Vec<f32> = descriptors
        .iter()
        .map(|descriptor| match descriptor.default_size_pct {
            Some(pct) => clamp_pct(pct, 0.0, 100.0),
            None => share,
        })
        .collect();

    rescale_to_total(&mut sizes, 100.0);
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{RegionDescriptor, RegionId};
    use sash_core::geometry::PCT_EPSILON;

    fn plain(id: u64) -> RegionDescriptor {
        RegionDescriptor::new(RegionId(id))
    }

    fn sum(sizes: &[f32]) -> f32 {
        sizes.iter().sum()
    }

    #[test]
    fn three_regions_no_defaults_split_evenly() {
        let sizes = initial_sizes(&[plain(1), plain(2), plain(3)]);
        assert_eq!(sizes.len(), 3);
        for size in &sizes {
            assert!((size - 100.0 / 3.0).abs() < PCT_EPSILON);
        }
        assert!((sum(&sizes) - 100.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn declared_default_leaves_remainder() {
        let sizes = initial_sizes(&[plain(1).default_size_pct(70.0), plain(2)]);
        assert!((sizes[0] - 70.0).abs() < PCT_EPSILON);
        assert!((sizes[1] - 30.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn remainder_splits_among_undeclared() {
        let sizes = initial_sizes(&[plain(1).default_size_pct(40.0), plain(2), plain(3)]);
        assert!((sizes[0] - 40.0).abs() < PCT_EPSILON);
        assert!((sizes[1] - 30.0).abs() < PCT_EPSILON);
        assert!((sizes[2] - 30.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn overcommitted_defaults_zero_the_rest_then_rescale() {
        let sizes = initial_sizes(&[
            plain(1).default_size_pct(80.0),
            plain(2).default_size_pct(80.0),
            plain(3),
        ]);
        // Undeclared region gets 0 before rescale, so it stays 0 after.
        assert!((sizes[0] - 50.0).abs() < PCT_EPSILON);
        assert!((sizes[1] - 50.0).abs() < PCT_EPSILON);
        assert!(sizes[2].abs() < PCT_EPSILON);
        assert!((sum(&sizes) - 100.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn defaults_outside_unit_range_clamp() {
        let sizes = initial_sizes(&[plain(1).default_size_pct(150.0), plain(2)]);
        // 150 clamps to 100; remainder is 0.
        assert!((sizes[0] - 100.0).abs() < PCT_EPSILON);
        assert!(sizes[1].abs() < PCT_EPSILON);
    }

    #[test]
    fn init_is_idempotent() {
        let descriptors = [plain(1).default_size_pct(25.0), plain(2), plain(3)];
        assert_eq!(initial_sizes(&descriptors), initial_sizes(&descriptors));
    }

    #[test]
    fn empty_region_list_yields_empty_sizes() {
        assert!(initial_sizes(&[]).is_empty());
    }

    #[test]
    fn all_zero_defaults_split_evenly() {
        let sizes = initial_sizes(&[
            plain(1).default_size_pct(0.0),
            plain(2).default_size_pct(0.0),
        ]);
        assert!((sizes[0] - 50.0).abs() < PCT_EPSILON);
        assert!((sizes[1] - 50.0).abs() < PCT_EPSILON);
    }

    #[test]
    fn default_above_own_max_is_kept_for_resolver() {
        // Bounds are not enforced at init time.
        let sizes = initial_sizes(&[
            plain(1).default_size_pct(90.0).max_size_pct(60.0),
            plain(2),
        ]);
        assert!((sizes[0] - 90.0).abs() < PCT_EPSILON);
    }
}
