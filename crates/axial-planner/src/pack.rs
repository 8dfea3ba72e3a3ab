//! Pack and unpack planning
//!
//! Packing merges two axes into one. No array library offers a reshape that
//! also reorders axes, so a pack is always planned as a transpose that makes
//! the two axes adjacent, followed by a reshape that collapses them.
//!
//! # Axis placement
//!
//! For `pack(axis1, axis2)` the first axis is moved next to the second and
//! becomes the outer (slower varying) factor of the merged slot. The merged
//! slot sits where `axis2` sits once `axis1` has been taken out:
//!
//! ```text
//! pack((A, B, C, D), 1, 3) -> (A, C, B*D)
//! pack((A, B, C, D), 2, 0) -> (C*A, B, D)
//! ```
//!
//! Untouched axes keep their relative order.
//!
//! # Inferred slots
//!
//! Array libraries accept at most one `-1` in a reshape. A merged slot with a
//! dynamic factor must be inferred, and so must every untouched dynamic axis.
//! A merged or split slot whose size is known is always written out when an
//! untouched axis already takes the `-1`, whatever
//! [`PlanHints::fold_static_product`] says. When the inferred slots still add
//! up to more than one the plan fails with [`AxisError::AmbiguousReshape`]
//! instead of producing a reshape the library would reject.

use crate::hints::PlanHints;
use crate::permutation::move_resolved;
use axial_core::{
    format_shape, normalize_all, normalize_named, Axis, AxisError, AxisRef, Dim, Permutation,
    TargetDim, TargetShape,
};
use smallvec::SmallVec;
use std::fmt;

/// Transpose-then-reshape plan for merging two axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackPlan {
    /// Brings the two axes next to each other, outer axis first
    pub permutation: Permutation,
    /// Position of the merged slot in the target shape
    pub merged_axis: Axis,
    /// Shape handed to the reshape after the transpose
    pub target: TargetShape,
}

impl fmt::Display for PackPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transpose {} then reshape {} (merged at {})",
            self.permutation, self.target, self.merged_axis
        )
    }
}

/// Reshape plan for splitting one axis into an `(outer, inner)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackPlan {
    /// Normalized axis being split; the outer factor keeps this position
    pub axis: Axis,
    pub target: TargetShape,
}

/// Plan merging `axis1` (outer) with `axis2` (inner).
///
/// # Errors
///
/// - [`AxisError::AxisOutOfRange`] if either axis is not in `[-rank, rank)`
/// - [`AxisError::InvalidAxisPair`] if both resolve to the same axis
/// - [`AxisError::AmbiguousReshape`] if the target would need more than one inferred slot
///
/// # Examples
///
/// ```
/// use axial_core::{shape_from_sizes, TargetShape};
/// use axial_planner::{plan_pack, PlanHints};
///
/// let shape = shape_from_sizes(&[2, 3, 4, 5]);
/// let plan = plan_pack(&shape, 1, 3, &PlanHints::default()).unwrap();
///
/// assert_eq!(plan.permutation.as_slice(), &[0, 2, 1, 3]);
/// assert_eq!(plan.target, TargetShape::from_sizes(&[2, 4, 15]));
/// ```
pub fn plan_pack(
    shape: &[Dim],
    axis1: AxisRef,
    axis2: AxisRef,
    hints: &PlanHints,
) -> Result<PackPlan, AxisError> {
    let rank = shape.len();
    let [outer, inner] = normalize_all([("axis1", axis1), ("axis2", axis2)], rank)?;
    if outer == inner {
        return Err(AxisError::InvalidAxisPair { axis: outer, rank });
    }

    // Slot of axis2 once axis1 has been taken out of the ordering
    let merged_axis = if outer < inner { inner - 1 } else { inner };
    let permutation = move_resolved(rank, outer, merged_axis)?;
    let permuted = permutation.apply(shape)?;

    let (before, rest) = permuted.split_at(merged_axis);
    let (pair, after) = rest.split_at(2);
    let fold = hints.fold_static_product || has_dynamic(before) || has_dynamic(after);

    let mut dims: SmallVec<[TargetDim; 6]> = SmallVec::with_capacity(rank - 1);
    dims.extend(before.iter().map(|&d| TargetDim::from(d)));
    dims.push(merged_slot(pair[0], pair[1], fold));
    dims.extend(after.iter().map(|&d| TargetDim::from(d)));

    let target = TargetShape::new(dims)?;
    log::debug!(
        "pack plan: axes ({}, {}) of {} -> transpose {}, reshape {}",
        outer,
        inner,
        format_shape(shape),
        permutation,
        target
    );

    Ok(PackPlan {
        permutation,
        merged_axis,
        target,
    })
}

/// Plan splitting `axis` into `(outer, inner)` with `inner` elements in the inner axis.
///
/// The outer size is computed when `shape[axis]` is known and inferred otherwise.
///
/// # Errors
///
/// - [`AxisError::AxisOutOfRange`] if `axis` is not in `[-rank, rank)`
/// - [`AxisError::InvalidSplit`] if `inner` is zero or does not divide a known size
/// - [`AxisError::AmbiguousReshape`] if the target would need more than one inferred slot
///
/// # Examples
///
/// ```
/// use axial_core::{shape_from_sizes, TargetShape};
/// use axial_planner::{plan_unpack, PlanHints};
///
/// // (A, B, C*D, E) -> (A, B, C, D, E)
/// let shape = shape_from_sizes(&[2, 3, 20, 6]);
/// let plan = plan_unpack(&shape, 2, 5, &PlanHints::default()).unwrap();
/// assert_eq!(plan.target, TargetShape::from_sizes(&[2, 3, 4, 5, 6]));
/// ```
pub fn plan_unpack(
    shape: &[Dim],
    axis: AxisRef,
    inner: usize,
    hints: &PlanHints,
) -> Result<UnpackPlan, AxisError> {
    let rank = shape.len();
    let axis = normalize_named("axis", axis, rank)?;
    let size = shape[axis];
    let invalid = AxisError::InvalidSplit { axis, size, inner };
    if inner == 0 {
        return Err(invalid);
    }

    let fold = hints.fold_static_product
        || has_dynamic(&shape[..axis])
        || has_dynamic(&shape[axis + 1..]);
    let outer = match size {
        Dim::Known(n) if n % inner != 0 => return Err(invalid),
        Dim::Known(n) if fold => TargetDim::Size(n / inner),
        _ => TargetDim::Infer,
    };

    let mut dims: SmallVec<[TargetDim; 6]> = SmallVec::with_capacity(rank + 1);
    dims.extend(shape[..axis].iter().map(|&d| TargetDim::from(d)));
    dims.push(outer);
    dims.push(TargetDim::Size(inner));
    dims.extend(shape[axis + 1..].iter().map(|&d| TargetDim::from(d)));

    let target = TargetShape::new(dims)?;
    log::debug!(
        "unpack plan: axis {} of {} by {} -> reshape {}",
        axis,
        format_shape(shape),
        inner,
        target
    );

    Ok(UnpackPlan { axis, target })
}

fn has_dynamic(dims: &[Dim]) -> bool {
    dims.iter().any(|d| d.is_dynamic())
}

fn merged_slot(outer: Dim, inner: Dim, fold: bool) -> TargetDim {
    match outer.merged(inner) {
        Dim::Known(n) if fold => TargetDim::Size(n),
        Dim::Dynamic if !outer.is_dynamic() && !inner.is_dynamic() => {
            log::warn!(
                "merged size {} x {} overflows usize, inferring the slot instead",
                outer,
                inner
            );
            TargetDim::Infer
        }
        _ => TargetDim::Infer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axial_core::shape_from_sizes;

    fn hints() -> PlanHints {
        PlanHints::default()
    }

    #[test]
    fn test_pack_front_pair_is_identity_transpose() {
        let shape = shape_from_sizes(&[2, 3, 4, 5]);
        let plan = plan_pack(&shape, 0, 1, &hints()).unwrap();

        assert!(plan.permutation.is_identity());
        assert_eq!(plan.merged_axis, 0);
        assert_eq!(plan.target, TargetShape::from_sizes(&[6, 4, 5]));
    }

    #[test]
    fn test_pack_forward_non_adjacent() {
        // (A, B, C, D), 1, 3 -> (A, C, B*D)
        let shape = shape_from_sizes(&[2, 3, 4, 5]);
        let plan = plan_pack(&shape, 1, 3, &hints()).unwrap();

        assert_eq!(plan.permutation.as_slice(), &[0, 2, 1, 3]);
        assert_eq!(plan.merged_axis, 2);
        assert_eq!(plan.target, TargetShape::from_sizes(&[2, 4, 15]));
    }

    #[test]
    fn test_pack_backward() {
        // (A, B, C, D), 2, 0 -> (C*A, B, D)
        let shape = shape_from_sizes(&[2, 3, 4, 5]);
        let plan = plan_pack(&shape, 2, 0, &hints()).unwrap();

        assert_eq!(plan.permutation.as_slice(), &[2, 0, 1, 3]);
        assert_eq!(plan.merged_axis, 0);
        assert_eq!(plan.target, TargetShape::from_sizes(&[8, 3, 5]));
    }

    #[test]
    fn test_pack_negative_axes() {
        let shape = shape_from_sizes(&[2, 3, 4, 5]);
        let plan = plan_pack(&shape, -2, -1, &hints()).unwrap();

        assert!(plan.permutation.is_identity());
        assert_eq!(plan.target, TargetShape::from_sizes(&[2, 3, 20]));
    }

    #[test]
    fn test_pack_same_axis_is_invalid_pair() {
        let shape = shape_from_sizes(&[2, 3, 4]);
        let err = plan_pack(&shape, 1, -2, &hints()).unwrap_err();
        assert_eq!(err, AxisError::InvalidAxisPair { axis: 1, rank: 3 });
    }

    #[test]
    fn test_pack_out_of_range() {
        let shape = shape_from_sizes(&[2, 3, 4]);
        let err = plan_pack(&shape, 5, 0, &hints()).unwrap_err();
        assert_eq!(
            err,
            AxisError::AxisOutOfRange {
                argument: "axis1",
                axis: 5,
                rank: 3
            }
        );
    }

    #[test]
    fn test_pack_dynamic_merged_axis_is_inferred() {
        let shape = [Dim::Known(2), Dim::Dynamic, Dim::Known(4)];
        let plan = plan_pack(&shape, 0, 1, &hints()).unwrap();

        assert_eq!(plan.target.as_slice(), &[TargetDim::Infer, TargetDim::Size(4)]);
    }

    #[test]
    fn test_pack_known_pair_next_to_dynamic_axis() {
        let shape = [Dim::Dynamic, Dim::Known(3), Dim::Known(4)];
        let plan = plan_pack(&shape, 1, 2, &hints()).unwrap();

        assert_eq!(plan.target.as_slice(), &[TargetDim::Infer, TargetDim::Size(12)]);
    }

    #[test]
    fn test_pack_dynamic_pair_with_other_dynamic_axis_is_ambiguous() {
        let shape = [Dim::Dynamic, Dim::Dynamic, Dim::Known(4), Dim::Dynamic];
        let err = plan_pack(&shape, 0, 1, &hints()).unwrap_err();
        assert!(matches!(err, AxisError::AmbiguousReshape { .. }));
    }

    #[test]
    fn test_pack_without_folding_always_infers() {
        let shape = shape_from_sizes(&[2, 3, 4]);
        let hints = PlanHints::new().with_fold_static_product(false);
        let plan = plan_pack(&shape, 0, 2, &hints).unwrap();

        assert_eq!(plan.permutation.as_slice(), &[1, 0, 2]);
        assert_eq!(plan.target.as_slice(), &[TargetDim::Size(3), TargetDim::Infer]);
    }

    #[test]
    fn test_pack_without_folding_keeps_known_pair_beside_dynamic_axis() {
        let shape = [Dim::Dynamic, Dim::Known(3), Dim::Known(4)];
        let hints = PlanHints::new().with_fold_static_product(false);
        let plan = plan_pack(&shape, 1, 2, &hints).unwrap();

        assert_eq!(plan.target.as_slice(), &[TargetDim::Infer, TargetDim::Size(12)]);
    }

    #[test]
    fn test_unpack_known_axis() {
        let shape = shape_from_sizes(&[6, 5]);
        let plan = plan_unpack(&shape, 0, 3, &hints()).unwrap();

        assert_eq!(plan.axis, 0);
        assert_eq!(plan.target, TargetShape::from_sizes(&[2, 3, 5]));
    }

    #[test]
    fn test_unpack_dynamic_axis_infers_outer() {
        let shape = [Dim::Known(2), Dim::Dynamic];
        let plan = plan_unpack(&shape, -1, 4, &hints()).unwrap();

        assert_eq!(
            plan.target.as_slice(),
            &[TargetDim::Size(2), TargetDim::Infer, TargetDim::Size(4)]
        );
    }

    #[test]
    fn test_unpack_without_folding_keeps_known_outer_beside_dynamic_axis() {
        let shape = [Dim::Dynamic, Dim::Known(6)];
        let hints = PlanHints::new().with_fold_static_product(false);
        let plan = plan_unpack(&shape, 1, 2, &hints).unwrap();

        assert_eq!(
            plan.target.as_slice(),
            &[TargetDim::Infer, TargetDim::Size(3), TargetDim::Size(2)]
        );

        let known = shape_from_sizes(&[4, 6]);
        let plan = plan_unpack(&known, 1, 2, &hints).unwrap();
        assert_eq!(
            plan.target.as_slice(),
            &[TargetDim::Size(4), TargetDim::Infer, TargetDim::Size(2)]
        );
    }

    #[test]
    fn test_unpack_rejects_bad_split() {
        let shape = shape_from_sizes(&[6, 5]);
        assert!(matches!(
            plan_unpack(&shape, 0, 4, &hints()),
            Err(AxisError::InvalidSplit { axis: 0, inner: 4, .. })
        ));
        assert!(matches!(
            plan_unpack(&shape, 1, 0, &hints()),
            Err(AxisError::InvalidSplit { axis: 1, inner: 0, .. })
        ));
    }

    #[test]
    fn test_unpack_dynamic_axis_next_to_dynamic_is_ambiguous() {
        let shape = [Dim::Dynamic, Dim::Dynamic];
        let err = plan_unpack(&shape, 1, 2, &hints()).unwrap_err();
        assert!(matches!(err, AxisError::AmbiguousReshape { .. }));
    }

    #[test]
    fn test_pack_plan_display() {
        let shape = shape_from_sizes(&[2, 3, 4]);
        let plan = plan_pack(&shape, 0, 2, &hints()).unwrap();
        assert_eq!(
            plan.to_string(),
            "transpose [1, 0, 2] then reshape (3, 8) (merged at 1)"
        );
    }
}
