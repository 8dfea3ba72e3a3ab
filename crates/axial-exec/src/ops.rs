//! Axis operations: swap, move, pack, unpack.
//!
//! Every operation follows the same sequence:
//!
//! 1. Query the shape once through the binding
//! 2. Resolve the axis references against that rank snapshot
//! 3. Plan the permutation and/or reshape target
//! 4. Call the binding's `transpose` and/or `reshape`
//!
//! Steps 2 and 3 fail fast, so an invalid request never reaches the array
//! library. Failures from the planner are [`AxisError`](axial_core::AxisError)
//! values inside the returned [`anyhow::Error`] and can be recovered with
//! `downcast_ref`.
//!
//! The `*_with` variants take [`ExecHints`]; its `library` field is ignored
//! here since the binding is passed explicitly.
//!
//! # Examples
//!
//! ```
//! use axial_exec::{frontpack, popinsert_axes, swap_axis, DenseArray, DenseBinding};
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//!
//! let binding = DenseBinding::<f64>::new();
//! let x: DenseArray<f64> = Array::zeros(IxDyn(&[2, 3, 4, 5]));
//!
//! assert_eq!(swap_axis(&x, 1, -1, &binding).unwrap().shape(), &[2, 5, 4, 3]);
//! assert_eq!(popinsert_axes(&x, 1, -1, &binding).unwrap().shape(), &[2, 4, 5, 3]);
//! assert_eq!(frontpack(&x, &binding).unwrap().shape(), &[6, 4, 5]);
//! ```

use crate::binding::{get_shape, ArrayBinding};
use crate::hints::ExecHints;
use crate::tracing_support::record_plan;
use anyhow::{Context, Result};
use axial_core::{AxisRef, Permutation, TargetShape};
use axial_planner::{plan_move, plan_pack, plan_swap, plan_unpack};
use std::borrow::Cow;

/// Exchange axes `a` and `b`.
///
/// `(A, B, C, D)` with `a = 1, b = 3` becomes `(A, D, C, B)`.
pub fn swap_axis<A: Clone>(
    array: &A,
    a: AxisRef,
    b: AxisRef,
    binding: &dyn ArrayBinding<A>,
) -> Result<A> {
    swap_axis_with(array, a, b, binding, &ExecHints::default())
}

/// [`swap_axis`] with explicit execution hints.
pub fn swap_axis_with<A: Clone>(
    array: &A,
    a: AxisRef,
    b: AxisRef,
    binding: &dyn ArrayBinding<A>,
    hints: &ExecHints,
) -> Result<A> {
    let rank = get_shape(array, binding)?.len();
    let permutation = plan_swap(rank, a, b)?;
    record_plan("swap_axis", binding.library(), Some(&permutation), None);
    Ok(transpose(array, &permutation, binding, hints)?.into_owned())
}

/// Move axis `src` so it ends up at position `dst`, keeping the other axes in order.
///
/// `(A, B, C, D)` with `src = 1, dst = -1` becomes `(A, C, D, B)`.
pub fn popinsert_axes<A: Clone>(
    array: &A,
    src: AxisRef,
    dst: AxisRef,
    binding: &dyn ArrayBinding<A>,
) -> Result<A> {
    popinsert_axes_with(array, src, dst, binding, &ExecHints::default())
}

/// [`popinsert_axes`] with explicit execution hints.
pub fn popinsert_axes_with<A: Clone>(
    array: &A,
    src: AxisRef,
    dst: AxisRef,
    binding: &dyn ArrayBinding<A>,
    hints: &ExecHints,
) -> Result<A> {
    let rank = get_shape(array, binding)?.len();
    let permutation = plan_move(rank, src, dst)?;
    record_plan("popinsert_axes", binding.library(), Some(&permutation), None);
    Ok(transpose(array, &permutation, binding, hints)?.into_owned())
}

/// Merge `axis1` (outer) with `axis2` (inner) into a single axis.
///
/// ```text
/// pack_to_axis((A, B, C, D), 1, 3) -> (A, C, B*D)
/// pack_to_axis((A, B, C, D), 2, 0) -> (C*A, B, D)
/// ```
pub fn pack_to_axis<A: Clone>(
    array: &A,
    axis1: AxisRef,
    axis2: AxisRef,
    binding: &dyn ArrayBinding<A>,
) -> Result<A> {
    pack_to_axis_with(array, axis1, axis2, binding, &ExecHints::default())
}

/// [`pack_to_axis`] with explicit execution hints; the planner hints decide
/// whether a known merged size is written out.
pub fn pack_to_axis_with<A: Clone>(
    array: &A,
    axis1: AxisRef,
    axis2: AxisRef,
    binding: &dyn ArrayBinding<A>,
    hints: &ExecHints,
) -> Result<A> {
    let shape = get_shape(array, binding)?;
    let plan = plan_pack(&shape, axis1, axis2, &hints.plan)?;
    record_plan(
        "pack_to_axis",
        binding.library(),
        Some(&plan.permutation),
        Some(&plan.target),
    );
    let permuted = transpose(array, &plan.permutation, binding, hints)?;
    reshape(&*permuted, &plan.target, binding)
}

/// Split `axis` into an outer axis and an inner axis of `inner` elements.
///
/// `(A, B, C*D, E)` with `axis = 2, inner = D` becomes `(A, B, C, D, E)`.
pub fn unpack_axis<A: Clone>(
    array: &A,
    axis: AxisRef,
    inner: usize,
    binding: &dyn ArrayBinding<A>,
) -> Result<A> {
    unpack_axis_with(array, axis, inner, binding, &ExecHints::default())
}

/// [`unpack_axis`] with explicit execution hints.
pub fn unpack_axis_with<A: Clone>(
    array: &A,
    axis: AxisRef,
    inner: usize,
    binding: &dyn ArrayBinding<A>,
    hints: &ExecHints,
) -> Result<A> {
    let shape = get_shape(array, binding)?;
    let plan = plan_unpack(&shape, axis, inner, &hints.plan)?;
    record_plan("unpack_axis", binding.library(), None, Some(&plan.target));
    reshape(array, &plan.target, binding)
}

/// `(A, B, ...) -> (A*B, ...)`
pub fn frontpack<A: Clone>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<A> {
    pack_to_axis(array, 0, 1, binding)
}

/// `(..., A, B) -> (..., A*B)`
pub fn backpack<A: Clone>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<A> {
    pack_to_axis(array, -2, -1, binding)
}

/// `(A, B, ...) -> (B, A, ...)`
pub fn frontswap<A: Clone>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<A> {
    swap_axis(array, 0, 1, binding)
}

/// `(..., A, B) -> (..., B, A)`
pub fn backswap<A: Clone>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<A> {
    swap_axis(array, -2, -1, binding)
}

fn transpose<'a, A: Clone>(
    array: &'a A,
    permutation: &Permutation,
    binding: &dyn ArrayBinding<A>,
    hints: &ExecHints,
) -> Result<Cow<'a, A>> {
    if hints.elide_identity_transpose && permutation.is_identity() {
        return Ok(Cow::Borrowed(array));
    }
    binding
        .transpose(array, permutation)
        .map(Cow::Owned)
        .with_context(|| format!("`{}` transpose by {} failed", binding.library(), permutation))
}

fn reshape<A>(array: &A, target: &TargetShape, binding: &dyn ArrayBinding<A>) -> Result<A> {
    binding
        .reshape(array, target)
        .with_context(|| format!("`{}` reshape to {} failed", binding.library(), target))
}
