//! Array library bindings
//!
//! A binding is the capability set Axial needs from an array library: one
//! shape query and the two view-changing kernels. Adding a library means
//! implementing [`ArrayBinding`] for its array type and registering it in a
//! [`BindingRegistry`](crate::BindingRegistry); the planner never changes.

use anyhow::{Context, Result};
use axial_core::{Permutation, Rank, Shape, TargetShape};

/// Shape accessor and transpose/reshape kernels of one array library.
///
/// Implementations must not mutate their inputs: every kernel returns a new
/// handle (or the library's equivalent view).
pub trait ArrayBinding<A>: Send + Sync {
    /// Key the binding is registered under
    fn library(&self) -> &str;

    /// Shape of `array`, with [`Dim::Dynamic`](axial_core::Dim::Dynamic) for sizes not known yet
    fn shape_of(&self, array: &A) -> Result<Shape>;

    /// Transpose so that output axis `i` is input axis `permutation[i]`
    fn transpose(&self, array: &A, permutation: &Permutation) -> Result<A>;

    /// Reshape to `target`, resolving its inferred slot from the element count
    fn reshape(&self, array: &A, target: &TargetShape) -> Result<A>;
}

/// Shape of `array` as seen through `binding`.
pub fn get_shape<A>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<Shape> {
    binding
        .shape_of(array)
        .with_context(|| format!("`{}` shape query failed", binding.library()))
}

/// Number of axes of `array` as seen through `binding`.
pub fn rank<A>(array: &A, binding: &dyn ArrayBinding<A>) -> Result<Rank> {
    Ok(get_shape(array, binding)?.len())
}
