//! Binding for dense arrays backed by scirs2_core's ndarray
//!
//! Every dimension of a dense array is known, so plans against it never need
//! an inferred slot unless [`PlanHints::fold_static_product`](axial_planner::PlanHints)
//! is turned off.

use crate::binding::ArrayBinding;
use crate::registry::BindingRegistry;
use anyhow::{bail, Result};
use axial_core::{Dim, Permutation, Shape, TargetShape};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use std::marker::PhantomData;

/// Library key of [`DenseBinding`]
pub const DENSE_LIBRARY: &str = "ndarray";

/// Dense N-dimensional array with dynamic rank
pub type DenseArray<T> = Array<T, IxDyn>;

/// Binding for [`DenseArray`].
///
/// `transpose` is a zero-copy axis permutation. `reshape` is zero-copy when
/// the data is already in row-major order and copies into row-major order
/// otherwise, so a reshape after a transpose sees elements in the transposed
/// order.
pub struct DenseBinding<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> DenseBinding<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for DenseBinding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBinding<DenseArray<T>> for DenseBinding<T>
where
    T: Clone,
{
    fn library(&self) -> &str {
        DENSE_LIBRARY
    }

    fn shape_of(&self, array: &DenseArray<T>) -> Result<Shape> {
        Ok(array.shape().iter().map(|&n| Dim::Known(n)).collect())
    }

    fn transpose(&self, array: &DenseArray<T>, permutation: &Permutation) -> Result<DenseArray<T>> {
        if permutation.rank() != array.ndim() {
            bail!(
                "Permutation {} does not match array rank {}",
                permutation,
                array.ndim()
            );
        }
        Ok(array.clone().permuted_axes(IxDyn(permutation.as_slice())))
    }

    fn reshape(&self, array: &DenseArray<T>, target: &TargetShape) -> Result<DenseArray<T>> {
        let sizes = target.resolve(array.len())?;
        if let Ok(reshaped) = array.view().into_shape_with_order(IxDyn(&sizes)) {
            return Ok(reshaped.to_owned());
        }
        let flat: Vec<T> = array.iter().cloned().collect();
        Ok(Array::from_shape_vec(IxDyn(&sizes), flat)?)
    }
}

impl<T> BindingRegistry<DenseArray<T>>
where
    T: Clone + 'static,
{
    /// Registry with [`DenseBinding`] as the default library
    pub fn dense() -> Self {
        let mut registry = Self::new();
        registry.register(DenseBinding::<T>::new());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axial_core::{shape_from_sizes, TargetDim};

    fn iota(shape: &[usize]) -> DenseArray<i32> {
        let total: usize = shape.iter().product();
        Array::from_shape_vec(IxDyn(shape), (0..total as i32).collect()).unwrap()
    }

    #[test]
    fn test_shape_of_is_fully_known() {
        let binding = DenseBinding::<i32>::new();
        let shape = binding.shape_of(&iota(&[2, 3, 4])).unwrap();
        assert_eq!(shape, shape_from_sizes(&[2, 3, 4]));
    }

    #[test]
    fn test_transpose_moves_data() {
        let binding = DenseBinding::<i32>::new();
        let array = iota(&[2, 3]);
        let perm = Permutation::new([1, 0]).unwrap();
        let transposed = binding.transpose(&array, &perm).unwrap();

        assert_eq!(transposed.shape(), &[3, 2]);
        assert_eq!(transposed[[2usize, 1].as_slice()], array[[1usize, 2].as_slice()]);
    }

    #[test]
    fn test_transpose_rank_mismatch_fails() {
        let binding = DenseBinding::<i32>::new();
        let perm = Permutation::identity(3);
        assert!(binding.transpose(&iota(&[2, 3]), &perm).is_err());
    }

    #[test]
    fn test_reshape_after_transpose_uses_logical_order() {
        let binding = DenseBinding::<i32>::new();
        let array = iota(&[2, 3]);
        let perm = Permutation::new([1, 0]).unwrap();
        let transposed = binding.transpose(&array, &perm).unwrap();

        let target = TargetShape::new([TargetDim::Infer]).unwrap();
        let flat = binding.reshape(&transposed, &target).unwrap();
        assert_eq!(flat.iter().copied().collect::<Vec<_>>(), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_reshape_size_mismatch_fails() {
        let binding = DenseBinding::<i32>::new();
        let target = TargetShape::from_sizes(&[4, 2]);
        assert!(binding.reshape(&iota(&[2, 3]), &target).is_err());
    }
}
