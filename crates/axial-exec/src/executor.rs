//! Registry-backed executor for axis operations

use crate::binding::{get_shape, ArrayBinding};
use crate::hints::ExecHints;
use crate::ops;
use crate::registry::BindingRegistry;
use anyhow::Result;
use axial_core::{AxisError, AxisRef, Rank, Shape};

/// Runs axis operations against the binding selected by its [`ExecHints`].
///
/// The executor keeps no per-call state: every method snapshots the shape of
/// the array it is given and returns a new handle.
///
/// # Examples
///
/// ```
/// use axial_exec::{AxisExecutor, BindingRegistry, ExecHints, SymbolicTensor};
///
/// let exec = AxisExecutor::new(BindingRegistry::<SymbolicTensor>::symbolic());
/// let x = SymbolicTensor::from_sizes("x", &[2, 3, 4, 5]);
///
/// let y = exec.pack_to_axis(&x, 1, 3).unwrap();
/// assert_eq!(y, SymbolicTensor::from_sizes("x", &[2, 4, 15]));
///
/// let missing = exec.with_hints(ExecHints::new().with_library("torch"));
/// assert!(missing.swap_axis(&x, 0, 1).is_err());
/// ```
#[derive(Debug)]
pub struct AxisExecutor<A> {
    registry: BindingRegistry<A>,
    hints: ExecHints,
}

impl<A: Clone> AxisExecutor<A> {
    /// Create an executor dispatching to the registry's default library
    pub fn new(registry: BindingRegistry<A>) -> Self {
        Self {
            registry,
            hints: ExecHints::default(),
        }
    }

    /// Replace the execution hints
    pub fn with_hints(mut self, hints: ExecHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn hints(&self) -> &ExecHints {
        &self.hints
    }

    pub fn registry(&self) -> &BindingRegistry<A> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut BindingRegistry<A> {
        &mut self.registry
    }

    /// Binding selected by the current hints.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::UnsupportedLibrary`] if the selected library is not registered.
    pub fn binding(&self) -> Result<&dyn ArrayBinding<A>, AxisError> {
        self.registry.resolve(self.hints.library.as_deref())
    }

    pub fn get_shape(&self, array: &A) -> Result<Shape> {
        get_shape(array, self.binding()?)
    }

    pub fn rank(&self, array: &A) -> Result<Rank> {
        Ok(self.get_shape(array)?.len())
    }

    pub fn swap_axis(&self, array: &A, a: AxisRef, b: AxisRef) -> Result<A> {
        ops::swap_axis_with(array, a, b, self.binding()?, &self.hints)
    }

    pub fn popinsert_axes(&self, array: &A, src: AxisRef, dst: AxisRef) -> Result<A> {
        ops::popinsert_axes_with(array, src, dst, self.binding()?, &self.hints)
    }

    pub fn pack_to_axis(&self, array: &A, axis1: AxisRef, axis2: AxisRef) -> Result<A> {
        ops::pack_to_axis_with(array, axis1, axis2, self.binding()?, &self.hints)
    }

    pub fn unpack_axis(&self, array: &A, axis: AxisRef, inner: usize) -> Result<A> {
        ops::unpack_axis_with(array, axis, inner, self.binding()?, &self.hints)
    }

    pub fn frontpack(&self, array: &A) -> Result<A> {
        self.pack_to_axis(array, 0, 1)
    }

    pub fn backpack(&self, array: &A) -> Result<A> {
        self.pack_to_axis(array, -2, -1)
    }

    pub fn frontswap(&self, array: &A) -> Result<A> {
        self.swap_axis(array, 0, 1)
    }

    pub fn backswap(&self, array: &A) -> Result<A> {
        self.swap_axis(array, -2, -1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::{DenseArray, DenseBinding};
    use scirs2_core::ndarray_ext::{Array, IxDyn};

    fn iota(shape: &[usize]) -> DenseArray<i64> {
        let total: usize = shape.iter().product();
        Array::from_shape_vec(IxDyn(shape), (0..total as i64).collect()).unwrap()
    }

    #[test]
    fn test_dense_executor_defaults() {
        let exec = AxisExecutor::new(BindingRegistry::<DenseArray<i64>>::dense());
        let x = iota(&[2, 3, 4]);

        assert_eq!(exec.rank(&x).unwrap(), 3);
        assert_eq!(exec.backswap(&x).unwrap().shape(), &[2, 4, 3]);
        assert_eq!(exec.frontswap(&x).unwrap().shape(), &[3, 2, 4]);
        assert_eq!(exec.backpack(&x).unwrap().shape(), &[2, 12]);
    }

    #[test]
    fn test_pack_then_unpack_restores_data() {
        let exec = AxisExecutor::new(BindingRegistry::<DenseArray<i64>>::dense());
        let x = iota(&[2, 3, 4]);

        let packed = exec.pack_to_axis(&x, 0, 2).unwrap();
        assert_eq!(packed.shape(), &[3, 8]);

        let unpacked = exec.unpack_axis(&packed, 1, 4).unwrap();
        assert_eq!(unpacked.shape(), &[3, 2, 4]);
        let restored = exec.popinsert_axes(&unpacked, 0, 1).unwrap();
        assert_eq!(restored, x);
    }

    #[test]
    fn test_unknown_library_fails_before_any_call() {
        let exec = AxisExecutor::new(BindingRegistry::<DenseArray<i64>>::dense())
            .with_hints(ExecHints::new().with_library("tensorflow"));
        let err = exec.frontpack(&iota(&[2, 2])).unwrap_err();

        assert_eq!(
            err.downcast_ref::<AxisError>(),
            Some(&AxisError::UnsupportedLibrary {
                library: "tensorflow".to_string()
            })
        );
    }

    #[test]
    fn test_registry_can_be_extended() {
        let mut exec = AxisExecutor::new(BindingRegistry::<DenseArray<i64>>::new());
        assert!(exec.binding().is_err());

        exec.registry_mut().register(DenseBinding::<i64>::new());
        assert!(exec.binding().is_ok());
    }
}
