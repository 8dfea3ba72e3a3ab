//! Binding for shape-only symbolic tensors
//!
//! A [`SymbolicTensor`] stands for an array whose data lives elsewhere (a
//! graph node, a lazily evaluated expression) and whose sizes may only be
//! known at run time. It is the natural target for plans that contain
//! dynamic dimensions.

use crate::binding::ArrayBinding;
use crate::registry::BindingRegistry;
use anyhow::{bail, Result};
use axial_core::{format_shape, num_elements, Dim, Permutation, Rank, Shape, TargetDim, TargetShape};
use std::fmt;

/// Library key of [`SymbolicBinding`]
pub const SYMBOLIC_LIBRARY: &str = "symbolic";

/// Named array handle carrying only a (possibly dynamic) shape.
///
/// # Examples
///
/// ```
/// use axial_core::Dim;
/// use axial_exec::SymbolicTensor;
///
/// let images = SymbolicTensor::new("images", [Dim::Dynamic, Dim::Known(28), Dim::Known(28)]);
/// assert_eq!(images.rank(), 3);
/// assert_eq!(images.num_elements(), None);
/// assert_eq!(images.to_string(), "images(?, 28, 28)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolicTensor {
    name: String,
    dims: Shape,
}

impl SymbolicTensor {
    pub fn new(name: impl Into<String>, dims: impl IntoIterator<Item = Dim>) -> Self {
        Self {
            name: name.into(),
            dims: dims.into_iter().collect(),
        }
    }

    /// Tensor with every size known
    pub fn from_sizes(name: impl Into<String>, sizes: &[usize]) -> Self {
        Self::new(name, sizes.iter().map(|&n| Dim::Known(n)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    pub fn rank(&self) -> Rank {
        self.dims.len()
    }

    /// Total element count, if every size is known
    pub fn num_elements(&self) -> Option<usize> {
        num_elements(&self.dims)
    }
}

impl fmt::Display for SymbolicTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, format_shape(&self.dims))
    }
}

/// Binding for [`SymbolicTensor`].
///
/// `reshape` checks element counts whenever the input is fully known. With a
/// dynamic input the inferred slot stays dynamic.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolicBinding;

impl ArrayBinding<SymbolicTensor> for SymbolicBinding {
    fn library(&self) -> &str {
        SYMBOLIC_LIBRARY
    }

    fn shape_of(&self, array: &SymbolicTensor) -> Result<Shape> {
        Ok(array.dims.clone())
    }

    fn transpose(&self, array: &SymbolicTensor, permutation: &Permutation) -> Result<SymbolicTensor> {
        if permutation.rank() != array.rank() {
            bail!(
                "Permutation {} does not match rank {} of {}",
                permutation,
                array.rank(),
                array
            );
        }
        Ok(SymbolicTensor {
            name: array.name.clone(),
            dims: permutation.apply(&array.dims)?,
        })
    }

    fn reshape(&self, array: &SymbolicTensor, target: &TargetShape) -> Result<SymbolicTensor> {
        let dims: Shape = match array.num_elements() {
            Some(total) => target.resolve(total)?.into_iter().map(Dim::Known).collect(),
            None => target
                .as_slice()
                .iter()
                .map(|d| match d {
                    TargetDim::Size(n) => Dim::Known(*n),
                    TargetDim::Infer => Dim::Dynamic,
                })
                .collect(),
        };
        Ok(SymbolicTensor {
            name: array.name.clone(),
            dims,
        })
    }
}

impl BindingRegistry<SymbolicTensor> {
    /// Registry with [`SymbolicBinding`] as the default library
    pub fn symbolic() -> Self {
        let mut registry = Self::new();
        registry.register(SymbolicBinding);
        registry
    }
}
