//! Core type definitions for rank-agnostic axis manipulation.
//!
//! This module defines the values the planner computes and the bindings consume:
//!
//! - Type aliases for axis references ([`AxisRef`], [`Axis`], [`Rank`])
//! - Dimension descriptors ([`Dim`]) and shapes ([`Shape`]) that tolerate dynamic sizes
//! - Validated axis permutations ([`Permutation`]) that drive a transpose
//! - Reshape targets ([`TargetShape`]) with at most one inferred slot
//!
//! None of these values are persisted. They are built for a single operation
//! and dropped once the array library has been called.
//!
//! # Examples
//!
//! ```
//! use axial_core::{shape_from_sizes, Dim, Permutation};
//!
//! let shape = shape_from_sizes(&[2, 3, 4]);
//! let perm = Permutation::new([2, 0, 1]).unwrap();
//! let permuted = perm.apply(&shape).unwrap();
//! assert_eq!(&permuted[..], &[Dim::Known(4), Dim::Known(2), Dim::Known(3)]);
//! ```

use crate::error::AxisError;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

/// A possibly-negative axis reference as given by a caller.
///
/// Negative values count from the last axis: `-1` is the last axis of any rank.
pub type AxisRef = isize;

/// A normalized axis index in `[0, rank)`.
pub type Axis = usize;

/// Number of axes of an array.
pub type Rank = usize;

/// Size of one array dimension.
///
/// Array libraries with deferred execution may not know every size ahead of
/// time. Those sizes are [`Dim::Dynamic`], never `0` or a negative number,
/// since both of those are meaningful to a reshape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dim {
    /// Statically known size
    Known(usize),
    /// Size only known when the array is materialized
    Dynamic,
}

impl Dim {
    /// The concrete size, if known.
    pub fn known(self) -> Option<usize> {
        match self {
            Dim::Known(n) => Some(n),
            Dim::Dynamic => None,
        }
    }

    /// Returns true for [`Dim::Dynamic`].
    pub fn is_dynamic(self) -> bool {
        matches!(self, Dim::Dynamic)
    }

    /// Size of the axis obtained by merging `self` (outer) with `inner`.
    ///
    /// The product is only known when both factors are. Overflow is treated
    /// as unknown rather than wrapping.
    ///
    /// ```
    /// use axial_core::Dim;
    ///
    /// assert_eq!(Dim::Known(3).merged(Dim::Known(4)), Dim::Known(12));
    /// assert_eq!(Dim::Known(3).merged(Dim::Dynamic), Dim::Dynamic);
    /// ```
    pub fn merged(self, inner: Dim) -> Dim {
        match (self, inner) {
            (Dim::Known(a), Dim::Known(b)) => a.checked_mul(b).map_or(Dim::Dynamic, Dim::Known),
            _ => Dim::Dynamic,
        }
    }
}

impl From<usize> for Dim {
    fn from(size: usize) -> Self {
        Dim::Known(size)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Known(n) => write!(f, "{}", n),
            Dim::Dynamic => write!(f, "?"),
        }
    }
}

/// Shape type using SmallVec to avoid heap allocation for common ranks.
///
/// Inline storage covers up to 6 axes and spills to the heap beyond that.
pub type Shape = SmallVec<[Dim; 6]>;

/// Build a fully known [`Shape`] from concrete sizes.
pub fn shape_from_sizes(sizes: &[usize]) -> Shape {
    sizes.iter().map(|&n| Dim::Known(n)).collect()
}

/// Concrete sizes of `shape`, or `None` if any dimension is dynamic.
pub fn known_sizes(shape: &[Dim]) -> Option<Vec<usize>> {
    shape.iter().map(|d| d.known()).collect()
}

/// Total element count of `shape`, or `None` if it cannot be computed statically.
pub fn num_elements(shape: &[Dim]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, d| d.known().and_then(|n| acc.checked_mul(n)))
}

/// Render a shape as `(2, ?, 4)`.
pub fn format_shape(shape: &[Dim]) -> String {
    let parts: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    format!("({})", parts.join(", "))
}

/// A bijection on `[0, rank)` describing a transpose.
///
/// Output axis `i` of the transposed array is input axis `self[i]`, the
/// convention shared by `numpy.transpose` and ndarray's `permuted_axes`.
/// Construction validates the bijection, so a `Permutation` handed to a
/// binding is always well formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    axes: SmallVec<[Axis; 6]>,
}

impl Permutation {
    /// The identity permutation `[0, 1, ..., rank - 1]`.
    pub fn identity(rank: Rank) -> Self {
        Self {
            axes: (0..rank).collect(),
        }
    }

    /// Create a permutation, checking that every index in `[0, len)` appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidPermutation`] on out-of-range or repeated indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use axial_core::Permutation;
    ///
    /// assert!(Permutation::new([1, 0, 2]).is_ok());
    /// assert!(Permutation::new([1, 1, 2]).is_err());
    /// assert!(Permutation::new([0, 3]).is_err());
    /// ```
    pub fn new(axes: impl IntoIterator<Item = Axis>) -> Result<Self, AxisError> {
        let axes: SmallVec<[Axis; 6]> = axes.into_iter().collect();
        let rank = axes.len();
        let mut seen: SmallVec<[bool; 6]> = SmallVec::from_elem(false, rank);
        for &axis in &axes {
            if axis >= rank {
                return Err(AxisError::InvalidPermutation {
                    reason: format!("index {} out of bounds for rank {}", axis, rank),
                });
            }
            if seen[axis] {
                return Err(AxisError::InvalidPermutation {
                    reason: format!("index {} appears more than once", axis),
                });
            }
            seen[axis] = true;
        }
        Ok(Self { axes })
    }

    /// Number of axes this permutation acts on.
    pub fn rank(&self) -> Rank {
        self.axes.len()
    }

    pub fn as_slice(&self) -> &[Axis] {
        &self.axes
    }

    pub fn to_vec(&self) -> Vec<Axis> {
        self.axes.to_vec()
    }

    /// Returns true if applying this permutation leaves every axis in place.
    pub fn is_identity(&self) -> bool {
        self.axes.iter().enumerate().all(|(i, &a)| i == a)
    }

    /// The permutation that undoes `self`.
    ///
    /// ```
    /// use axial_core::Permutation;
    ///
    /// let p = Permutation::new([2, 0, 1]).unwrap();
    /// assert!(p.then(&p.inverse()).unwrap().is_identity());
    /// ```
    pub fn inverse(&self) -> Self {
        let mut inv: SmallVec<[Axis; 6]> = SmallVec::from_elem(0, self.rank());
        for (i, &a) in self.axes.iter().enumerate() {
            inv[a] = i;
        }
        Self { axes: inv }
    }

    /// Compose: transposing by `self` and then by `next` equals transposing by the result.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidPermutation`] if the ranks differ.
    pub fn then(&self, next: &Permutation) -> Result<Self, AxisError> {
        if self.rank() != next.rank() {
            return Err(AxisError::InvalidPermutation {
                reason: format!(
                    "cannot compose permutations of rank {} and {}",
                    self.rank(),
                    next.rank()
                ),
            });
        }
        Ok(Self {
            axes: next.axes.iter().map(|&i| self.axes[i]).collect(),
        })
    }

    /// Reorder `items` (typically a shape) the way a transpose reorders axes.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidPermutation`] if `items.len()` differs from the rank.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<SmallVec<[T; 6]>, AxisError> {
        if items.len() != self.rank() {
            return Err(AxisError::InvalidPermutation {
                reason: format!(
                    "permutation of rank {} applied to {} axes",
                    self.rank(),
                    items.len()
                ),
            });
        }
        Ok(self.axes.iter().map(|&i| items[i].clone()).collect())
    }
}

impl Index<usize> for Permutation {
    type Output = Axis;

    fn index(&self, index: usize) -> &Axis {
        &self.axes[index]
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.axes.as_slice())
    }
}

/// One slot of a reshape target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetDim {
    /// Concrete size
    Size(usize),
    /// Whatever size makes the total element count match
    Infer,
}

impl TargetDim {
    pub fn is_infer(self) -> bool {
        matches!(self, TargetDim::Infer)
    }
}

impl From<Dim> for TargetDim {
    /// Known sizes carry over, dynamic sizes have to be inferred by the library.
    fn from(dim: Dim) -> Self {
        match dim {
            Dim::Known(n) => TargetDim::Size(n),
            Dim::Dynamic => TargetDim::Infer,
        }
    }
}

impl fmt::Display for TargetDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDim::Size(n) => write!(f, "{}", n),
            TargetDim::Infer => write!(f, "-1"),
        }
    }
}

/// Argument of a reshape call: concrete sizes plus at most one [`TargetDim::Infer`].
///
/// # Examples
///
/// ```
/// use axial_core::{TargetDim, TargetShape};
///
/// let target = TargetShape::new([TargetDim::Infer, TargetDim::Size(4)]).unwrap();
/// assert_eq!(target.to_signed(), Some(vec![-1, 4]));
/// assert_eq!(target.resolve(24).unwrap(), vec![6, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetShape {
    dims: SmallVec<[TargetDim; 6]>,
}

impl TargetShape {
    /// Create a target shape.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::AmbiguousReshape`] if more than one slot is `Infer`.
    pub fn new(dims: impl IntoIterator<Item = TargetDim>) -> Result<Self, AxisError> {
        let shape = Self {
            dims: dims.into_iter().collect(),
        };
        if shape.dims.iter().filter(|d| d.is_infer()).count() > 1 {
            return Err(AxisError::AmbiguousReshape {
                target: shape.to_string(),
            });
        }
        Ok(shape)
    }

    /// A target shape with no inferred slot.
    pub fn from_sizes(sizes: &[usize]) -> Self {
        Self {
            dims: sizes.iter().map(|&n| TargetDim::Size(n)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn as_slice(&self) -> &[TargetDim] {
        &self.dims
    }

    /// Position of the inferred slot, if any.
    pub fn infer_position(&self) -> Option<usize> {
        self.dims.iter().position(|d| d.is_infer())
    }

    /// Product of the concrete slots, `None` on overflow.
    pub fn known_product(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |acc, d| match d {
            TargetDim::Size(n) => acc.checked_mul(*n),
            TargetDim::Infer => Some(acc),
        })
    }

    /// Render with `-1` standing for the inferred slot.
    ///
    /// Returns `None` if a concrete size does not fit in `isize`.
    pub fn to_signed(&self) -> Option<Vec<isize>> {
        self.dims
            .iter()
            .map(|d| match d {
                TargetDim::Size(n) => isize::try_from(*n).ok(),
                TargetDim::Infer => Some(-1),
            })
            .collect()
    }

    /// Concrete sizes for an array holding `elements` values.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::ReshapeMismatch`] if the concrete slots do not
    /// divide `elements` (or do not equal it when nothing is inferred), or if
    /// the inferred slot is ambiguous because a concrete slot is zero.
    pub fn resolve(&self, elements: usize) -> Result<Vec<usize>, AxisError> {
        let mismatch = || AxisError::ReshapeMismatch {
            target: self.to_string(),
            elements,
        };
        let known = self.known_product().ok_or_else(mismatch)?;
        match self.infer_position() {
            None if known == elements => Ok(self.concrete(0)),
            None => Err(mismatch()),
            Some(_) if known == 0 || elements % known != 0 => Err(mismatch()),
            Some(_) => Ok(self.concrete(elements / known)),
        }
    }

    fn concrete(&self, inferred: usize) -> Vec<usize> {
        self.dims
            .iter()
            .map(|d| match d {
                TargetDim::Size(n) => *n,
                TargetDim::Infer => inferred,
            })
            .collect()
    }
}

impl Index<usize> for TargetShape {
    type Output = TargetDim;

    fn index(&self, index: usize) -> &TargetDim {
        &self.dims[index]
    }
}

impl fmt::Display for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}
