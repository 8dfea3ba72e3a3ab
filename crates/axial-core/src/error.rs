//! Error taxonomy for axis resolution and shape planning
//!
//! Every failure in this crate and in `axial-planner` is an [`AxisError`].
//! All of them are caller input or configuration errors; none are transient,
//! so nothing here is ever retried.
//!
//! # Examples
//!
//! ```
//! use axial_core::{normalize, AxisError};
//!
//! let err = normalize(5, 3).unwrap_err();
//! assert!(matches!(err, AxisError::AxisOutOfRange { axis: 5, rank: 3, .. }));
//! ```

use crate::types::Dim;
use thiserror::Error;

/// Errors raised while resolving axes or planning a transpose/reshape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// An axis reference fell outside `[-rank, rank)`
    #[error("Axis {axis} for argument `{argument}` is out of range for rank {rank} (valid range is [-{rank}, {rank}))")]
    AxisOutOfRange {
        argument: &'static str,
        axis: isize,
        rank: usize,
    },

    /// Both axes of a pack resolved to the same position
    #[error("Cannot pack axis {axis} into itself (rank {rank})")]
    InvalidAxisPair { axis: usize, rank: usize },

    /// No binding is registered under the requested library key
    #[error("No array library binding registered for `{library}`")]
    UnsupportedLibrary { library: String },

    /// A target shape would need more than one inferred slot
    #[error("Target shape {target} needs more than one inferred dimension")]
    AmbiguousReshape { target: String },

    /// An axis cannot be split into the requested inner size
    #[error("Cannot split axis {axis} of size {size} into an inner axis of size {inner}")]
    InvalidSplit { axis: usize, size: Dim, inner: usize },

    /// A sequence is not a bijection on `[0, rank)`
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    /// A target shape cannot hold the given number of elements
    #[error("Cannot reshape {elements} elements into target shape {target}")]
    ReshapeMismatch { target: String, elements: usize },
}
