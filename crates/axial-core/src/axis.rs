//! Axis reference resolution
//!
//! Callers name axes positionally and may count from the end, so `-1` is the
//! last axis whatever the rank. Everything downstream works on normalized
//! indices in `[0, rank)`.
//!
//! The rank is never cached: every operation snapshots it once from the array
//! it was given and resolves all of its axis arguments against that snapshot.
//!
//! # Examples
//!
//! ```
//! use axial_core::{normalize, normalize_all};
//!
//! assert_eq!(normalize(-1, 4).unwrap(), 3);
//! assert_eq!(normalize(2, 4).unwrap(), 2);
//! assert!(normalize(4, 4).is_err());
//!
//! let [src, dst] = normalize_all([("src", 0), ("dst", -2)], 4).unwrap();
//! assert_eq!((src, dst), (0, 2));
//! ```

use crate::error::AxisError;
use crate::types::{Axis, AxisRef, Rank};

/// Resolve a single axis reference against `rank`.
///
/// # Errors
///
/// Returns [`AxisError::AxisOutOfRange`] if `axis` is not in `[-rank, rank)`.
pub fn normalize(axis: AxisRef, rank: Rank) -> Result<Axis, AxisError> {
    normalize_named("axis", axis, rank)
}

/// Resolve an axis reference, naming the argument it came from in any error.
pub fn normalize_named(argument: &'static str, axis: AxisRef, rank: Rank) -> Result<Axis, AxisError> {
    let offset = axis.unsigned_abs();
    let resolved = if axis < 0 {
        rank.checked_sub(offset)
    } else {
        Some(offset).filter(|&a| a < rank)
    };
    resolved.ok_or(AxisError::AxisOutOfRange {
        argument,
        axis,
        rank,
    })
}

/// Resolve several named axis references against the same rank snapshot.
///
/// Fails on the first reference that is out of range.
pub fn normalize_all<const N: usize>(
    refs: [(&'static str, AxisRef); N],
    rank: Rank,
) -> Result<[Axis; N], AxisError> {
    let mut resolved = [0; N];
    for (slot, (argument, axis)) in resolved.iter_mut().zip(refs) {
        *slot = normalize_named(argument, axis, rank)?;
    }
    Ok(resolved)
}
