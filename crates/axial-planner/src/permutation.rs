//! Permutation planning for axis swaps and moves
//!
//! Both plans start from the identity ordering of `[0, rank)` and only touch
//! the axes the caller named, so the caller never needs to know the rank.
//!
//! # Examples
//!
//! ```
//! use axial_planner::{plan_move, plan_swap};
//!
//! // (A, B, C, D) -> (A, D, C, B)
//! assert_eq!(plan_swap(4, 1, -1).unwrap().as_slice(), &[0, 3, 2, 1]);
//!
//! // (A, B, C, D) -> (A, C, D, B)
//! assert_eq!(plan_move(4, 1, -1).unwrap().as_slice(), &[0, 2, 3, 1]);
//! ```

use axial_core::{normalize_all, Axis, AxisError, AxisRef, Permutation, Rank};
use smallvec::SmallVec;

/// Build the permutation that exchanges axes `a` and `b`.
///
/// `a == b` is a no-op and yields the identity.
///
/// # Errors
///
/// Returns [`AxisError::AxisOutOfRange`] if either axis is not in `[-rank, rank)`.
pub fn plan_swap(rank: Rank, a: AxisRef, b: AxisRef) -> Result<Permutation, AxisError> {
    let [a, b] = normalize_all([("a", a), ("b", b)], rank)?;

    let mut axes: SmallVec<[Axis; 6]> = (0..rank).collect();
    axes.swap(a, b);

    let perm = Permutation::new(axes)?;
    log::debug!("swap plan: axes ({}, {}) of rank {} -> {}", a, b, rank, perm);
    Ok(perm)
}

/// Build the permutation that moves axis `src` so it ends up at position `dst`.
///
/// Every other axis keeps its relative order. `dst` is resolved against the
/// original rank, so `-1` moves `src` to the very end and `0` to the front.
///
/// # Errors
///
/// Returns [`AxisError::AxisOutOfRange`] if `src` or `dst` is not in `[-rank, rank)`.
///
/// # Examples
///
/// ```
/// use axial_planner::plan_move;
///
/// // (A, B, C, D, E) -> (A, E, B, C, D)
/// assert_eq!(plan_move(5, -1, 1).unwrap().as_slice(), &[0, 4, 1, 2, 3]);
///
/// // Moving an axis onto its own slot is the identity
/// assert!(plan_move(5, 2, -3).unwrap().is_identity());
/// ```
pub fn plan_move(rank: Rank, src: AxisRef, dst: AxisRef) -> Result<Permutation, AxisError> {
    let [src, dst] = normalize_all([("src", src), ("dst", dst)], rank)?;
    let perm = move_resolved(rank, src, dst)?;
    log::debug!("move plan: axis {} -> {} of rank {} -> {}", src, dst, rank, perm);
    Ok(perm)
}

/// Move for already normalized `src` and `dst`.
pub(crate) fn move_resolved(rank: Rank, src: Axis, dst: Axis) -> Result<Permutation, AxisError> {
    let mut axes: SmallVec<[Axis; 6]> = (0..rank).filter(|&a| a != src).collect();
    axes.insert(dst, src);
    Permutation::new(axes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_exchanges_two_positions() {
        let perm = plan_swap(4, 0, 2).unwrap();
        assert_eq!(perm.as_slice(), &[2, 1, 0, 3]);
    }

    #[test]
    fn test_swap_same_axis_is_identity() {
        assert!(plan_swap(3, 1, 1).unwrap().is_identity());
        assert!(plan_swap(3, 2, -1).unwrap().is_identity());
    }

    #[test]
    fn test_swap_rejects_out_of_range() {
        let err = plan_swap(3, 0, 5).unwrap_err();
        assert_eq!(
            err,
            AxisError::AxisOutOfRange {
                argument: "b",
                axis: 5,
                rank: 3
            }
        );
    }

    #[test]
    fn test_move_to_end() {
        assert_eq!(plan_move(4, 1, -1).unwrap().as_slice(), &[0, 2, 3, 1]);
        assert_eq!(plan_move(4, 1, 3).unwrap().as_slice(), &[0, 2, 3, 1]);
    }

    #[test]
    fn test_move_to_front() {
        assert_eq!(plan_move(4, 3, 0).unwrap().as_slice(), &[3, 0, 1, 2]);
        assert_eq!(plan_move(4, -1, -4).unwrap().as_slice(), &[3, 0, 1, 2]);
    }

    #[test]
    fn test_move_lands_at_destination() {
        for rank in 1..6usize {
            for src in 0..rank {
                for dst in 0..rank {
                    let perm = plan_move(rank, src as isize, dst as isize).unwrap();
                    assert_eq!(perm[dst], src, "rank {} src {} dst {}", rank, src, dst);
                }
            }
        }
    }

    #[test]
    fn test_move_rejects_out_of_range_destination() {
        let err = plan_move(3, 0, -4).unwrap_err();
        assert_eq!(
            err,
            AxisError::AxisOutOfRange {
                argument: "dst",
                axis: -4,
                rank: 3
            }
        );
    }
}
