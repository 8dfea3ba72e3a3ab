//! # axial-planner
//!
//! Permutation and reshape planning for Axial.
//!
//! This crate turns a small, rank-independent intent such as "swap axis 1 and
//! the last axis" or "pack axis 0 into axis 1" into the concrete arguments of
//! a transpose and/or reshape call:
//!
//! - [`plan_swap`]: permutation exchanging two axes
//! - [`plan_move`]: permutation moving one axis to a new position
//! - [`plan_pack`]: permutation plus reshape target merging two axes
//! - [`plan_unpack`]: reshape target splitting one axis in two
//!
//! Every plan is a pure function of the observed shape and the axis
//! references. Invalid input fails with an [`AxisError`](axial_core::AxisError)
//! before any array library is called.
//!
//! ## Quick Start
//!
//! ```
//! use axial_core::{shape_from_sizes, TargetShape};
//! use axial_planner::{plan_pack, plan_swap, PlanHints};
//!
//! let perm = plan_swap(3, 0, -1).unwrap();
//! assert_eq!(perm.as_slice(), &[2, 1, 0]);
//!
//! let shape = shape_from_sizes(&[2, 3, 4, 5]);
//! let plan = plan_pack(&shape, 0, 1, &PlanHints::default()).unwrap();
//! assert_eq!(plan.target, TargetShape::from_sizes(&[6, 4, 5]));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of [`PlanHints`]

pub mod hints;
pub mod pack;
pub mod permutation;


pub use hints::PlanHints;
pub use pack::{plan_pack, plan_unpack, PackPlan, UnpackPlan};
pub use permutation::{plan_move, plan_swap};
