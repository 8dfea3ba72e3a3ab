//! # axial-core
//!
//! Core types and axis resolution for Axial.
//!
//! This crate provides the vocabulary every other Axial crate speaks:
//!
//! - **Dimensions and shapes** ([`Dim`], [`Shape`]) where a size may be dynamic
//! - **Permutations** ([`Permutation`]) validated as bijections on `[0, rank)`
//! - **Reshape targets** ([`TargetShape`]) with at most one inferred slot
//! - **Axis resolution** ([`normalize`], [`normalize_all`]) for negative axis references
//! - **Errors** ([`AxisError`]) for every planning failure
//!
//! ## Core Principles
//!
//! ### Rank Agnostic
//!
//! Nothing in this crate assumes a fixed rank. Shapes are observed when an
//! operation runs and every axis reference is resolved against that snapshot.
//!
//! ### No Array Data
//!
//! These types only describe how an array should be viewed. Array handles are
//! owned by the array library and are never touched here.
//!
//! ## Quick Start
//!
//! ```
//! use axial_core::{normalize, shape_from_sizes, Permutation};
//!
//! let shape = shape_from_sizes(&[2, 3, 4, 5]);
//! let last = normalize(-1, shape.len()).unwrap();
//! assert_eq!(last, 3);
//!
//! let perm = Permutation::new([0, 3, 1, 2]).unwrap();
//! let moved = perm.apply(&shape).unwrap();
//! assert_eq!(moved[1], shape[3]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of [`Dim`], [`TargetDim`] and [`Shape`]

pub mod axis;
pub mod error;
pub mod types;


pub use axis::{normalize, normalize_all, normalize_named};
pub use error::AxisError;
pub use types::{
    format_shape, known_sizes, num_elements, shape_from_sizes, Axis, AxisRef, Dim, Permutation,
    Rank, Shape, TargetDim, TargetShape,
};
