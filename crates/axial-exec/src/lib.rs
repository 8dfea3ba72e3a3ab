//! # axial-exec
//!
//! Array library bindings and axis operations for Axial.
//!
//! This crate provides:
//! - [`ArrayBinding`] - the shape query and transpose/reshape kernels of one array library
//! - [`BindingRegistry`] - bindings selected by library key, with a default library
//! - [`DenseBinding`] for scirs2_core ndarray arrays and [`SymbolicBinding`] for
//!   shape-only tensors with dynamic dimensions
//! - The axis operations [`swap_axis`], [`popinsert_axes`], [`pack_to_axis`],
//!   [`unpack_axis`] and their front/back shorthands
//! - [`AxisExecutor`] - runs the operations against the binding picked by [`ExecHints`]
//!
//! ## Quick Start
//!
//! ```
//! use axial_exec::{AxisExecutor, BindingRegistry, DenseArray};
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//!
//! let exec = AxisExecutor::new(BindingRegistry::<DenseArray<f32>>::dense());
//! let x: DenseArray<f32> = Array::zeros(IxDyn(&[8, 3, 32, 32]));
//!
//! // Channels last, then fold the batch into the rows
//! let y = exec.popinsert_axes(&x, 1, -1).unwrap();
//! assert_eq!(y.shape(), &[8, 32, 32, 3]);
//! let z = exec.frontpack(&y).unwrap();
//! assert_eq!(z.shape(), &[256, 32, 3]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: Emit structured events per operation via `tracing`
//! - `serde`: Enable serialization/deserialization of [`ExecHints`]

pub mod binding;
pub mod dense;
pub mod executor;
pub mod hints;
pub mod ops;
pub mod registry;
pub mod symbolic;
pub mod tracing_support;

pub use binding::{get_shape, rank, ArrayBinding};
pub use dense::{DenseArray, DenseBinding, DENSE_LIBRARY};
pub use executor::AxisExecutor;
pub use hints::ExecHints;
pub use ops::{
    backpack, backswap, frontpack, frontswap, pack_to_axis, pack_to_axis_with, popinsert_axes,
    popinsert_axes_with, swap_axis, swap_axis_with, unpack_axis, unpack_axis_with,
};
pub use registry::BindingRegistry;
pub use symbolic::{SymbolicBinding, SymbolicTensor, SYMBOLIC_LIBRARY};
