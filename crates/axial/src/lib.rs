//! # Axial - Rank-Agnostic Axis Manipulation
//!
//! Swap, move, merge and split axes of N-dimensional arrays without knowing
//! their rank ahead of time. Axis references may be negative and are
//! resolved against the shape observed when an operation runs.
//!
//! This is the **meta crate** that re-exports all Axial components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use axial::prelude::*;
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//!
//! let exec = AxisExecutor::new(BindingRegistry::<DenseArray<f64>>::dense());
//! let x: DenseArray<f64> = Array::zeros(IxDyn(&[2, 3, 4, 5]));
//!
//! let y = exec.pack_to_axis(&x, 1, 3)?;
//! assert_eq!(y.shape(), &[2, 4, 15]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Types ([`core`])
//!
//! Dimensions, shapes, permutations, reshape targets and axis resolution.
//!
//! ```
//! use axial::core::{normalize, AxisError};
//!
//! assert_eq!(normalize(-1, 4).unwrap(), 3);
//! assert!(matches!(normalize(4, 4), Err(AxisError::AxisOutOfRange { .. })));
//! ```
//!
//! ### Planning ([`planner`])
//!
//! Pure functions from a shape snapshot to transpose/reshape arguments.
//!
//! ```
//! use axial::core::shape_from_sizes;
//! use axial::planner::{plan_move, plan_pack, PlanHints};
//!
//! assert_eq!(plan_move(4, 1, -1).unwrap().as_slice(), &[0, 2, 3, 1]);
//!
//! let plan = plan_pack(&shape_from_sizes(&[2, 3, 4, 5]), 2, 0, &PlanHints::default()).unwrap();
//! assert_eq!(plan.permutation.as_slice(), &[2, 0, 1, 3]);
//! ```
//!
//! ### Execution ([`exec`])
//!
//! Array library bindings, the binding registry and the axis operations.
//!
//! ```
//! use axial::core::Dim;
//! use axial::exec::{backpack, SymbolicBinding, SymbolicTensor};
//!
//! let x = SymbolicTensor::new("x", [Dim::Dynamic, Dim::Known(3), Dim::Known(4)]);
//! let y = backpack(&x, &SymbolicBinding).unwrap();
//! assert_eq!(y.dims(), &[Dim::Dynamic, Dim::Known(12)]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of shapes and hints
//! - `tracing`: Emit structured events for every planned operation
//! - `full`: Enable all features

pub use axial_core as core;
pub use axial_exec as exec;
pub use axial_planner as planner;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use axial::prelude::*;
    //!
    //! let x = SymbolicTensor::from_sizes("x", &[2, 3, 4]);
    //! assert_eq!(frontswap(&x, &SymbolicBinding).unwrap().rank(), 3);
    //! ```

    // Core types
    pub use crate::core::{AxisError, AxisRef, Dim, Permutation, Shape, TargetDim, TargetShape};

    // Planning
    pub use crate::planner::{plan_move, plan_pack, plan_swap, plan_unpack, PlanHints};

    // Bindings
    pub use crate::exec::{
        ArrayBinding, BindingRegistry, DenseArray, DenseBinding, SymbolicBinding, SymbolicTensor,
    };

    // Operations
    pub use crate::exec::{
        backpack, backswap, frontpack, frontswap, get_shape, pack_to_axis, popinsert_axes, rank,
        swap_axis, unpack_axis, AxisExecutor, ExecHints,
    };
}
