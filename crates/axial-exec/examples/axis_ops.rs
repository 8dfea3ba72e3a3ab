//! Example: Rank-agnostic axis operations
//!
//! This example runs the same swap/move/pack calls on a dense ndarray batch
//! and on a symbolic tensor with a dynamic batch dimension, then shows the
//! errors raised for invalid requests.

use axial_core::{AxisError, Dim};
use axial_exec::tracing_support::{init_tracing, TracingConfig};
use axial_exec::{AxisExecutor, BindingRegistry, DenseArray, ExecHints, SymbolicTensor};
use axial_planner::{plan_pack, PlanHints};
use scirs2_core::ndarray_ext::{Array, IxDyn};

fn main() -> anyhow::Result<()> {
    // No-op unless built with the `tracing` feature
    init_tracing(TracingConfig::from_env())?;

    println!("Axis Operations Example");
    println!("=======================");
    println!();

    // Example 1: Dense arrays
    println!("1. DENSE ARRAYS (ndarray)");
    println!("-------------------------");
    let dense = AxisExecutor::new(BindingRegistry::<DenseArray<f32>>::dense());
    let images: DenseArray<f32> = Array::zeros(IxDyn(&[8, 3, 32, 32]));
    println!("  Input:                {:?}", images.shape());

    let channels_last = dense.popinsert_axes(&images, 1, -1)?;
    println!("  popinsert_axes(1, -1): {:?}", channels_last.shape());

    let rows = dense.frontpack(&channels_last)?;
    println!("  frontpack:            {:?}", rows.shape());

    let restored = dense.unpack_axis(&rows, 0, 32)?;
    println!("  unpack_axis(0, 32):   {:?}", restored.shape());
    println!();

    // Example 2: Dynamic batch dimension
    println!("2. SYMBOLIC TENSOR (dynamic batch)");
    println!("----------------------------------");
    let symbolic = AxisExecutor::new(BindingRegistry::<SymbolicTensor>::symbolic());
    let batch = SymbolicTensor::new(
        "batch",
        [Dim::Dynamic, Dim::Known(16), Dim::Known(4), Dim::Known(64)],
    );
    println!("  Input:        {}", batch);
    println!("  backswap:     {}", symbolic.backswap(&batch)?);
    println!("  backpack:     {}", symbolic.backpack(&batch)?);
    println!("  frontpack:    {}", symbolic.frontpack(&batch)?);
    println!();

    // Example 3: Inspecting a plan
    println!("3. PACK PLAN");
    println!("------------");
    let plan = plan_pack(batch.dims(), 1, 3, &PlanHints::default())?;
    println!("  pack(1, 3): {}", plan);
    println!();

    // Example 4: Errors
    println!("4. ERRORS");
    println!("---------");
    if let Err(err) = symbolic.swap_axis(&batch, 0, 5) {
        println!("  swap_axis(0, 5): {}", err);
    }

    let fully_dynamic = SymbolicTensor::new("x", [Dim::Dynamic, Dim::Dynamic, Dim::Dynamic]);
    if let Err(err) = symbolic.frontpack(&fully_dynamic) {
        if let Some(AxisError::AmbiguousReshape { target }) = err.downcast_ref::<AxisError>() {
            println!("  frontpack on {}: ambiguous target {}", fully_dynamic, target);
        }
    }

    let torch = symbolic.with_hints(ExecHints::new().with_library("torch"));
    if let Err(err) = torch.frontswap(&batch) {
        println!("  library \"torch\": {}", err);
    }

    Ok(())
}
