//! Axis autoscaling engine.
//!
//! Data flows leaf-first through the submodules: [`range_aggregator`]
//! collects raw extents, [`axis_scaler`] rounds each one (using the
//! [`tick_planner`] table), [`axis_reconciler`] aligns the two vertical
//! grids, and [`orchestrator`] writes the result back into the plot settings.

pub mod axis_reconciler;
pub mod axis_scaler;
pub mod orchestrator;
pub mod range_aggregator;
pub mod tick_planner;

pub use axis_reconciler::{ReconcileOptions, ReconciledAxes, Reconciliation, reconcile_axes};
pub use axis_scaler::{MAX_MAJOR_TICKS, SAFETY_FACTOR, adjust_axis, scale_range};
pub use orchestrator::{axes_scale, scale_axes};
pub use range_aggregator::{DataRanges, aggregate_ranges};
pub use tick_planner::{SpanTicks, best_ticks, plan_ticks};
