//! xyplot-rs: axis auto-scaling and tick planning for XY plots.
//!
//! The crate turns raw point collections into "nice" axis bounds and
//! major/minor tick counts for an x axis, a primary y axis and an optional
//! secondary y axis. Rendering is left to the host; [`layout`] offers the
//! small amount of geometry a renderer needs to consume the result.

pub mod core;
pub mod error;
pub mod layout;
pub mod scaling;
pub mod telemetry;

pub use crate::core::{
    AxisParameters, AxisRange, AxisSlot, PlotData, PlotLine, PlotPoint, PlotSettings, TickPlan,
};
pub use error::{PlotError, PlotResult};
pub use scaling::{adjust_axis, axes_scale, scale_axes, scale_range};
