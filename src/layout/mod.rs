//! Geometry helpers for renderers consuming scaled axes.

pub mod projection;
pub mod ticks;

pub use projection::{ProjectedPoint, project_line, vertical_axis_for};
pub use ticks::{
    TickMarkLengths, TickValues, major_tick_values, minor_tick_values, tick_labels,
    tick_mark_lengths, zero_if_tiny,
};
